// src/application/resources/articles/delete.rs
use super::ArticleResourceService;
use crate::{
    application::{error::ApplicationResult, outcome::ResourceOutcome},
    domain::{
        article::Article, comment::CommentBelongsToArticleSpec, errors::DomainError,
        specification::Specification,
    },
};

impl ArticleResourceService {
    /// Removes the article together with every comment it owns.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn delete_article(&self, id: i64) -> ApplicationResult<ResourceOutcome<()>> {
        let Some(article) = self.find(id).await? else {
            tracing::debug!(article_id = id, "article not found");
            return Ok(ResourceOutcome::NotFound);
        };

        let removed_comments = self.remove_owned_comments(&article).await?;
        self.articles.remove(&article).await?;
        tracing::info!(article_id = %article.id, removed_comments, "article deleted");
        Ok(ResourceOutcome::Deleted)
    }

    /// Runs before the article itself is removed, so a failure here leaves the
    /// article reachable.
    async fn remove_owned_comments(&self, article: &Article) -> ApplicationResult<usize> {
        let spec = CommentBelongsToArticleSpec::new(article.id);
        let owned = self
            .comments
            .query()
            .filter(move |comment| spec.is_satisfied_by(comment))
            .to_vec()
            .await?;

        let mut removed = 0;
        for comment in &owned {
            match self.comments.remove(comment).await {
                Ok(()) => removed += 1,
                // Already gone through a concurrent delete.
                Err(DomainError::NotFound(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(removed)
    }
}
