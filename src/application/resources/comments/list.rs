use super::CommentResourceService;
use crate::{
    application::{dto::CommentListResponse, error::ApplicationResult, outcome::ResourceOutcome},
    domain::{comment::CommentBelongsToArticleSpec, specification::Specification},
};

impl CommentResourceService {
    /// Every comment owned by the article, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub async fn list_comments(
        &self,
        article_id: i64,
    ) -> ApplicationResult<ResourceOutcome<CommentListResponse>> {
        let Some(article) = self.find_article(article_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };

        let spec = CommentBelongsToArticleSpec::new(article.id);
        let comments = self
            .comments
            .query()
            .filter(move |comment| spec.is_satisfied_by(comment))
            .to_vec()
            .await?;

        Ok(ResourceOutcome::Ok(comments.into()))
    }
}
