use super::ArticleResourceService;
use crate::application::{dto::ArticleDto, error::ApplicationResult, outcome::ResourceOutcome};

impl ArticleResourceService {
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub async fn get_article(&self, id: i64) -> ApplicationResult<ResourceOutcome<ArticleDto>> {
        match self.find(id).await? {
            Some(article) => Ok(ResourceOutcome::Ok(article.into())),
            None => {
                tracing::debug!(article_id = id, "article not found");
                Ok(ResourceOutcome::NotFound)
            }
        }
    }
}
