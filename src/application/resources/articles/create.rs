// src/application/resources/articles/create.rs
use super::ArticleResourceService;
use crate::application::{
    dto::{ArticleDto, ArticleInput},
    error::ApplicationResult,
    outcome::ResourceOutcome,
    validation::Payload,
};

impl ArticleResourceService {
    /// # Errors
    ///
    /// Returns an error when the store fails to persist the article.
    pub async fn create_article(
        &self,
        input: impl Into<Payload<ArticleInput>>,
    ) -> ApplicationResult<ResourceOutcome<ArticleDto>> {
        let fields = match Self::fields_from_input(input.into(), self.now()) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(?errors, "article input rejected");
                return Ok(ResourceOutcome::ValidationFailed(errors));
            }
        };

        let created = self.articles.add(fields).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(ResourceOutcome::Created(created.into()))
    }
}
