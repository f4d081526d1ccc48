use super::ArticleResourceService;
use crate::application::{
    dto::{ArticleDto, ArticleInput},
    error::ApplicationResult,
    outcome::ResourceOutcome,
    validation::Payload,
};

pub struct ReplaceArticleCommand {
    pub id: i64,
    pub input: Payload<ArticleInput>,
}

impl ArticleResourceService {
    /// Overwrites title, content, date and published flag. A missing date
    /// keeps the stored one.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn replace_article(
        &self,
        command: ReplaceArticleCommand,
    ) -> ApplicationResult<ResourceOutcome<ArticleDto>> {
        let ReplaceArticleCommand { id, input } = command;

        let Some(mut article) = self.find(id).await? else {
            tracing::debug!(article_id = id, "article not found");
            return Ok(ResourceOutcome::NotFound);
        };

        let fields = match Self::fields_from_input(input, article.date) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(article_id = id, ?errors, "article input rejected");
                return Ok(ResourceOutcome::ValidationFailed(errors));
            }
        };

        article.replace_fields(fields);
        let updated = self.articles.update(&article).await?;
        tracing::info!(article_id = %updated.id, "article replaced");
        Ok(ResourceOutcome::Ok(updated.into()))
    }
}
