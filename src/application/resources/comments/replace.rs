use super::CommentResourceService;
use crate::application::{
    dto::{CommentDto, CommentInput},
    error::ApplicationResult,
    outcome::ResourceOutcome,
    validation::Payload,
};

pub struct ReplaceCommentCommand {
    pub article_id: i64,
    pub comment_id: i64,
    pub input: Payload<CommentInput>,
}

impl CommentResourceService {
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn replace_comment(
        &self,
        command: ReplaceCommentCommand,
    ) -> ApplicationResult<ResourceOutcome<CommentDto>> {
        let ReplaceCommentCommand {
            article_id,
            comment_id,
            input,
        } = command;

        let Some(article) = self.find_article(article_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };
        let Some(mut comment) = self.find_owned_comment(&article, comment_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };

        let fields = match Self::fields_from_input(input, comment.date) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(article_id, comment_id, ?errors, "comment input rejected");
                return Ok(ResourceOutcome::ValidationFailed(errors));
            }
        };

        comment.replace_fields(fields);
        let updated = self.comments.update(&comment).await?;
        tracing::info!(article_id, comment_id, "comment replaced");
        Ok(ResourceOutcome::Ok(updated.into()))
    }
}
