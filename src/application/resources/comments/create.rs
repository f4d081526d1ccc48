// src/application/resources/comments/create.rs
use super::CommentResourceService;
use crate::{
    application::{
        dto::{CommentDto, CommentInput},
        error::ApplicationResult,
        outcome::ResourceOutcome,
        validation::Payload,
    },
    domain::comment::NewComment,
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub input: Payload<CommentInput>,
}

impl CommentResourceService {
    /// The new comment is always owned by the article named in the path.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<ResourceOutcome<CommentDto>> {
        let CreateCommentCommand { article_id, input } = command;

        let Some(article) = self.find_article(article_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };

        let fields = match Self::fields_from_input(input, self.now()) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(article_id, ?errors, "comment input rejected");
                return Ok(ResourceOutcome::ValidationFailed(errors));
            }
        };

        let created = self
            .comments
            .add(NewComment {
                article_id: article.id,
                fields,
            })
            .await?;
        tracing::info!(article_id = %created.article_id, comment_id = %created.id, "comment created");
        Ok(ResourceOutcome::Created(created.into()))
    }
}
