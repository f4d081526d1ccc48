use super::CommentResourceService;
use crate::application::{error::ApplicationResult, outcome::ResourceOutcome};

pub struct DeleteCommentCommand {
    pub article_id: i64,
    pub comment_id: i64,
}

impl CommentResourceService {
    /// # Errors
    ///
    /// Returns an error when the store fails.
    pub async fn delete_comment(
        &self,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<ResourceOutcome<()>> {
        let Some(article) = self.find_article(command.article_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };
        let Some(comment) = self.find_owned_comment(&article, command.comment_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };

        self.comments.remove(&comment).await?;
        tracing::info!(
            article_id = command.article_id,
            comment_id = command.comment_id,
            "comment deleted"
        );
        Ok(ResourceOutcome::Deleted)
    }
}
