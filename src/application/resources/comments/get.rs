use super::CommentResourceService;
use crate::application::{dto::CommentDto, error::ApplicationResult, outcome::ResourceOutcome};

pub struct GetCommentQuery {
    pub article_id: i64,
    pub comment_id: i64,
}

impl CommentResourceService {
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub async fn get_comment(
        &self,
        query: GetCommentQuery,
    ) -> ApplicationResult<ResourceOutcome<CommentDto>> {
        let Some(article) = self.find_article(query.article_id).await? else {
            return Ok(ResourceOutcome::NotFound);
        };

        match self.find_owned_comment(&article, query.comment_id).await? {
            Some(comment) => Ok(ResourceOutcome::Ok(comment.into())),
            None => Ok(ResourceOutcome::NotFound),
        }
    }
}
