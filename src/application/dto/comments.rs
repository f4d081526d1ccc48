use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating or replacing a comment. The owning article is
/// always taken from the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommentInput {
    #[serde(default)]
    pub email: Option<String>,
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title cannot be empty")
    )]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub email: String,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            email: comment.email,
            title: comment.title.into_inner(),
            content: comment.content,
            date: comment.date,
            published: comment.published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentSummaryDto {
    pub id: i64,
    pub article_id: i64,
    pub email: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

impl From<Comment> for CommentSummaryDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            email: comment.email,
            title: comment.title.into_inner(),
            date: comment.date,
            published: comment.published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentSummaryDto>,
}

impl From<Vec<Comment>> for CommentListResponse {
    fn from(comments: Vec<Comment>) -> Self {
        Self {
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}
