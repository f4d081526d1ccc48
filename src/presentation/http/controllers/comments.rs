// src/presentation/http/controllers/comments.rs
use crate::application::{
    ResourceOutcome,
    dto::{CommentDto, CommentInput, CommentListResponse},
    resources::comments::{
        CreateCommentCommand, DeleteCommentCommand, GetCommentQuery, ReplaceCommentCommand,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/articles/{article_id}/comments",
    params(("article_id" = i64, Path, description = "Owning article identifier")),
    responses(
        (status = 200, description = "Comments of the article.", body = CommentListResponse),
        (status = 404, description = "No such article."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<ResourceOutcome<CommentListResponse>> {
    state
        .services
        .comments
        .list_comments(article_id)
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{article_id}/comments/{comment_id}",
    params(
        ("article_id" = i64, Path, description = "Owning article identifier"),
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "The comment.", body = CommentDto),
        (status = 404, description = "No such article, or no such comment under it."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path((article_id, comment_id)): Path<(i64, i64)>,
) -> HttpResult<ResourceOutcome<CommentDto>> {
    state
        .services
        .comments
        .get_comment(GetCommentQuery {
            article_id,
            comment_id,
        })
        .await
        .into_http()
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{article_id}/comments",
    params(("article_id" = i64, Path, description = "Owning article identifier")),
    request_body = CommentInput,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ValidationErrorResponse),
        (status = 404, description = "No such article."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
    JsonPayload(payload): JsonPayload<CommentInput>,
) -> HttpResult<ResourceOutcome<CommentDto>> {
    state
        .services
        .comments
        .create_comment(CreateCommentCommand {
            article_id,
            input: payload,
        })
        .await
        .into_http()
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{article_id}/comments/{comment_id}",
    params(
        ("article_id" = i64, Path, description = "Owning article identifier"),
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    request_body = CommentInput,
    responses(
        (status = 200, description = "Comment replaced.", body = CommentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ValidationErrorResponse),
        (status = 404, description = "No such article, or no such comment under it."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn replace_comment(
    Extension(state): Extension<HttpState>,
    Path((article_id, comment_id)): Path<(i64, i64)>,
    JsonPayload(payload): JsonPayload<CommentInput>,
) -> HttpResult<ResourceOutcome<CommentDto>> {
    state
        .services
        .comments
        .replace_comment(ReplaceCommentCommand {
            article_id,
            comment_id,
            input: payload,
        })
        .await
        .into_http()
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{article_id}/comments/{comment_id}",
    params(
        ("article_id" = i64, Path, description = "Owning article identifier"),
        ("comment_id" = i64, Path, description = "Comment identifier")
    ),
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 404, description = "No such article, or no such comment under it."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path((article_id, comment_id)): Path<(i64, i64)>,
) -> HttpResult<ResourceOutcome<()>> {
    state
        .services
        .comments
        .delete_comment(DeleteCommentCommand {
            article_id,
            comment_id,
        })
        .await
        .into_http()
}
