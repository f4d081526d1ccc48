// src/presentation/http/controllers/articles.rs
use crate::application::{
    ResourceOutcome,
    dto::{ArticleDto, ArticleInput, ArticleListResponse},
    resources::articles::{ReplaceArticleCommand, SearchArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleSearchParams {
    /// Case-sensitive fragment of the article title.
    #[serde(default)]
    pub term: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every stored article.", body = ArticleListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<ResourceOutcome<ArticleListResponse>> {
    state
        .services
        .articles
        .search_articles(SearchArticlesQuery { term: None })
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(ArticleSearchParams),
    responses(
        (status = 200, description = "Articles whose title contains the term.", body = ArticleListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<ResourceOutcome<ArticleListResponse>> {
    state
        .services
        .articles
        .search_articles(SearchArticlesQuery { term: params.term })
        .await
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<ResourceOutcome<ArticleDto>> {
    state.services.articles.get_article(id).await.into_http()
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleInput,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ValidationErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload<ArticleInput>,
) -> HttpResult<ResourceOutcome<ArticleDto>> {
    state
        .services
        .articles
        .create_article(payload)
        .await
        .into_http()
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleInput,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::response::ValidationErrorResponse),
        (status = 404, description = "No such article."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn replace_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonPayload(payload): JsonPayload<ArticleInput>,
) -> HttpResult<ResourceOutcome<ArticleDto>> {
    state
        .services
        .articles
        .replace_article(ReplaceArticleCommand { id, input: payload })
        .await
        .into_http()
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 404, description = "No such article."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<ResourceOutcome<()>> {
    state.services.articles.delete_article(id).await.into_http()
}
