// tests/support/helpers.rs
use super::mocks::{FixedClock, RecordingRepository};
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, StatusCode};
use crossblog::application::ports::time::Clock;
use crossblog::application::resources::{
    articles::ArticleResourceService, comments::CommentResourceService,
};
use crossblog::application::services::ApplicationServices;
use crossblog::domain::article::{Article, ArticleRepository};
use crossblog::domain::comment::{Comment, CommentRepository};
use crossblog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Repositories backing a test harness, kept so tests can inspect writes.
pub struct TestStores {
    pub articles: Arc<RecordingRepository<Article>>,
    pub comments: Arc<RecordingRepository<Comment>>,
}

impl TestStores {
    pub fn seeded(articles: Vec<Article>, comments: Vec<Comment>) -> Self {
        Self {
            articles: Arc::new(RecordingRepository::with_items(articles)),
            comments: Arc::new(RecordingRepository::with_items(comments)),
        }
    }

    pub fn empty() -> Self {
        Self::seeded(Vec::new(), Vec::new())
    }

    fn article_repo(&self) -> Arc<ArticleRepository> {
        self.articles.clone()
    }

    fn comment_repo(&self) -> Arc<CommentRepository> {
        self.comments.clone()
    }

    pub fn article_service(&self) -> ArticleResourceService {
        ArticleResourceService::new(self.article_repo(), self.comment_repo(), clock())
    }

    pub fn comment_service(&self) -> CommentResourceService {
        CommentResourceService::new(self.article_repo(), self.comment_repo(), clock())
    }

    pub fn router(&self) -> axum::Router {
        router_for(self.article_repo(), self.comment_repo())
    }
}

pub fn router_for(
    articles: Arc<ArticleRepository>,
    comments: Arc<CommentRepository>,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(articles, comments, clock()));
    build_router(HttpState { services }, &[])
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock)
}

pub async fn make_test_router() -> axum::Router {
    TestStores::empty().router()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_bytes(resp: Response<Body>) -> Vec<u8> {
    body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn read_json(resp: Response<Body>) -> Value {
    let bytes = read_bytes(resp).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and that the body is empty.
pub async fn assert_empty_response(resp: Response<Body>, expected: StatusCode) {
    assert_eq!(resp.status(), expected);
    assert!(read_bytes(resp).await.is_empty());
}
