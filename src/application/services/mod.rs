// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        resources::{articles::ArticleResourceService, comments::CommentResourceService},
    },
    domain::{article::ArticleRepository, comment::CommentRepository},
};

pub struct ApplicationServices {
    pub articles: Arc<ArticleResourceService>,
    pub comments: Arc<CommentResourceService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_repo: Arc<ArticleRepository>,
        comment_repo: Arc<CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let articles = Arc::new(ArticleResourceService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));

        let comments = Arc::new(CommentResourceService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));

        Self { articles, comments }
    }
}
