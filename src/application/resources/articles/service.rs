// src/application/resources/articles/service.rs
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleInput,
        error::ApplicationResult,
        outcome::FieldErrors,
        ports::time::Clock,
        validation::{Payload, field_error, validate_input},
    },
    domain::{
        article::{Article, ArticleFields, ArticleId, ArticleRepository, ArticleTitle},
        comment::CommentRepository,
    },
};

pub struct ArticleResourceService {
    pub(super) articles: Arc<ArticleRepository>,
    pub(super) comments: Arc<CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleResourceService {
    #[must_use]
    pub const fn new(
        articles: Arc<ArticleRepository>,
        comments: Arc<CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            comments,
            clock,
        }
    }

    /// Point lookup by raw path id. Ids that can never be assigned resolve to
    /// `None` without reaching the store.
    pub(super) async fn find(&self, id: i64) -> ApplicationResult<Option<Article>> {
        let Ok(id) = ArticleId::new(id) else {
            return Ok(None);
        };
        Ok(self.articles.get(id).await?)
    }

    /// Validates `input` and builds the article fields from it. `fallback_date`
    /// is used when the input carries no date.
    pub(super) fn fields_from_input(
        input: Payload<ArticleInput>,
        fallback_date: DateTime<Utc>,
    ) -> Result<ArticleFields, FieldErrors> {
        let input = input.into_result()?;
        validate_input(&input)?;

        let ArticleInput {
            title,
            content,
            date,
            published,
        } = input;

        let title = ArticleTitle::new(title.unwrap_or_default())
            .map_err(|err| field_error("title", &err))?;

        Ok(ArticleFields {
            title,
            content: content.unwrap_or_default(),
            date: date.unwrap_or(fallback_date),
            published,
        })
    }

    pub(super) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
