// src/application/resources/comments/service.rs
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    application::{
        dto::CommentInput,
        error::ApplicationResult,
        outcome::FieldErrors,
        ports::time::Clock,
        validation::{Payload, field_error, validate_input},
    },
    domain::{
        article::{Article, ArticleId, ArticleRepository},
        comment::{
            Comment, CommentBelongsToArticleSpec, CommentFields, CommentId, CommentRepository,
            CommentTitle,
        },
        specification::Specification,
    },
};

pub struct CommentResourceService {
    pub(super) articles: Arc<ArticleRepository>,
    pub(super) comments: Arc<CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentResourceService {
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

    /// Resolves the parent article named in the request path.
    pub(super) async fn find_article(&self, article_id: i64) -> ApplicationResult<Option<Article>> {
        let Ok(id) = ArticleId::new(article_id) else {
            return Ok(None);
        };
        let article = self.articles.get(id).await?;
        if article.is_none() {
            tracing::debug!(article_id, "parent article not found");
        }
        Ok(article)
    }

    /// Looks up a comment and only yields it when `article` owns it. A comment
    /// addressed through another article is indistinguishable from a missing one.
    pub(super) async fn find_owned_comment(
        &self,
        article: &Article,
        comment_id: i64,
    ) -> ApplicationResult<Option<Comment>> {
        let Ok(id) = CommentId::new(comment_id) else {
            return Ok(None);
        };

        let Some(comment) = self.comments.get(id).await? else {
            tracing::debug!(article_id = %article.id, comment_id, "comment not found");
            return Ok(None);
        };

        if !CommentBelongsToArticleSpec::new(article.id).is_satisfied_by(&comment) {
            tracing::debug!(
                article_id = %article.id,
                owner_id = %comment.article_id,
                comment_id,
                "comment addressed under a different article"
            );
            return Ok(None);
        }

        Ok(Some(comment))
    }

    pub(super) fn fields_from_input(
        input: Payload<CommentInput>,
        fallback_date: DateTime<Utc>,
    ) -> Result<CommentFields, FieldErrors> {
        let input = input.into_result()?;
        validate_input(&input)?;

        let CommentInput {
            email,
            title,
            content,
            date,
            published,
        } = input;

        let title = CommentTitle::new(title.unwrap_or_default())
            .map_err(|err| field_error("title", &err))?;

        Ok(CommentFields {
            email: email.unwrap_or_default(),
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
