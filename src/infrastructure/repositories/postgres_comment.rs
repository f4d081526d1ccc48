// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentFields, CommentId, CommentTitle, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repository::{QueryView, Repository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SELECT_COMMENTS: &str =
    "SELECT id, article_id, email, title, content, date, published FROM comments ORDER BY id";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    email: String,
    title: String,
    content: String,
    date: DateTime<Utc>,
    published: bool,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            email: row.email,
            title: CommentTitle::new(row.title)?,
            content: row.content,
            date: row.date,
            published: row.published,
        })
    }
}

#[async_trait]
impl Repository<Comment> for PostgresCommentRepository {
    fn query(&self) -> QueryView<Comment> {
        let pool = self.pool.clone();
        QueryView::deferred(async move {
            let rows = sqlx::query_as::<_, CommentRow>(SELECT_COMMENTS)
                .fetch_all(&pool)
                .await
                .map_err(map_sqlx)?;
            rows.into_iter().map(Comment::try_from).collect()
        })
    }

    async fn get(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, email, title, content, date, published
             FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn add(&self, new: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            fields:
                CommentFields {
                    email,
                    title,
                    content,
                    date,
                    published,
                },
        } = new;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, email, title, content, date, published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, article_id, email, title, content, date, published",
        )
        .bind(i64::from(article_id))
        .bind(email)
        .bind(title.into_inner())
        .bind(content)
        .bind(date)
        .bind(published)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, comment: &Comment) -> DomainResult<Comment> {
        // article_id is immutable once stored.
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET email = $1, title = $2, content = $3, date = $4, published = $5
             WHERE id = $6
             RETURNING id, article_id, email, title, content, date, published",
        )
        .bind(comment.email.as_str())
        .bind(comment.title.as_str())
        .bind(comment.content.as_str())
        .bind(comment.date)
        .bind(comment.published)
        .bind(i64::from(comment.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn remove(&self, comment: &Comment) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(comment.id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
