// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{Article, ArticleFields, ArticleId, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repository::{QueryView, Repository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SELECT_ARTICLES: &str =
    "SELECT id, title, content, date, published FROM articles ORDER BY id";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    date: DateTime<Utc>,
    published: bool,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: row.content,
            date: row.date,
            published: row.published,
        })
    }
}

#[async_trait]
impl Repository<Article> for PostgresArticleRepository {
    fn query(&self) -> QueryView<Article> {
        let pool = self.pool.clone();
        QueryView::deferred(async move {
            let rows = sqlx::query_as::<_, ArticleRow>(SELECT_ARTICLES)
                .fetch_all(&pool)
                .await
                .map_err(map_sqlx)?;
            rows.into_iter().map(Article::try_from).collect()
        })
    }

    async fn get(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, date, published FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn add(&self, new: ArticleFields) -> DomainResult<Article> {
        let ArticleFields {
            title,
            content,
            date,
            published,
        } = new;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, date, published)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, date, published",
        )
        .bind(title.as_str())
        .bind(content)
        .bind(date)
        .bind(published)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = $1, content = $2, date = $3, published = $4
             WHERE id = $5
             RETURNING id, title, content, date, published",
        )
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.date)
        .bind(article.published)
        .bind(i64::from(article.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn remove(&self, article: &Article) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(article.id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
