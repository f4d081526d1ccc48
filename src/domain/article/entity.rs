// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::repository::Entity;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

/// The caller-controlled fields of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: ArticleTitle,
    pub content: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

impl Article {
    /// Overwrites every mutable field. The identifier is left untouched.
    pub fn replace_fields(&mut self, fields: ArticleFields) {
        let ArticleFields {
            title,
            content,
            date,
            published,
        } = fields;
        self.title = title;
        self.content = content;
        self.date = date;
        self.published = published;
    }
}

impl Entity for Article {
    type Id = ArticleId;
    type New = ArticleFields;

    fn id(&self) -> ArticleId {
        self.id
    }

    fn materialize(id: ArticleId, new: ArticleFields) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            date: new.date,
            published: new.published,
        }
    }
}
