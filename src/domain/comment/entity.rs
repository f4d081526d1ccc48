// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentId, CommentTitle};
use crate::domain::repository::Entity;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub email: String,
    pub title: CommentTitle,
    pub content: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub email: String,
    pub title: CommentTitle,
    pub content: String,
    pub date: DateTime<Utc>,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub fields: CommentFields,
}

impl Comment {
    #[must_use]
    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }

    /// Overwrites the mutable fields; identifier and owning article stay fixed.
    pub fn replace_fields(&mut self, fields: CommentFields) {
        let CommentFields {
            email,
            title,
            content,
            date,
            published,
        } = fields;
        self.email = email;
        self.title = title;
        self.content = content;
        self.date = date;
        self.published = published;
    }
}

impl Entity for Comment {
    type Id = CommentId;
    type New = NewComment;

    fn id(&self) -> CommentId {
        self.id
    }

    fn materialize(id: CommentId, new: NewComment) -> Self {
        let NewComment { article_id, fields } = new;
        Self {
            id,
            article_id,
            email: fields.email,
            title: fields.title,
            content: fields.content,
            date: fields.date,
            published: fields.published,
        }
    }
}
