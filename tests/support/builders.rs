// tests/support/builders.rs
use super::mocks::fixed_now;
use crossblog::domain::article::{Article, ArticleFields, ArticleId, ArticleTitle};
use crossblog::domain::comment::{Comment, CommentFields, CommentId, CommentTitle, NewComment};
use crossblog::domain::repository::Entity;

pub fn sample_article(id: i64, title: &str) -> Article {
    Article::materialize(
        ArticleId::new(id).unwrap(),
        ArticleFields {
            title: ArticleTitle::new(title).unwrap(),
            content: format!("content of {title}"),
            date: fixed_now(),
            published: true,
        },
    )
}

pub fn sample_comment(id: i64, article_id: i64, title: &str) -> Comment {
    Comment::materialize(
        CommentId::new(id).unwrap(),
        NewComment {
            article_id: ArticleId::new(article_id).unwrap(),
            fields: CommentFields {
                email: "reader@example.com".into(),
                title: CommentTitle::new(title).unwrap(),
                content: format!("comment {title}"),
                date: fixed_now(),
                published: false,
            },
        },
    )
}
