// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_comment;

pub use error::map_sqlx;
pub use memory::InMemoryRepository;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_comment::PostgresCommentRepository;
