// src/application/resources/articles/mod.rs
mod create;
mod delete;
mod get;
mod replace;
mod search;
mod service;

pub use replace::ReplaceArticleCommand;
pub use search::SearchArticlesQuery;
pub use service::ArticleResourceService;
