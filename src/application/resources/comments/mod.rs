// src/application/resources/comments/mod.rs
mod create;
mod delete;
mod get;
mod list;
mod replace;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use get::GetCommentQuery;
pub use replace::ReplaceCommentCommand;
pub use service::CommentResourceService;
