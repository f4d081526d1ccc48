pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Comment, CommentFields, NewComment};
pub use repository::CommentRepository;
pub use specifications::CommentBelongsToArticleSpec;
pub use value_objects::{CommentId, CommentTitle};
