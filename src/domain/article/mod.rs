pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleFields};
pub use repository::ArticleRepository;
pub use specifications::TitleContainsSpec;
pub use value_objects::{ArticleId, ArticleTitle};
