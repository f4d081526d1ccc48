use crate::domain::article::entity::Article;
use crate::domain::repository::Repository;

pub type ArticleRepository = dyn Repository<Article>;
