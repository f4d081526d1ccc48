use crate::domain::comment::entity::Comment;
use crate::domain::repository::Repository;

pub type CommentRepository = dyn Repository<Comment>;
