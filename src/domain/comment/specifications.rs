use crate::domain::article::ArticleId;
use crate::domain::comment::entity::Comment;
use crate::domain::specification::Specification;

/// A comment is only addressable under the article that owns it.
pub struct CommentBelongsToArticleSpec {
    article_id: ArticleId,
}

impl CommentBelongsToArticleSpec {
    #[must_use]
    pub const fn new(article_id: ArticleId) -> Self {
        Self { article_id }
    }
}

impl Specification<Comment> for CommentBelongsToArticleSpec {
    fn is_satisfied_by(&self, candidate: &Comment) -> bool {
        candidate.belongs_to(self.article_id)
    }
}
