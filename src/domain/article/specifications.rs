use crate::domain::article::entity::Article;
use crate::domain::specification::Specification;

/// Case-sensitive substring match against the article title.
pub struct TitleContainsSpec {
    term: String,
}

impl TitleContainsSpec {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl Specification<Article> for TitleContainsSpec {
    fn is_satisfied_by(&self, candidate: &Article) -> bool {
        candidate.title.as_str().contains(self.term.as_str())
    }
}
