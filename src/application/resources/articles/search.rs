use super::ArticleResourceService;
use crate::{
    application::{dto::ArticleListResponse, error::ApplicationResult, outcome::ResourceOutcome},
    domain::{article::TitleContainsSpec, specification::Specification},
};

pub struct SearchArticlesQuery {
    pub term: Option<String>,
}

impl ArticleResourceService {
    /// Articles whose title contains `term`, in storage order. An absent or
    /// empty term lists every article.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<ResourceOutcome<ArticleListResponse>> {
        let mut view = self.articles.query();

        if let Some(term) = query.term.filter(|term| !term.is_empty()) {
            let spec = TitleContainsSpec::new(term);
            view = view.filter(move |article| spec.is_satisfied_by(article));
        }

        let articles = view.to_vec().await?;
        tracing::debug!(matches = articles.len(), "article search completed");
        Ok(ResourceOutcome::Ok(articles.into()))
    }
}
