//! Single article retrieval

use crate::article::{Article, ArticleResponse};
use crate::error::{RepublikError, Result};
use crate::query::GraphqlRequest;
use crate::render::FETCH_FAILED_HTML;
use crate::transport::Transport;
use serde::Deserialize;
use tracing::{error, trace};

use super::Client;

/// `data` of the document query; `article` is null for unknown paths
#[derive(Deserialize)]
struct ArticleData {
    #[serde(default)]
    article: Option<Article>,
}

impl<T: Transport> Client<T> {
    /// Fetch the article published at `path`, including its content tree
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`RepublikError::NoSuchArticle`] - nothing is published at `path`
    /// - [`RepublikError::RemoteQuery`] - the API reported query errors
    /// - [`RepublikError::Http`] / [`RepublikError::Status`] - transport failure
    /// - [`RepublikError::Json`] - the payload does not match [`Article`]
    pub async fn fetch_article(&self, path: &str) -> Result<ArticleResponse> {
        trace!("Fetching article: {}", path);

        let request = GraphqlRequest::new(self.document_query.as_str()).var("path", path);
        let data: ArticleData = self.run(request).await?;

        data.article
            .map(ArticleResponse::new)
            .ok_or_else(|| RepublikError::NoSuchArticle(path.to_string()))
    }

    /// Fetch the article at `path` and render it as HTML
    ///
    /// On failure the error is logged and a short placeholder paragraph is
    /// returned instead. Use [`fetch_article`](Self::fetch_article) to handle
    /// the error yourself.
    pub async fn article_html(&self, path: &str) -> String {
        match self.fetch_article(path).await {
            Ok(response) => response.to_html(),
            Err(e) => {
                error!("Fetching article {} failed with error {}", path, e);
                FETCH_FAILED_HTML.to_string()
            }
        }
    }
}
