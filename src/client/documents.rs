//! Document listing

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;
use crate::query::{self, GraphqlRequest};
use crate::response::SearchData;
use crate::transport::Transport;
use tracing::{debug, trace};

use super::Client;

impl<T: Transport> Client<T> {
    /// Fetch the newest documents, at most `limit`
    ///
    /// Sections, formats and fronts are always excluded; `filter` narrows
    /// the result further. Only the first page is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`RepublikError::Http`](crate::RepublikError::Http) - the request could not be sent
    /// - [`RepublikError::Status`](crate::RepublikError::Status) - the API answered with a non-2xx status
    /// - [`RepublikError::RemoteQuery`](crate::RepublikError::RemoteQuery) - the API reported query errors
    /// - [`RepublikError::Json`](crate::RepublikError::Json) - the payload does not match [`Document`]
    pub async fn fetch(&self, filter: &Filter, limit: u32) -> Result<Vec<Document>> {
        trace!("Fetching {} documents ({})", limit, filter);

        let request = GraphqlRequest::new(query::search(filter)).var("limit", limit);
        let data: SearchData = self.run(request).await?;
        let documents = data.into_documents();

        debug!("Fetched {} documents", documents.len());
        Ok(documents)
    }
}
