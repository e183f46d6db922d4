//! Republik API client
//!
//! Two operations: [`Client::fetch`] lists documents, [`Client::fetch_article`]
//! retrieves one article with its content tree. Requests are sent through a
//! [`Transport`]; the default is [`HttpTransport`].

mod articles;
mod documents;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::query::{DocumentQuery, GraphqlRequest};
use crate::response::GraphqlResponse;
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Async client for the Republik GraphQL API
///
/// # Example
///
/// ```no_run
/// use republik_rs::{Client, ClientConfig, Filter};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ClientConfig::new("s%3A..."))?;
///
/// let latest = client.fetch(&Filter::new().feed(), 10).await?;
/// for doc in &latest {
///     println!("{} ({})", doc.meta.title, doc.meta.path);
/// }
///
/// let html = client.article_html(&latest[0].meta.path).await;
/// println!("{}", html);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct Client<T: Transport = HttpTransport> {
    /// Endpoint and session
    config: ClientConfig,
    /// Sends the requests
    transport: T,
    /// Query used by `fetch_article`
    document_query: DocumentQuery,
}

impl Client<HttpTransport> {
    /// Create a client talking HTTPS to the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built
    /// (see [`HttpTransport::new`]).
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client on top of a custom transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        debug!("Republik client for {}", config.api_url);
        Self {
            config,
            transport,
            document_query: DocumentQuery::default(),
        }
    }

    /// Replace the built-in document query
    pub fn with_document_query(mut self, query: DocumentQuery) -> Self {
        self.document_query = query;
        self
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and unwrap the GraphQL envelope
    async fn run<D: DeserializeOwned>(&self, request: GraphqlRequest) -> Result<D> {
        let body = self.transport.execute(&request).await?;
        GraphqlResponse::<D>::from_value(body)?.into_data()
    }
}

impl<T: Transport> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
