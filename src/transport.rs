//! Wire transport for GraphQL requests
//!
//! [`Transport`] is the seam between the client and the network.
//! [`HttpTransport`] posts JSON over HTTPS with the session cookie; tests
//! substitute an in-memory implementation.

use std::future::Future;

use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{RepublikError, Result};
use crate::query::GraphqlRequest;

/// Longest response body excerpt kept in a [`RepublikError::Status`]
const STATUS_BODY_EXCERPT: usize = 200;

/// Executes one GraphQL request and returns the raw response body
pub trait Transport: Send + Sync {
    /// Send `request` and decode the body as JSON
    fn execute(&self, request: &GraphqlRequest) -> impl Future<Output = Result<Value>> + Send;
}

/// HTTPS transport for the Republik API
///
/// Every request carries `Cookie: connect.sid=<session_id>`. No retries and
/// no timeouts are applied.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    /// Build a transport for the configured endpoint
    ///
    /// # Errors
    ///
    /// - [`RepublikError::Config`] - the session id is not a valid header value
    /// - [`RepublikError::Http`] - the HTTP client cannot be initialized
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_builder(config, reqwest::Client::builder())
    }

    /// Build a transport from a preconfigured `reqwest` builder
    ///
    /// Default headers (JSON content type, session cookie) are added on top
    /// of whatever the builder already carries.
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::new`].
    pub fn with_builder(config: &ClientConfig, builder: reqwest::ClientBuilder) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut cookie = HeaderValue::from_str(&config.cookie()).map_err(|_| {
            RepublikError::Config("session id is not a valid header value".to_string())
        })?;
        cookie.set_sensitive(true);
        headers.insert(COOKIE, cookie);

        let http = builder.default_headers(headers).build()?;

        debug!("HTTP transport ready for {}", config.api_url);

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Endpoint requests are sent to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        trace!("POST {} ({} variables)", self.api_url, request.variables.len());

        let response = self.http.post(&self.api_url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(STATUS_BODY_EXCERPT).collect();
            let message = if excerpt.is_empty() {
                status.canonical_reason().unwrap_or("").to_string()
            } else {
                excerpt
            };
            return Err(RepublikError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        trace!("Received {} bytes", body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}
