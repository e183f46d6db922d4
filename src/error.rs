//! Republik client error types

use thiserror::Error;

/// Errors raised by the query layer
///
/// The renderer never produces these: rendering cannot fail.
#[derive(Error, Debug)]
pub enum RepublikError {
    /// HTTP transport failure (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("HTTP status {code}: {message}")]
    Status {
        /// HTTP status code (e.g., 400, 500)
        code: u16,
        /// Reason phrase or response body excerpt
        message: String,
    },

    /// Payload does not match the document model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a GraphQL `errors` array
    #[error("Remote query failed: {0}")]
    RemoteQuery(String),

    /// No document is published at the requested path
    #[error("No such article: {0}")]
    NoSuchArticle(String),

    /// Response is valid JSON but lacks the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The document query template could not be loaded
    #[error("Query template {path}: {reason}")]
    QueryTemplate {
        /// Path the template was read from
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Configuration cannot be used (e.g., session id with control characters)
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using RepublikError
pub type Result<T> = std::result::Result<T, RepublikError>;
