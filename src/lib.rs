#![doc = include_str!("../README.md")]

/// Full article payload
pub mod article;
mod client;
mod config;
/// Document listing types
pub mod document;
mod error;
mod filter;
/// mdast-derived content tree
pub mod node;
/// GraphQL query builders
pub mod query;
/// Article content tree to HTML
pub mod render;
mod response;
/// Request transport
pub mod transport;

pub use article::{Article, ArticleResponse, Content};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_API_URL, ENV_API_URL, ENV_SESSION_ID};
pub use document::{AudioCoverCrop, AudioSource, Document, DocumentMeta, FormatMeta, FormatRef};
pub use error::{RepublikError, Result};
pub use filter::Filter;
pub use node::{Identifier, Node, NodeKind};
pub use query::{DocumentQuery, GraphqlRequest};
pub use render::{FETCH_FAILED_HTML, render};
pub use response::{GraphqlErrorEntry, GraphqlResponse};
pub use transport::{HttpTransport, Transport};
