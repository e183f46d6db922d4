//! Single article payload
//!
//! The document query returns one [`Article`] whose body is a root
//! [`Content`] node holding the mdast tree.

use serde::{Deserialize, Serialize};

use crate::document::DocumentMeta;
use crate::node::{Node, null_as_default};

/// Root of an article body (`type: "root"` on the wire)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Top-level nodes of the body
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,
}

impl Content {
    /// Create a root holding the given nodes
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            kind: "root".to_string(),
            children,
        }
    }
}

/// A full article: identity, metadata and content tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Id of the publishing repository
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Content,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: DocumentMeta,
}

/// `data` payload of the document query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub article: Article,
}

impl ArticleResponse {
    /// Wrap an article
    pub fn new(article: Article) -> Self {
        Self { article }
    }
}
