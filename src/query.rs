//! GraphQL query builders
//!
//! - [`search`] - document listing, newest first
//! - [`DocumentQuery`] - single document by path, including its content tree

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{RepublikError, Result};
use crate::filter::Filter;

/// Templates never listed: they are containers, not readable documents
pub const EXCLUDED_TEMPLATES: [&str; 3] = ["section", "format", "front"];

/// Metadata selection shared by the listing and document queries
const META_SELECTION: &str = r#"meta {
            title
            path
            image
            description
            publishDate
            template
            estimatedReadingMinutes
            estimatedConsumptionMinutes
            audioCoverCrop {
              x
              y
              width
              height
            }
            audioSource {
              mp3
              kind
              durationMs
            }
            format {
              meta {
                path
                title
                kind
              }
            }
          }"#;

/// Build the search query for [`Client::fetch`](crate::Client::fetch)
///
/// Takes the page size as `$limit` and applies the filter argument when set.
///
/// # Example
///
/// ```
/// use republik_rs::{Filter, query};
///
/// let q = query::search(&Filter::new().feed());
/// assert!(q.contains("filter: {feed: true}"));
/// assert!(q.contains("first: $limit"));
/// ```
pub fn search(filter: &Filter) -> String {
    let exclusions: Vec<String> = EXCLUDED_TEMPLATES
        .iter()
        .map(|template| format!(r#"{{ key: "template", not: true, value: "{}" }}"#, template))
        .collect();

    format!(
        r#"query ($limit: Int!) {{
  documents: search(
    filters: [
      {}
    ]
    {}
    sort: {{ key: publishedAt, direction: DESC }}
    first: $limit
  ) {{
    nodes {{
      entity {{
        ... on Document {{
          id
          {}
        }}
      }}
    }}
  }}
}}"#,
        exclusions.join("\n      "),
        filter,
        META_SELECTION
    )
}

/// Query text for fetching one document by `$path`
///
/// Load it once at startup with [`DocumentQuery::from_file`] when a custom
/// selection is needed; [`DocumentQuery::default`] carries a built-in one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    text: String,
}

impl DocumentQuery {
    /// Use the given query text
    ///
    /// # Errors
    ///
    /// Returns [`RepublikError::QueryTemplate`] if the text is blank or does
    /// not declare the `$path` variable.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::validate("<inline>", text.into())
    }

    /// Read the query text from a `.gql` file
    ///
    /// # Errors
    ///
    /// Returns [`RepublikError::QueryTemplate`] if the file cannot be read,
    /// is blank, or does not declare the `$path` variable.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let text = std::fs::read_to_string(path).map_err(|e| RepublikError::QueryTemplate {
            path: origin.clone(),
            reason: e.to_string(),
        })?;

        debug!("Loaded document query from {} ({} bytes)", origin, text.len());
        Self::validate(&origin, text)
    }

    fn validate(origin: &str, text: String) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(RepublikError::QueryTemplate {
                path: origin.to_string(),
                reason: "query is empty".to_string(),
            });
        }

        if !text.contains("$path") {
            return Err(RepublikError::QueryTemplate {
                path: origin.to_string(),
                reason: "query does not use the $path variable".to_string(),
            });
        }

        Ok(Self { text })
    }

    /// The query text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for DocumentQuery {
    fn default() -> Self {
        let text = format!(
            r#"query getDocument($path: String!) {{
  article: document(path: $path) {{
    type: __typename
    id
    repoId
    content
    {}
  }}
}}"#,
            META_SELECTION
        );
        Self { text }
    }
}

/// A GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// Query text
    pub query: String,
    /// Named variables
    pub variables: Map<String, Value>,
}

impl GraphqlRequest {
    /// Create a request without variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Set a variable
    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}
