//! GraphQL response envelope

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::document::Document;
use crate::error::{RepublikError, Result};
use crate::node::null_as_default;

/// `{"data": ..., "errors": [...]}` as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Payload; absent when the query failed as a whole
    pub data: Option<T>,
    /// Errors reported by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphqlErrorEntry>,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlErrorEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Response path the error refers to
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: Vec<Value>,
}

impl<T: DeserializeOwned> GraphqlResponse<T> {
    /// Decode a raw response body
    ///
    /// # Errors
    ///
    /// Returns [`RepublikError::Json`] if the body does not match `T`.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The payload, or the server's errors
    ///
    /// # Errors
    ///
    /// - [`RepublikError::RemoteQuery`] - the `errors` array is non-empty
    /// - [`RepublikError::InvalidResponse`] - neither data nor errors present
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(RepublikError::RemoteQuery(messages.join("; ")));
        }

        self.data
            .ok_or_else(|| RepublikError::InvalidResponse("response has no data".to_string()))
    }
}

/// `data` payload of the search query
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: SearchConnection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<SearchNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchNode {
    /// `null` for entities that are not documents
    #[serde(default)]
    pub entity: Option<Document>,
}

impl SearchData {
    /// Documents in result order
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
            .nodes
            .into_iter()
            .filter_map(|node| node.entity)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data() {
        let resp: GraphqlResponse<Value> =
            GraphqlResponse::from_value(json!({"data": {"x": 1}})).unwrap();
        assert_eq!(resp.into_data().unwrap(), json!({"x": 1}));
    }

    #[test]
    fn test_errors_win_over_data() {
        let resp: GraphqlResponse<Value> = GraphqlResponse::from_value(json!({
            "data": {"x": null},
            "errors": [
                {"message": "api/signIn", "path": ["x"]},
                {"message": "second"}
            ]
        }))
        .unwrap();
        let err = resp.into_data().unwrap_err();
        match err {
            RepublikError::RemoteQuery(msg) => assert_eq!(msg, "api/signIn; second"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_data() {
        let resp: GraphqlResponse<Value> =
            GraphqlResponse::from_value(json!({"errors": null})).unwrap();
        assert!(matches!(
            resp.into_data(),
            Err(RepublikError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_search_data_skips_non_documents() {
        let data: SearchData = serde_json::from_value(json!({
            "documents": {
                "nodes": [
                    {"entity": {"id": "a", "meta": {"title": "A"}}},
                    {"entity": null},
                    {"entity": {"id": "b", "meta": {"title": "B"}}}
                ]
            }
        }))
        .unwrap();
        let docs = data.into_documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[1].meta.title, "B");
    }

    #[test]
    fn test_search_data_empty() {
        let data: SearchData = serde_json::from_value(json!({"documents": null})).unwrap();
        assert!(data.into_documents().is_empty());
    }
}
