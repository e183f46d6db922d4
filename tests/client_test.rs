//! Client tests against an in-memory transport
//!
//! The transport records every request and answers with a canned body, so
//! query construction and response handling can be checked without network.

use std::sync::Mutex;

use republik_rs::{
    Client, ClientConfig, DocumentQuery, FETCH_FAILED_HTML, Filter, GraphqlRequest,
    RepublikError, Result, Transport,
};
use serde_json::{Value, json};

struct MockTransport {
    response: Value,
    requests: Mutex<Vec<GraphqlRequest>>,
}

impl MockTransport {
    fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    async fn execute(&self, _request: &GraphqlRequest) -> Result<Value> {
        Err(RepublikError::Status {
            code: 503,
            message: "Service Unavailable".to_string(),
        })
    }
}

fn client(response: Value) -> Client<MockTransport> {
    Client::with_transport(ClientConfig::new("sid"), MockTransport::new(response))
}

fn search_response() -> Value {
    json!({
        "data": {
            "documents": {
                "nodes": [
                    {"entity": {
                        "id": "ZG9jOjE=",
                        "meta": {
                            "title": "Erstens",
                            "path": "/2024/05/17/erstens",
                            "publishDate": "2024-05-17T03:00:00.000Z",
                            "template": "article",
                            "estimatedReadingMinutes": 7,
                            "audioSource": {"mp3": "https://cdn.repub.ch/1.mp3", "kind": "readAloud", "durationMs": 420000},
                            "format": {"meta": {"path": "/format/x", "title": "X", "kind": "meta"}}
                        }
                    }},
                    {"entity": {
                        "id": "ZG9jOjI=",
                        "meta": {"title": "Zweitens", "path": "/2024/05/16/zweitens", "audioSource": null}
                    }}
                ]
            }
        }
    })
}

fn article_response() -> Value {
    json!({
        "data": {
            "article": {
                "type": "Document",
                "id": "ZG9jOjE=",
                "repoId": "republik/article-erstens",
                "content": {
                    "type": "root",
                    "children": [
                        {"type": "paragraph", "children": [{"type": "text", "value": "Hallo"}]}
                    ]
                },
                "meta": {"title": "Erstens", "path": "/2024/05/17/erstens"}
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_documents() {
    let client = client(search_response());

    let docs = client.fetch(&Filter::new(), 2).await.unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].meta.title, "Erstens");
    assert_eq!(docs[0].meta.estimated_reading_minutes, 7);
    assert!(docs[0].has_audio());
    assert_eq!(docs[0].format_title(), Some("X"));
    assert!(docs[0].pub_date().is_some());
    assert_eq!(docs[1].meta.path, "/2024/05/16/zweitens");
    assert!(!docs[1].has_audio());
}

#[tokio::test]
async fn test_fetch_sends_limit_and_filter() {
    let client = client(search_response());

    client
        .fetch(&Filter::new().has_audio().audio_source_kind("readAloud"), 25)
        .await
        .unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].variables["limit"], 25);
    assert!(
        requests[0]
            .query
            .contains("filter: {hasAudio: true, audioSourceKind: readAloud}")
    );
    assert!(requests[0].query.contains(r#"value: "front""#));
}

#[tokio::test]
async fn test_fetch_without_filter_has_no_filter_argument() {
    let client = client(search_response());
    client.fetch(&Filter::new(), 10).await.unwrap();
    assert!(!client.transport().requests()[0].query.contains("filter:"));
}

#[tokio::test]
async fn test_fetch_empty_result() {
    let client = client(json!({"data": {"documents": {"nodes": []}}}));
    let docs = client.fetch(&Filter::new(), 10).await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_fetch_remote_errors() {
    let client = client(json!({
        "data": null,
        "errors": [{"message": "api/search/tooManyFilters"}]
    }));

    let err = client.fetch(&Filter::new(), 10).await.unwrap_err();
    match err {
        RepublikError::RemoteQuery(msg) => assert_eq!(msg, "api/search/tooManyFilters"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_article() {
    let client = client(article_response());

    let response = client.fetch_article("/2024/05/17/erstens").await.unwrap();

    assert_eq!(response.article.repo_id, "republik/article-erstens");
    assert_eq!(response.article.content.children.len(), 1);
    assert_eq!(
        response.to_html(),
        "<div class=\"article\"> <p> Hallo\n </p>\n </div>"
    );

    let requests = client.transport().requests();
    assert_eq!(requests[0].variables["path"], "/2024/05/17/erstens");
    assert_eq!(requests[0].query, DocumentQuery::default().as_str());
}

#[tokio::test]
async fn test_fetch_article_custom_query() {
    let query =
        DocumentQuery::new("query ($path: String!) { article: document(path: $path) { id content } }")
            .unwrap();
    let client = client(article_response()).with_document_query(query.clone());

    client.fetch_article("/x").await.unwrap();

    assert_eq!(client.transport().requests()[0].query, query.as_str());
}

#[tokio::test]
async fn test_fetch_article_not_found() {
    let client = client(json!({"data": {"article": null}}));

    let err = client.fetch_article("/gibt/es/nicht").await.unwrap_err();
    match err {
        RepublikError::NoSuchArticle(path) => assert_eq!(path, "/gibt/es/nicht"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_article_malformed_payload() {
    let client = client(json!({"data": {"article": {"content": {"children": "nope"}}}}));
    let err = client.fetch_article("/x").await.unwrap_err();
    assert!(matches!(err, RepublikError::Json(_)));
}

#[tokio::test]
async fn test_fetch_article_transport_error() {
    let client = Client::with_transport(ClientConfig::new("sid"), FailingTransport);
    let err = client.fetch_article("/x").await.unwrap_err();
    assert!(matches!(err, RepublikError::Status { code: 503, .. }));
}

#[tokio::test]
async fn test_article_html() {
    let client = client(article_response());
    let html = client.article_html("/2024/05/17/erstens").await;
    assert_eq!(html, "<div class=\"article\"> <p> Hallo\n </p>\n </div>");
}

#[tokio::test]
async fn test_article_html_falls_back_on_error() {
    let client = Client::with_transport(ClientConfig::new("sid"), FailingTransport);
    let html = client.article_html("/x").await;
    assert_eq!(html, FETCH_FAILED_HTML);
}

#[tokio::test]
async fn test_article_html_falls_back_on_remote_error() {
    let client = client(json!({"errors": [{"message": "boom"}]}));
    assert_eq!(client.article_html("/x").await, FETCH_FAILED_HTML);
}

#[test]
fn test_client_debug_hides_session() {
    let client = Client::with_transport(ClientConfig::new("geheim"), FailingTransport);
    let debug = format!("{:?}", client);
    assert!(debug.contains("Client"));
    assert!(!debug.contains("geheim"));
}

#[test]
fn test_client_keeps_config() {
    let config = ClientConfig::new("sid").with_api_url("http://127.0.0.1:1/graphql");
    let client = Client::with_transport(config.clone(), FailingTransport);
    assert_eq!(client.config().api_url, config.api_url);
    assert_eq!(client.config().session_id, "sid");
}
