//! Live integration tests against the public Republik API
//!
//! These tests are disabled by default. Enable with:
//! ```
//! cargo test --features live-tests -- --test-threads=1
//! ```
//!
//! Required environment variables:
//! - REPUBLIK_SID: value of the `connect.sid` cookie of a logged-in session
//! - REPUBLIK_API_URL: endpoint (default: https://api.republik.ch/graphql)

#![cfg(feature = "live-tests")]

use republik_rs::{Client, ClientConfig, Filter};

fn get_test_client() -> Client {
    let config = ClientConfig::from_env().expect("REPUBLIK_SID not set");
    Client::new(config).unwrap()
}

#[tokio::test]
async fn test_live_fetch_latest() {
    let client = get_test_client();

    let docs = client.fetch(&Filter::new(), 5).await.unwrap();
    assert!(docs.len() <= 5);
    for doc in &docs {
        println!("{} {}", doc.meta.publish_date, doc.meta.title);
        assert!(!["section", "format", "front"].contains(&doc.meta.template.as_str()));
    }
}

#[tokio::test]
async fn test_live_fetch_with_audio() {
    let client = get_test_client();

    let docs = client.fetch(&Filter::new().has_audio(), 3).await.unwrap();
    for doc in &docs {
        assert!(doc.meta.audio_source.is_some(), "{} has no audio", doc.meta.path);
    }
}

#[tokio::test]
async fn test_live_fetch_and_render_article() {
    let client = get_test_client();

    let docs = client.fetch(&Filter::new().feed(), 1).await.unwrap();
    let Some(doc) = docs.first() else {
        println!("Skipping test: feed is empty");
        return;
    };

    let article = client.fetch_article(&doc.meta.path).await.unwrap();
    let html = article.to_html();
    assert!(html.starts_with("<div class=\"article\">"));
    println!("{} rendered to {} bytes", doc.meta.path, html.len());
}
