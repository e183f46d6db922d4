//! Print one article as HTML
//!
//! Run with: REPUBLIK_SID=... cargo run --example article -- /2024/05/17/some-article
//!
//! Set REPUBLIK_QUERY to a `.gql` file to replace the built-in document query.

use republik_rs::{Client, ClientConfig, DocumentQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: article <path>")?;

    let config = ClientConfig::from_env().ok_or("REPUBLIK_SID is not set")?;
    let mut client = Client::new(config)?;

    if let Ok(query_file) = std::env::var("REPUBLIK_QUERY") {
        client = client.with_document_query(DocumentQuery::from_file(query_file)?);
    }

    let response = client.fetch_article(&path).await?;
    eprintln!("{} ({})", response.article.meta.title, response.article.repo_id);
    println!("{}", response.to_html());

    Ok(())
}
