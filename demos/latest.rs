//! List the latest Republik documents
//!
//! Run with: REPUBLIK_SID=... cargo run --example latest

use republik_rs::{Client, ClientConfig, Filter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env().ok_or("REPUBLIK_SID is not set")?;
    let client = Client::new(config)?;

    let mut filter = Filter::new().feed();
    if std::env::var("REPUBLIK_AUDIO").is_ok() {
        filter = filter.has_audio();
    }

    let limit = std::env::var("REPUBLIK_LIMIT")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(10);

    let docs = client.fetch(&filter, limit).await?;
    println!("{} documents", docs.len());

    for doc in &docs {
        let date = doc
            .pub_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        let audio = match &doc.meta.audio_source {
            Some(source) if doc.has_audio() => format!(" [audio {}s]", source.duration().as_secs()),
            _ => String::new(),
        };
        let format = doc
            .format_title()
            .map(|title| format!("{}: ", title))
            .unwrap_or_default();
        println!(
            "{}  {}{} ({} min){}\n            {}",
            date, format, doc.meta.title, doc.meta.estimated_reading_minutes, audio, doc.meta.path
        );
    }

    Ok(())
}
