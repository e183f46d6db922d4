//! Document listing types
//!
//! A [`Document`] is one entry of a search result: id plus metadata, no body.
//! Field names follow the camelCase GraphQL schema; every field tolerates
//! `null`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::node::null_as_default;

/// A published document as returned by the search query
///
/// # Example
///
/// ```
/// use republik_rs::Document;
///
/// let doc: Document = serde_json::from_str(r#"{
///     "id": "abc",
///     "meta": {
///         "title": "Am Gericht",
///         "path": "/2024/03/01/am-gericht",
///         "publishDate": "2024-03-01T04:00:00.000Z",
///         "estimatedReadingMinutes": 12
///     }
/// }"#).unwrap();
///
/// assert_eq!(doc.meta.estimated_reading_minutes, 12);
/// assert!(doc.pub_date().is_some());
/// assert!(!doc.has_audio());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Document metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: DocumentMeta,
}

/// Metadata of a [`Document`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Site-relative path, used to fetch the full article
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Cover image URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// RFC 3339 timestamp, see [`Document::pub_date`]
    #[serde(default, deserialize_with = "null_as_default")]
    pub publish_date: String,
    /// Template name (`article`, `editorialNewsletter`, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_reading_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_consumption_minutes: u32,
    /// Crop rectangle of the cover image used for audio players
    #[serde(default)]
    pub audio_cover_crop: Option<AudioCoverCrop>,
    /// Audio attachment
    #[serde(default)]
    pub audio_source: Option<AudioSource>,
    /// Parent format (series) this document belongs to
    #[serde(default)]
    pub format: Option<FormatRef>,
}

/// Crop rectangle in image pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCoverCrop {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: i64,
}

/// Audio attachment descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSource {
    /// MP3 download URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub mp3: String,
    /// Source kind (`readAloud`, `syntheticReadAloud`, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
}

impl AudioSource {
    /// Playback length
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Reference to the format a document is published in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: FormatMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl Document {
    /// Parsed publication date
    ///
    /// Returns `None` when `publishDate` is empty or not RFC 3339.
    pub fn pub_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.meta.publish_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether an audio attachment with a playable URL is present
    pub fn has_audio(&self) -> bool {
        self.meta
            .audio_source
            .as_ref()
            .is_some_and(|source| !source.mp3.is_empty())
    }

    /// Title of the parent format, if any
    pub fn format_title(&self) -> Option<&str> {
        self.meta
            .format
            .as_ref()
            .map(|format| format.meta.title.as_str())
            .filter(|title| !title.is_empty())
    }
}
