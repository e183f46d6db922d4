//! Search filter for document listings

use std::fmt;

/// Optional restrictions for [`Client::fetch`](crate::Client::fetch)
///
/// Every part is independent. The `Display` form is the GraphQL
/// `filter: {...}` argument, or an empty string when nothing is set.
///
/// # Example
///
/// ```
/// use republik_rs::Filter;
///
/// assert_eq!(Filter::default().to_string(), "");
///
/// let filter = Filter::new().feed().audio_source_kind("readAloud");
/// assert_eq!(filter.to_string(), "filter: {feed: true, audioSourceKind: readAloud}");
/// ```
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only documents shown in the feed
    pub feed: bool,
    /// Only documents with an audio attachment
    pub has_audio: bool,
    /// Audio source kind enum value (e.g., `readAloud`, `syntheticReadAloud`)
    pub audio_source_kind: Option<String>,
    /// Repo id of a format
    pub format: Option<String>,
}

impl Filter {
    /// An empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only documents shown in the feed
    pub fn feed(mut self) -> Self {
        self.feed = true;
        self
    }

    /// Only documents with an audio attachment
    pub fn has_audio(mut self) -> Self {
        self.has_audio = true;
        self
    }

    /// Restrict to one audio source kind; empty input is ignored
    pub fn audio_source_kind(mut self, kind: impl Into<String>) -> Self {
        self.audio_source_kind = Some(kind.into()).filter(|k| !k.is_empty());
        self
    }

    /// Restrict to one format repo id; empty input is ignored
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into()).filter(|f| !f.is_empty());
        self
    }

    /// Whether no restriction is set
    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    fn clauses(&self) -> Vec<String> {
        let mut clauses = Vec::with_capacity(4);

        if self.feed {
            clauses.push("feed: true".to_string());
        }

        if self.has_audio {
            clauses.push("hasAudio: true".to_string());
        }

        // enum value, sent unquoted
        if let Some(kind) = self.audio_source_kind.as_deref().filter(|k| !k.is_empty()) {
            clauses.push(format!("audioSourceKind: {}", kind));
        }

        if let Some(format) = self.format.as_deref().filter(|f| !f.is_empty()) {
            clauses.push(format!("format: \"{}\"", format));
        }

        clauses
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses = self.clauses();
        if clauses.is_empty() {
            return Ok(());
        }
        write!(f, "filter: {{{}}}", clauses.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.to_string(), "");
    }

    #[test]
    fn test_single_clauses() {
        assert_eq!(Filter::new().feed().to_string(), "filter: {feed: true}");
        assert_eq!(
            Filter::new().has_audio().to_string(),
            "filter: {hasAudio: true}"
        );
        assert_eq!(
            Filter::new().audio_source_kind("readAloud").to_string(),
            "filter: {audioSourceKind: readAloud}"
        );
        assert_eq!(
            Filter::new().format("republik/format-am-gericht").to_string(),
            "filter: {format: \"republik/format-am-gericht\"}"
        );
    }

    #[test]
    fn test_all_clauses_in_order() {
        let filter = Filter::new()
            .format("republik/format-x")
            .audio_source_kind("syntheticReadAloud")
            .has_audio()
            .feed();
        assert_eq!(
            filter.to_string(),
            "filter: {feed: true, hasAudio: true, audioSourceKind: syntheticReadAloud, format: \"republik/format-x\"}"
        );
    }

    #[test]
    fn test_empty_strings_ignored() {
        let filter = Filter::new().format("").audio_source_kind("");
        assert!(filter.is_empty());

        let filter = Filter {
            format: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.to_string(), "");
    }
}
