//! Content entry model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use super::frontmatter::parse_string_list;

/// Metadata keys every entry is expected to carry
pub const REQUIRED_KEYS: &[&str] = &["title", "publishedAt", "summary"];

/// One fully assembled content unit: metadata, slug, and body
///
/// Entries are built fresh on every retrieval call and are immutable once
/// assembled. Metadata stays a flat string mapping in the order the keys
/// appeared in the file; the typed accessors below interpret the
/// conventional keys on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// Raw frontmatter metadata
    pub metadata: IndexMap<String, String>,
    /// URL-safe identifier derived from the file name
    pub slug: String,
    /// Document body with surrounding whitespace trimmed
    pub content: String,
}

impl ContentEntry {
    /// Entry title, falling back to the slug when the key is absent
    pub fn title(&self) -> &str {
        self.metadata
            .get("title")
            .map(String::as_str)
            .unwrap_or(&self.slug)
    }

    /// Short summary, if present
    pub fn summary(&self) -> Option<&str> {
        self.metadata.get("summary").map(String::as_str)
    }

    /// Cover image path, if present
    pub fn image(&self) -> Option<&str> {
        self.metadata.get("image").map(String::as_str)
    }

    /// Publication date parsed from the `publishedAt` field
    ///
    /// Accepts `YYYY-MM-DD` or a full `YYYY-MM-DDTHH:MM:SS` timestamp.
    pub fn published_at(&self) -> Option<NaiveDate> {
        let raw = self.metadata.get("publishedAt")?;
        parse_published_at(raw)
    }

    /// Tags parsed from the bracketed `tags` field
    ///
    /// A missing or malformed list yields an empty vec; the raw string stays
    /// available in `metadata` either way.
    pub fn tags(&self) -> Vec<String> {
        self.metadata
            .get("tags")
            .and_then(|raw| parse_string_list(raw))
            .unwrap_or_default()
    }
}

/// Parse a `publishedAt` value as a calendar date
pub fn parse_published_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Sort entries newest first by publication date
///
/// The pipeline itself returns entries in directory order; chronological
/// order is the caller's concern. Entries without a parseable date sort
/// last.
pub fn sort_newest_first(entries: &mut [ContentEntry]) {
    entries.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}
