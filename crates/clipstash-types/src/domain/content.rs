use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::id::ItemId;

/// Canonical format identifiers used in history content maps.
pub mod formats {
    pub const TEXT: &str = "text";
    pub const IMAGE: &str = "image";
    pub const FILES: &str = "files";
}

/// Content-type filter for an invocation.
///
/// `Default` means no explicit choice was made; `All` disables filtering.
/// Constructed once per invocation and immutable thereafter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Default,
    Text,
    Image,
    Files,
    All,
}

impl ContentType {
    pub fn is_default(&self) -> bool {
        matches!(self, ContentType::Default)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ContentType::All)
    }

    pub fn supports_text(&self) -> bool {
        matches!(self, ContentType::Text | ContentType::All)
    }

    pub fn supports_image(&self) -> bool {
        matches!(self, ContentType::Image | ContentType::All)
    }

    pub fn supports_files(&self) -> bool {
        matches!(self, ContentType::Files | ContentType::All)
    }
}

/// One representation payload inside a history item.
///
/// Text is carried inline; everything else stays opaque behind a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClipPayload {
    Text(String),
    Binary { bytes: u64 },
}

impl ClipPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ClipPayload::Text(text) => Some(text),
            ClipPayload::Binary { .. } => None,
        }
    }
}

/// Opaque content of a history item: format identifier -> payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipContent {
    formats: BTreeMap<String, ClipPayload>,
}

impl ClipContent {
    pub fn new(formats: BTreeMap<String, ClipPayload>) -> Self {
        Self { formats }
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.formats.contains_key(format)
    }

    /// The textual representation, if one exists.
    ///
    /// The canonical `text` entry wins; otherwise the first format carrying
    /// an inline text payload is used.
    pub fn text(&self) -> Option<&str> {
        if let Some(payload) = self.formats.get(formats::TEXT)
            && let Some(text) = payload.as_text()
        {
            return Some(text);
        }
        self.formats.values().find_map(ClipPayload::as_text)
    }

    pub fn available_formats(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

/// One clipboard history snapshot, consumed read-only.
///
/// The ordinal position is not stored here; it is the index within the
/// currently retrieved list and travels alongside the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipItem {
    pub id: ItemId,
    pub timestamp: DateTime<Utc>,
    pub content: ClipContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of(pairs: &[(&str, ClipPayload)]) -> ClipContent {
        ClipContent::new(
            pairs
                .iter()
                .map(|(format, payload)| (format.to_string(), payload.clone()))
                .collect(),
        )
    }

    #[test]
    fn default_type_is_neither_text_nor_all() {
        let ct = ContentType::Default;
        assert!(ct.is_default());
        assert!(!ct.supports_text());
        assert!(!ct.is_all());
    }

    #[test]
    fn all_supports_every_capability() {
        let ct = ContentType::All;
        assert!(ct.supports_text());
        assert!(ct.supports_image());
        assert!(ct.supports_files());
    }

    #[test]
    fn text_accessor_prefers_canonical_entry() {
        let content = content_of(&[
            ("note", ClipPayload::Text("secondary".to_string())),
            (formats::TEXT, ClipPayload::Text("primary".to_string())),
        ]);
        assert_eq!(content.text(), Some("primary"));
    }

    #[test]
    fn text_accessor_falls_back_to_any_inline_text() {
        let content = content_of(&[
            (formats::IMAGE, ClipPayload::Binary { bytes: 64 }),
            ("html", ClipPayload::Text("<b>hi</b>".to_string())),
        ]);
        assert_eq!(content.text(), Some("<b>hi</b>"));
    }

    #[test]
    fn binary_only_content_has_no_text() {
        let content = content_of(&[(formats::IMAGE, ClipPayload::Binary { bytes: 1024 })]);
        assert_eq!(content.text(), None);
        assert!(content.has_format(formats::IMAGE));
        assert_eq!(content.available_formats(), vec![formats::IMAGE]);
    }

    #[test]
    fn payload_serde_roundtrip() {
        let json = r#"{"text":"hello","image":{"bytes":2048}}"#;
        let content: ClipContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.text(), Some("hello"));
        assert!(content.has_format(formats::IMAGE));
    }
}
