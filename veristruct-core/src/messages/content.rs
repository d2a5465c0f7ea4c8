//! Reply content shapes.
//!
//! Backends do not agree on the shape of reply content: most return a plain
//! string, some return a list of typed parts, and a misbehaving endpoint can
//! return arbitrary JSON. [`ReplyContent`] captures all three and coerces
//! them to plain text for parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One part of a multi-part reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    /// A textual part.
    Text {
        /// The part text.
        text: String,
    },
    /// Any non-text part (images, tool payloads, vendor extras).
    Other(JsonValue),
}

impl ContentPart {
    /// Create a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Get the text if this is a textual part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Other(_) => None,
        }
    }
}

/// Content of a model reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyContent {
    /// Plain text content.
    Text(String),
    /// A heterogeneous sequence of content parts.
    Parts(Vec<ContentPart>),
    /// Anything else the backend produced.
    Other(JsonValue),
}

impl ReplyContent {
    /// Create plain text content.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Coerce the content to plain text.
    ///
    /// Part lists are concatenated in encountered order, keeping only the
    /// textual parts. Any other shape is stringified.
    #[must_use]
    pub fn coerce_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(ContentPart::as_text)
                .collect::<Vec<_>>()
                .join(""),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl From<String> for ReplyContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ReplyContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_text() {
        let content = ReplyContent::text("hello");
        assert_eq!(content.coerce_text(), "hello");
    }

    #[test]
    fn test_coerce_parts_keeps_text_in_order() {
        let content = ReplyContent::Parts(vec![
            ContentPart::text("{\"a\":"),
            ContentPart::Other(serde_json::json!({"type": "image", "url": "x"})),
            ContentPart::text(" 1}"),
        ]);
        assert_eq!(content.coerce_text(), "{\"a\": 1}");
    }

    #[test]
    fn test_coerce_other_is_stringified() {
        let content = ReplyContent::Other(serde_json::json!(42));
        assert_eq!(content.coerce_text(), "42");
    }

    #[test]
    fn test_deserialize_string_content() {
        let content: ReplyContent = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(content, ReplyContent::text("plain"));
    }

    #[test]
    fn test_deserialize_parts_content() {
        let content: ReplyContent =
            serde_json::from_str(r#"[{"type": "text", "text": "hi"}]"#).unwrap();
        assert_eq!(content.coerce_text(), "hi");
    }
}
