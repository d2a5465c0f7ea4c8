//! Canonical chat messages.
//!
//! A [`ChatMessage`] is the single representation every backend call works
//! with, regardless of how the caller assembled the conversation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a canonical message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System instruction.
    System,
    /// Human/user turn.
    User,
    /// Model turn.
    Assistant,
}

impl Role {
    /// Parse a role string.
    ///
    /// Matching is case-insensitive. `"system"` maps to [`Role::System`],
    /// `"assistant"` and `"ai"` map to [`Role::Assistant`], and everything
    /// else (including `"human"`, `"user"` and unrecognized strings) maps
    /// to [`Role::User`].
    #[must_use]
    pub fn parse(role: &str) -> Self {
        match role.to_lowercase().as_str() {
            "system" => Role::System,
            "assistant" | "ai" => Role::Assistant,
            _ => Role::User,
        }
    }

    /// Get the canonical role string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical role-tagged message.
///
/// Ordering within a conversation is significant and preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The message role.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a new message.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Whether the message has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!(Role::parse("SYSTEM"), Role::System);
        assert_eq!(Role::parse("System"), Role::System);
        assert_eq!(Role::parse("Assistant"), Role::Assistant);
        assert_eq!(Role::parse("AI"), Role::Assistant);
    }

    #[test]
    fn test_role_parse_defaults_to_user() {
        assert_eq!(Role::parse("human"), Role::User);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("tool"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ChatMessage::system("a").role, Role::System);
        assert_eq!(ChatMessage::user("b").role, Role::User);
        assert_eq!(ChatMessage::assistant("c").role, Role::Assistant);
    }

    #[test]
    fn test_serde_roundtrip() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"user\""));
        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
