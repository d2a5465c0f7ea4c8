//! Model reply types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::messages::content::ReplyContent;

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop.
    Stop,
    /// Token limit reached.
    Length,
    /// Provider content filter triggered.
    ContentFilter,
}

/// Token accounting for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u64,
    /// Tokens in the completion.
    pub completion_tokens: u64,
    /// Total tokens.
    pub total_tokens: u64,
}

/// A complete reply from a model backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    /// The reply content.
    pub content: ReplyContent,
    /// Name of the model that produced the reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Why generation stopped, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// Token usage, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// When the reply was received.
    pub timestamp: DateTime<Utc>,
}

impl ModelReply {
    /// Create a plain-text reply.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: ReplyContent::text(text),
            model_name: None,
            finish_reason: Some(FinishReason::Stop),
            usage: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    /// Set the token usage.
    #[must_use]
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// The reply content coerced to plain text.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content.coerce_text()
    }
}
