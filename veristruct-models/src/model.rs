//! Core chat model trait and request options.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use veristruct_core::{ChatMessage, ModelReply, ModelSettings};

use crate::error::ModelError;
use crate::profile::ModelProfile;

/// Requested response format for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    /// Provider JSON mode: the reply must be a JSON object, shape
    /// unconstrained.
    JsonObject,
    /// Provider structured output: the reply must conform to the given
    /// JSON schema.
    JsonSchema(JsonValue),
}

/// Per-request options beyond the shared generation settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    /// Response format constraint, if any.
    pub response_format: Option<ResponseFormat>,
}

impl GenerateOptions {
    /// Create new empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response format.
    #[must_use]
    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Core chat model trait.
///
/// Implementations are stateless between calls; each invocation operates
/// on its own input and output with no side effects beyond logging.
#[async_trait]
pub trait ChatModel: Send + Sync + std::fmt::Debug {
    /// Get the model name.
    fn name(&self) -> &str;

    /// Get the provider name (openai, deepseek, mock, ...).
    fn provider(&self) -> &str;

    /// Get the full model identifier.
    fn identifier(&self) -> String {
        format!("{}:{}", self.provider(), self.name())
    }

    /// Get the model profile.
    fn profile(&self) -> &ModelProfile;

    /// Generate a reply for a canonical message sequence.
    async fn generate(
        &self,
        messages: &[ChatMessage],
        settings: &ModelSettings,
        options: &GenerateOptions,
    ) -> Result<ModelReply, ModelError>;
}

/// Shared model handle for dynamic dispatch.
pub type BoxedChatModel = Arc<dyn ChatModel>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = GenerateOptions::new().with_response_format(ResponseFormat::JsonObject);
        assert_eq!(options.response_format, Some(ResponseFormat::JsonObject));
        assert_eq!(GenerateOptions::new().response_format, None);
    }
}
