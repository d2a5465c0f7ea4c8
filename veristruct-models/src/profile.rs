//! Model capability profiles.

/// Capabilities of a model endpoint.
///
/// The profile is consulted exactly once, when a
/// [`StructuredBackend`](crate::StructuredBackend) is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelProfile {
    /// The endpoint enforces a caller-supplied JSON schema
    /// (e.g. OpenAI's `response_format: json_schema`).
    pub supports_native_structured_output: bool,
    /// The endpoint supports a plain "reply with a JSON object" mode
    /// without schema enforcement (e.g. DeepSeek's `json_object`).
    pub supports_json_mode: bool,
}

impl ModelProfile {
    /// Profile for OpenAI chat models.
    #[must_use]
    pub fn openai() -> Self {
        Self {
            supports_native_structured_output: true,
            supports_json_mode: true,
        }
    }

    /// Profile for DeepSeek chat models: JSON mode only, no schema
    /// enforcement, so structured output goes through the prompt shim.
    #[must_use]
    pub fn deepseek() -> Self {
        Self {
            supports_native_structured_output: false,
            supports_json_mode: true,
        }
    }

    /// Profile for endpoints with no structured-output support at all.
    #[must_use]
    pub fn plain_text() -> Self {
        Self::default()
    }
}
