//! OpenAI-compatible chat completions model.
//!
//! One client covers every endpoint speaking the chat-completions dialect;
//! DeepSeek differs only in base URL and capability profile, so it is a
//! constructor preset rather than a separate implementation.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::time::Duration;
use veristruct_core::{ChatMessage, FinishReason, ModelReply, ModelSettings, ReplyContent, TokenUsage};

use crate::error::ModelError;
use crate::model::{ChatModel, GenerateOptions, ResponseFormat};
use crate::profile::ModelProfile;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

/// OpenAI-compatible chat completions model.
#[derive(Debug, Clone)]
pub struct OpenAIChatModel {
    model_name: String,
    provider: &'static str,
    client: Client,
    api_key: String,
    base_url: String,
    profile: ModelProfile,
    default_timeout: Duration,
}

impl OpenAIChatModel {
    /// Create a new OpenAI chat model.
    pub fn new(model_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            provider: "openai",
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
            profile: ModelProfile::openai(),
            default_timeout: Duration::from_secs(120),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(model_name: impl Into<String>) -> Result<Self, ModelError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ModelError::configuration("OPENAI_API_KEY environment variable not set")
        })?;
        Ok(Self::new(model_name, api_key))
    }

    /// Create a DeepSeek chat model.
    ///
    /// DeepSeek speaks the same wire dialect but cannot enforce a JSON
    /// schema, so its profile routes structured output through the
    /// prompt-coercion shim.
    pub fn deepseek(model_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut model = Self::new(model_name, api_key);
        model.provider = "deepseek";
        model.base_url = DEEPSEEK_BASE_URL.to_string();
        model.profile = ModelProfile::deepseek();
        model
    }

    /// Create a DeepSeek model from the `DEEPSEEK_API_KEY` environment
    /// variable.
    pub fn deepseek_from_env(model_name: impl Into<String>) -> Result<Self, ModelError> {
        let api_key = std::env::var("DEEPSEEK_API_KEY").map_err(|_| {
            ModelError::configuration("DEEPSEEK_API_KEY environment variable not set")
        })?;
        Ok(Self::deepseek(model_name, api_key))
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the default timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Set a custom profile.
    #[must_use]
    pub fn with_profile(mut self, profile: ModelProfile) -> Self {
        self.profile = profile;
        self
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
        settings: &ModelSettings,
        options: &GenerateOptions,
    ) -> ChatCompletionRequest {
        let messages = messages
            .iter()
            .map(|m| WireMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect();

        let response_format = options.response_format.as_ref().map(|format| match format {
            ResponseFormat::JsonObject => json!({"type": "json_object"}),
            ResponseFormat::JsonSchema(schema) => json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "output",
                    "schema": schema,
                    "strict": true,
                },
            }),
        });

        ChatCompletionRequest {
            model: self.model_name.clone(),
            messages,
            temperature: settings.temperature,
            top_p: settings.top_p,
            max_tokens: settings.max_tokens,
            stop: settings.stop.clone(),
            seed: settings.seed,
            response_format,
        }
    }

    fn parse_response(&self, resp: ChatCompletionResponse) -> Result<ModelReply, ModelError> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::invalid_response("no choices in response"))?;

        if let Some(refusal) = choice.message.refusal {
            return Err(ModelError::api(format!("model refused: {refusal}")));
        }

        let finish_reason = choice.finish_reason.as_deref().map(|r| match r {
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        });

        let usage = resp.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ModelReply {
            content: choice
                .message
                .content
                .unwrap_or_else(|| ReplyContent::text("")),
            model_name: Some(resp.model),
            finish_reason,
            usage,
            timestamp: Utc::now(),
        })
    }

    fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
        headers
            .get("retry-after")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    fn handle_error_response(&self, status: u16, body: &str, headers: &HeaderMap) -> ModelError {
        if let Ok(err) = serde_json::from_str::<WireError>(body) {
            if status == 401 {
                return ModelError::auth(err.error.message);
            }
            if status == 429 {
                return ModelError::rate_limited(Self::parse_retry_after(headers));
            }
            return ModelError::Api {
                message: err.error.message,
                code: err.error.code,
            };
        }

        if status == 429 {
            return ModelError::rate_limited(Self::parse_retry_after(headers));
        }

        ModelError::http(status, body)
    }
}

#[async_trait]
impl ChatModel for OpenAIChatModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn provider(&self) -> &str {
        self.provider
    }

    fn profile(&self) -> &ModelProfile {
        &self.profile
    }

    async fn generate(
        &self,
        messages: &[ChatMessage],
        settings: &ModelSettings,
        options: &GenerateOptions,
    ) -> Result<ModelReply, ModelError> {
        let body = self.build_request(messages, settings, options);
        let timeout = settings.timeout.unwrap_or(self.default_timeout);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(self.handle_error_response(status, &body, &headers));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::invalid_response(e.to_string()))?;
        self.parse_response(parsed)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<ReplyContent>,
    #[serde(default)]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: WireErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WireErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}
