//! Environment-driven provider settings.
//!
//! API keys are validated for shape at load time so a miswired environment
//! fails fast instead of producing opaque 401s mid-run.

use crate::error::ModelError;

/// Environment variable naming the default provider.
pub const LLM_PROVIDER_VAR: &str = "LLM_PROVIDER";
/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the DeepSeek API key.
pub const DEEPSEEK_API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Providers the factory knows how to build.
pub const SUPPORTED_PROVIDERS: &[&str] = &["openai", "deepseek"];

/// Provider settings loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Default provider name.
    pub llm_provider: String,
    /// OpenAI API key, if configured.
    pub openai_api_key: Option<String>,
    /// DeepSeek API key, if configured.
    pub deepseek_api_key: Option<String>,
}

impl ProviderSettings {
    /// Load and validate settings from the environment.
    pub fn from_env() -> Result<Self, ModelError> {
        let llm_provider =
            std::env::var(LLM_PROVIDER_VAR).unwrap_or_else(|_| "openai".to_string());
        let openai_api_key = std::env::var(OPENAI_API_KEY_VAR).ok();
        let deepseek_api_key = std::env::var(DEEPSEEK_API_KEY_VAR).ok();

        Self::new(llm_provider, openai_api_key, deepseek_api_key)
    }

    /// Build settings from explicit values, applying the same validation
    /// as [`ProviderSettings::from_env`].
    pub fn new(
        llm_provider: String,
        openai_api_key: Option<String>,
        deepseek_api_key: Option<String>,
    ) -> Result<Self, ModelError> {
        validate_provider(&llm_provider)?;
        if let Some(key) = openai_api_key.as_deref() {
            validate_secret_key(OPENAI_API_KEY_VAR, key)?;
        }
        if let Some(key) = deepseek_api_key.as_deref() {
            validate_secret_key(DEEPSEEK_API_KEY_VAR, key)?;
        }

        Ok(Self {
            llm_provider,
            openai_api_key,
            deepseek_api_key,
        })
    }

    /// The API key for the configured default provider, if present.
    #[must_use]
    pub fn default_provider_key(&self) -> Option<&str> {
        match self.llm_provider.as_str() {
            "openai" => self.openai_api_key.as_deref(),
            "deepseek" => self.deepseek_api_key.as_deref(),
            _ => None,
        }
    }
}

fn validate_provider(provider: &str) -> Result<(), ModelError> {
    if SUPPORTED_PROVIDERS.contains(&provider) {
        Ok(())
    } else {
        Err(ModelError::configuration(format!(
            "unknown provider: {provider}. Supported providers: {SUPPORTED_PROVIDERS:?}"
        )))
    }
}

fn validate_secret_key(var: &str, key: &str) -> Result<(), ModelError> {
    if key.starts_with("sk-") {
        Ok(())
    } else {
        Err(ModelError::configuration(format!(
            "{var} must start with 'sk-'"
        )))
    }
}
