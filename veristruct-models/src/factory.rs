//! Model factory.
//!
//! Parses `provider:model` identifiers into model instances. Instances are
//! cached by identifier so repeated lookups do not rebuild HTTP clients.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::SUPPORTED_PROVIDERS;
use crate::error::ModelError;
use crate::model::BoxedChatModel;
use crate::openai::OpenAIChatModel;
use crate::structured::StructuredBackend;

static MODEL_CACHE: OnceLock<Mutex<HashMap<String, BoxedChatModel>>> = OnceLock::new();

fn cache() -> &'static Mutex<HashMap<String, BoxedChatModel>> {
    MODEL_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Build (or fetch from cache) a model from a `provider:model` identifier.
///
/// A bare model name defaults to the `openai` provider. API keys come from
/// the environment (`OPENAI_API_KEY` / `DEEPSEEK_API_KEY`).
///
/// # Example
///
/// ```rust,ignore
/// let model = infer_model("deepseek:deepseek-chat")?;
/// assert_eq!(model.identifier(), "deepseek:deepseek-chat");
/// ```
pub fn infer_model(identifier: &str) -> Result<BoxedChatModel, ModelError> {
    let (provider, model_name) = match identifier.split_once(':') {
        Some((provider, model_name)) => (provider, model_name),
        None => ("openai", identifier),
    };
    let key = format!("{provider}:{model_name}");

    if let Some(model) = cache().lock().get(&key) {
        return Ok(Arc::clone(model));
    }

    let model: BoxedChatModel = match provider {
        "openai" => Arc::new(OpenAIChatModel::from_env(model_name)?),
        "deepseek" => Arc::new(OpenAIChatModel::deepseek_from_env(model_name)?),
        _ => {
            return Err(ModelError::configuration(format!(
                "unknown provider: {provider}. Supported providers: {SUPPORTED_PROVIDERS:?}"
            )))
        }
    };

    cache().lock().insert(key, Arc::clone(&model));
    Ok(model)
}

/// Build a [`StructuredBackend`] for a `provider:model` identifier.
pub fn structured_backend_for(identifier: &str) -> Result<StructuredBackend, ModelError> {
    Ok(StructuredBackend::for_model(infer_model(identifier)?))
}
