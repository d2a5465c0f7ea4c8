//! The structured-output orchestration call.

use tracing::error;
use veristruct_core::{normalize_messages, MessageLike, ModelSettings, NormalizeError};
use veristruct_models::StructuredBackend;
use veristruct_output::StructuredOutput;

/// Call a model with structured output and consistent error handling.
///
/// Normalizes the message-like input, dispatches through the backend's
/// structured-output strategy, and folds failures by kind:
///
/// - an unsupported message payload is a caller bug and propagates as
///   `Err(NormalizeError)`;
/// - a backend failure (network, auth, timeout) is logged with the
///   `context` label and yields `Ok(None)`;
/// - a reply without usable JSON yields `Ok(Some(defaults))`.
///
/// Callers must therefore branch on `None` to tell outright failure apart
/// from a benign empty result.
pub async fn call_with_structured_output<T, I>(
    backend: &StructuredBackend,
    messages: I,
    settings: &ModelSettings,
    context: &str,
) -> Result<Option<T>, NormalizeError>
where
    T: StructuredOutput,
    I: IntoIterator<Item = MessageLike>,
{
    let normalized = normalize_messages(messages)?;

    match backend.generate_structured::<T>(&normalized, settings).await {
        Ok(result) => Ok(Some(result)),
        Err(err) => {
            error!(context, error = %err, "model call failed");
            Ok(None)
        }
    }
}
