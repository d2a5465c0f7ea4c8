//! # veristruct-models
//!
//! Chat model trait, provider implementations, and the structured-output
//! backend abstraction for veristruct.
//!
//! ## Core Concepts
//!
//! - **[`ChatModel`]**: the interface every backend implements
//! - **[`ModelProfile`]**: per-model capabilities (native structured
//!   output, plain JSON mode)
//! - **[`StructuredBackend`]**: the two-variant capability abstraction,
//!   [`StructuredBackend::Native`] for backends with schema-constrained
//!   output and [`StructuredBackend::PromptCoerced`] for backends that
//!   need the prompt-and-parse shim, selected once at construction so
//!   call sites never branch on backend identity
//! - **[`OpenAIChatModel`]**: OpenAI-compatible chat completions client,
//!   also covering DeepSeek endpoints via a base-URL preset
//! - **[`MockModel`]**: scripted model for offline tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use veristruct_models::{infer_model, StructuredBackend};
//!
//! let model = infer_model("deepseek:deepseek-chat")?;
//! let backend = StructuredBackend::for_model(model);
//! // `backend` is PromptCoerced: prompts are rewritten to demand JSON and
//! // replies are parsed tolerantly, transparently to the caller.
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod factory;
pub mod mock;
pub mod model;
pub mod openai;
pub mod profile;
pub mod structured;

// Re-exports
pub use config::ProviderSettings;
pub use error::{ModelError, ModelResult};
pub use factory::{infer_model, structured_backend_for};
pub use mock::{MockModel, RecordedRequest};
pub use model::{BoxedChatModel, ChatModel, GenerateOptions, ResponseFormat};
pub use openai::OpenAIChatModel;
pub use profile::ModelProfile;
pub use structured::StructuredBackend;
