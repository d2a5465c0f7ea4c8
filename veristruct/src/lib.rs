//! # veristruct
//!
//! Tolerant structured output for LLM claim-extraction and verification
//! pipelines.
//!
//! Benchmark pipelines ask a model the same kind of question thousands of
//! times: "extract the verifiable claims from this sentence", "verify this
//! claim against this evidence". Some providers can be held to a JSON
//! schema; others return JSON wrapped in prose on a good day. This crate
//! glues the workspace together around that reality:
//!
//! - [`call_with_structured_output`] is the one call sites use: normalize
//!   whatever message shapes the caller assembled, dispatch through a
//!   [`StructuredBackend`], and hand back `Some(result)` or `None`.
//! - [`process_with_voting`] runs multiple completions per item and keeps
//!   only consensus results.
//! - [`fit_evidence_to_budget`] keeps evidence snippets inside the
//!   context window.
//! - [`ExtractedClaims`] and [`ClaimVerdict`] are the structured outputs
//!   the pipeline actually requests.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use veristruct::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let model = MockModel::new("deepseek-chat")
//!     .with_profile(ModelProfile::deepseek())
//!     .with_text_reply(r#"{"claims": ["The tower is 330m tall."], "no_claims": false}"#);
//! let backend = StructuredBackend::for_model(Arc::new(model));
//!
//! let result: Option<ExtractedClaims> = call_with_structured_output(
//!     &backend,
//!     vec![
//!         MessageLike::from(("system", "Extract verifiable claims.")),
//!         MessageLike::from(("human", "The tower is 330m tall.")),
//!     ],
//!     &ModelSettings::new(),
//!     "claim-extraction",
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(result.unwrap().claims.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod call;
pub mod outputs;
pub mod tokens;
pub mod voting;

// Re-exports
pub use call::call_with_structured_output;
pub use outputs::{ClaimVerdict, Evidence, ExtractedClaims, VerdictLabel};
pub use tokens::{estimate_token_count, fit_evidence_to_budget, format_evidence};
pub use voting::{diversity_temperature, process_with_voting, VotingConfig};

pub use veristruct_core::{
    normalize_messages, ChatMessage, ChatPromptTemplate, MessageLike, ModelReply, ModelSettings,
    NormalizeError, PromptValue, ReplyContent, Role,
};
pub use veristruct_models::{
    infer_model, structured_backend_for, ChatModel, MockModel, ModelError, ModelProfile,
    OpenAIChatModel, ProviderSettings, StructuredBackend,
};
pub use veristruct_output::{FieldSpec, ObjectSchema, StructuredOutput};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::call::call_with_structured_output;
    pub use crate::outputs::{ClaimVerdict, Evidence, ExtractedClaims, VerdictLabel};
    pub use crate::tokens::{estimate_token_count, fit_evidence_to_budget};
    pub use crate::voting::{diversity_temperature, process_with_voting, VotingConfig};
    pub use veristruct_core::prelude::*;
    pub use veristruct_models::{
        infer_model, structured_backend_for, ChatModel, MockModel, ModelError, ModelProfile,
        OpenAIChatModel, StructuredBackend,
    };
    pub use veristruct_output::prelude::*;
}
