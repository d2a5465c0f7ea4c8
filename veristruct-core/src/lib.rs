//! # veristruct-core
//!
//! Core message types and normalization for the veristruct claim pipeline.
//!
//! This crate provides the foundational types used throughout the veristruct
//! ecosystem:
//!
//! - **Messages**: canonical role-tagged chat messages and model replies
//! - **Normalization**: flattening heterogeneous message-like input into
//!   one canonical ordered sequence
//! - **Prompts**: rendered prompt values and a small chat prompt template
//! - **Settings**: model generation options
//!
//! ## Example
//!
//! ```rust
//! use veristruct_core::messages::{normalize_messages, ChatMessage, MessageLike};
//!
//! let messages = normalize_messages(vec![
//!     MessageLike::from(("system", "You extract factual claims.")),
//!     MessageLike::from(("human", "The Eiffel Tower opened in 1889.")),
//! ])
//! .unwrap();
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0], ChatMessage::system("You extract factual claims."));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod errors;
pub mod messages;
pub mod settings;

// Re-exports for convenience
pub use errors::NormalizeError;
pub use messages::{
    normalize_messages, ChatMessage, ChatPromptTemplate, ContentPart, FinishReason, MessageLike,
    ModelReply, PairContent, PromptValue, ReplyContent, Role, ToMessages, TokenUsage,
};
pub use settings::ModelSettings;

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::errors::NormalizeError;
    pub use crate::messages::{
        normalize_messages, ChatMessage, ChatPromptTemplate, ContentPart, FinishReason,
        MessageLike, ModelReply, PromptValue, ReplyContent, Role, ToMessages, TokenUsage,
    };
    pub use crate::settings::ModelSettings;
}
