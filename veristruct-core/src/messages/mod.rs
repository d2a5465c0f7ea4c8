//! Message types for model interactions.
//!
//! This module provides the message types used when talking to LLM backends:
//!
//! - **Canonical messages**: [`ChatMessage`] and [`Role`]
//! - **Normalization**: [`MessageLike`] and [`normalize_messages`]
//! - **Prompts**: [`PromptValue`] and [`ChatPromptTemplate`]
//! - **Replies**: [`ModelReply`] and [`ReplyContent`]
//!
//! ## Example
//!
//! ```rust
//! use veristruct_core::messages::{normalize_messages, ChatMessage, MessageLike, Role};
//!
//! let messages = normalize_messages(vec![
//!     MessageLike::from(ChatMessage::system("Verify claims against evidence.")),
//!     MessageLike::from(("user", "Claim: water boils at 100C.")),
//! ])
//! .unwrap();
//!
//! assert_eq!(messages[1].role, Role::User);
//! ```

pub mod content;
pub mod message;
pub mod normalize;
pub mod prompt;
pub mod reply;

// Re-exports for convenience
pub use content::{ContentPart, ReplyContent};
pub use message::{ChatMessage, Role};
pub use normalize::{normalize_messages, MessageLike, PairContent, ToMessages};
pub use prompt::{ChatPromptTemplate, PromptValue};
pub use reply::{FinishReason, ModelReply, TokenUsage};
