//! Message-like input normalization.
//!
//! Call sites assemble conversations in different shapes: `(role, content)`
//! pairs, already-typed [`ChatMessage`] values, rendered prompt templates,
//! or nested lists of any of these. [`normalize_messages`] flattens them
//! all into one canonical ordered sequence at a single seam, so the backend
//! invocation never has to care.

use crate::errors::NormalizeError;
use crate::messages::message::{ChatMessage, Role};
use crate::messages::prompt::PromptValue;

/// Role literal used by prompt templates that serialize their message list
/// as a single `("messages", [...])` pair.
pub const NESTED_MESSAGES_ROLE: &str = "messages";

/// Anything that can be expanded into message-like values.
pub trait ToMessages {
    /// Expand into message-like values, in order.
    fn to_messages(&self) -> Vec<MessageLike>;
}

/// Content side of a `(role, content)` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairContent {
    /// Literal text content.
    Text(String),
    /// A nested message list, legal only under the
    /// [`NESTED_MESSAGES_ROLE`] role literal.
    Messages(Vec<MessageLike>),
}

/// A message-like input value accepted by [`normalize_messages`].
#[derive(Debug, Clone, PartialEq)]
pub enum MessageLike {
    /// An already-canonical message, appended as-is.
    Message(ChatMessage),
    /// A `(role, content)` pair; the role is matched case-insensitively.
    Pair(String, PairContent),
    /// A nested sequence, flattened depth-first left-to-right.
    List(Vec<MessageLike>),
    /// A rendered prompt value, expanded via its message conversion.
    Prompt(PromptValue),
    /// An absent entry; skipped so callers can pass optional turns
    /// without filtering.
    Skip,
}

impl MessageLike {
    /// Create a `(role, content)` pair.
    #[must_use]
    pub fn pair(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Pair(role.into(), PairContent::Text(content.into()))
    }
}

impl From<ChatMessage> for MessageLike {
    fn from(message: ChatMessage) -> Self {
        Self::Message(message)
    }
}

impl From<(&str, &str)> for MessageLike {
    fn from((role, content): (&str, &str)) -> Self {
        Self::pair(role, content)
    }
}

impl From<(String, String)> for MessageLike {
    fn from((role, content): (String, String)) -> Self {
        Self::Pair(role, PairContent::Text(content))
    }
}

impl From<Vec<MessageLike>> for MessageLike {
    fn from(items: Vec<MessageLike>) -> Self {
        Self::List(items)
    }
}

impl From<PromptValue> for MessageLike {
    fn from(prompt: PromptValue) -> Self {
        Self::Prompt(prompt)
    }
}

impl<T: Into<MessageLike>> From<Option<T>> for MessageLike {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Skip,
        }
    }
}

/// Flatten message-like inputs into canonical messages.
///
/// Normalization is a pure flattening: no reordering, no deduplication, no
/// content mutation. Output order matches the depth-first left-to-right
/// visit order of the input. `Skip` entries are no-ops. A pair carrying a
/// nested message list under any role other than
/// [`NESTED_MESSAGES_ROLE`] is a caller bug and fails with
/// [`NormalizeError::UnsupportedPayload`].
///
/// # Example
///
/// ```rust
/// use veristruct_core::messages::{normalize_messages, ChatMessage, MessageLike, Role};
///
/// let messages = normalize_messages(vec![
///     MessageLike::from(("system", "Extract claims.")),
///     MessageLike::Skip,
///     MessageLike::from(ChatMessage::user("The sky is blue.")),
/// ])
/// .unwrap();
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].role, Role::System);
/// ```
pub fn normalize_messages<I>(input: I) -> Result<Vec<ChatMessage>, NormalizeError>
where
    I: IntoIterator<Item = MessageLike>,
{
    let mut normalized = Vec::new();
    for entry in input {
        append_from(entry, &mut normalized)?;
    }
    Ok(normalized)
}

fn append_from(value: MessageLike, out: &mut Vec<ChatMessage>) -> Result<(), NormalizeError> {
    match value {
        MessageLike::Skip => Ok(()),
        MessageLike::Message(message) => {
            out.push(message);
            Ok(())
        }
        MessageLike::Prompt(prompt) => {
            for sub in prompt.to_messages() {
                append_from(sub, out)?;
            }
            Ok(())
        }
        MessageLike::Pair(role, PairContent::Text(content)) => {
            out.push(ChatMessage::new(Role::parse(&role), content));
            Ok(())
        }
        MessageLike::Pair(role, PairContent::Messages(items)) => {
            // Prompt templates iterate to ("messages", [...]); anything else
            // with list content is a caller bug.
            if role == NESTED_MESSAGES_ROLE {
                for item in items {
                    append_from(item, out)?;
                }
                Ok(())
            } else {
                Err(NormalizeError::unsupported(format!(
                    "(\"{role}\", [...])"
                )))
            }
        }
        MessageLike::List(items) => {
            for item in items {
                append_from(item, out)?;
            }
            Ok(())
        }
    }
}
