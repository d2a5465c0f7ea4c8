//! Prompt values and templates.
//!
//! [`ChatPromptTemplate`] renders per-role templates with `{placeholder}`
//! substitution into a [`PromptValue`], which the normalizer expands like
//! any other message-like input.

use std::collections::HashMap;

use crate::messages::message::{ChatMessage, Role};
use crate::messages::normalize::{MessageLike, ToMessages};

/// A rendered prompt: an ordered list of canonical messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptValue {
    messages: Vec<ChatMessage>,
}

impl PromptValue {
    /// Create an empty prompt value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a list of messages.
    #[must_use]
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Append a message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// The rendered messages, in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the prompt is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl ToMessages for PromptValue {
    fn to_messages(&self) -> Vec<MessageLike> {
        self.messages
            .iter()
            .cloned()
            .map(MessageLike::Message)
            .collect()
    }
}

/// A whole prompt value can be normalized directly.
impl IntoIterator for PromptValue {
    type Item = MessageLike;
    type IntoIter = std::vec::IntoIter<MessageLike>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages
            .into_iter()
            .map(MessageLike::Message)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// A chat prompt template with `{name}` placeholders.
///
/// # Example
///
/// ```rust
/// use veristruct_core::messages::{ChatPromptTemplate, Role};
///
/// let template = ChatPromptTemplate::new()
///     .with_part(Role::System, "You verify claims against evidence.")
///     .with_part(Role::User, "Claim: {claim_text}\n\nEvidence:\n{evidence}");
///
/// let prompt = template.format(&[
///     ("claim_text", "The tower is 330m tall."),
///     ("evidence", "Evidence 1: ..."),
/// ]);
/// assert!(prompt.messages()[1].content.starts_with("Claim: The tower"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatPromptTemplate {
    parts: Vec<(Role, String)>,
}

impl ChatPromptTemplate {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a templated part.
    #[must_use]
    pub fn with_part(mut self, role: Role, template: impl Into<String>) -> Self {
        self.parts.push((role, template.into()));
        self
    }

    /// Render the template with the given variables.
    ///
    /// Placeholders with no matching variable are left as-is.
    #[must_use]
    pub fn format(&self, variables: &[(&str, &str)]) -> PromptValue {
        let vars: HashMap<&str, &str> = variables.iter().copied().collect();
        let messages = self
            .parts
            .iter()
            .map(|(role, template)| ChatMessage::new(*role, render(template, &vars)))
            .collect();
        PromptValue::from_messages(messages)
    }
}

fn render(template: &str, vars: &HashMap<&str, &str>) -> String {
    let mut rendered = template.to_string();
    for (name, value) in vars {
        rendered = rendered.replace(&format!("{{{name}}}"), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_substitutes_placeholders() {
        let template = ChatPromptTemplate::new()
            .with_part(Role::System, "You are terse.")
            .with_part(Role::User, "Verify: {claim}");

        let prompt = template.format(&[("claim", "grass is green")]);
        assert_eq!(prompt.messages()[1].content, "Verify: grass is green");
    }

    #[test]
    fn test_format_leaves_unknown_placeholders() {
        let template = ChatPromptTemplate::new().with_part(Role::User, "{present} {missing}");
        let prompt = template.format(&[("present", "here")]);
        assert_eq!(prompt.messages()[0].content, "here {missing}");
    }

    #[test]
    fn test_prompt_value_normalizes_as_whole_input() {
        use crate::messages::normalize::normalize_messages;

        let prompt = PromptValue::from_messages(vec![
            ChatMessage::system("a"),
            ChatMessage::user("b"),
        ]);
        let messages = normalize_messages(prompt.clone()).unwrap();
        assert_eq!(messages, prompt.messages());
    }

    #[test]
    fn test_to_messages_preserves_order() {
        let prompt = PromptValue::from_messages(vec![
            ChatMessage::system("a"),
            ChatMessage::user("b"),
        ]);
        let likes = prompt.to_messages();
        assert_eq!(likes.len(), 2);
    }
}
