//! The structured-response coercer.
//!
//! Two halves: rewriting outbound prompts to demand a JSON-only reply, and
//! tolerantly parsing the inbound reply into the target type. Parse
//! failures never propagate; a reply without usable JSON degrades to the
//! schema's defaults so claim pipelines keep processing subsequent items.

use serde_json::Value as JsonValue;
use tracing::{debug, warn};
use veristruct_core::messages::ChatMessage;

use crate::parser::extract_json_candidate;
use crate::schema::{ObjectSchema, StructuredOutput};

const LOG_PREVIEW_CHARS: usize = 200;

/// Render the JSON-only instruction for a target schema.
#[must_use]
pub fn format_instruction(schema: &ObjectSchema) -> String {
    format!(
        "Please respond ONLY with valid JSON matching this exact structure:\n\n{}\n\n\
         Do not include any other text, explanations, or markdown formatting.",
        schema.shape_hint()
    )
}

/// Append the JSON-only instruction to the last message of a conversation.
///
/// Copy-on-write: the input is not mutated; only the final message of the
/// returned sequence differs. If the last message is empty the instruction
/// becomes its entire content, otherwise it is appended after a blank
/// line. An empty sequence is returned unchanged, since there is no target
/// message.
#[must_use]
pub fn inject_format_instruction(
    messages: &[ChatMessage],
    schema: &ObjectSchema,
) -> Vec<ChatMessage> {
    let Some((last, rest)) = messages.split_last() else {
        return Vec::new();
    };

    let instruction = format_instruction(schema);
    let content = if last.content.is_empty() {
        instruction
    } else {
        format!("{}\n\n{}", last.content, instruction)
    };

    let mut augmented = rest.to_vec();
    augmented.push(ChatMessage::new(last.role, content));
    augmented
}

/// Parse a raw reply text into the target type, falling back to defaults.
///
/// Extraction and failure policy:
/// - no JSON-like span in the text → defaults, logged at debug level;
/// - a span that is malformed JSON or mismatches the schema → defaults,
///   logged at warn level;
/// - an empty object `{}` → defaults (treated as "no meaningful payload");
/// - valid JSON → populated instance, absent fields taking their declared
///   defaults.
///
/// The `context` label ties log lines back to the calling pipeline stage.
#[must_use]
pub fn parse_structured<T: StructuredOutput>(text: &str, context: &str) -> T {
    let Some(candidate) = extract_json_candidate(text) else {
        debug!(
            context,
            reply = %preview(text),
            "no JSON found in model reply, using schema defaults"
        );
        return T::default();
    };

    let value: JsonValue = match serde_json::from_str(&candidate) {
        Ok(value) => value,
        Err(error) => {
            warn!(
                context,
                %error,
                candidate = %preview(&candidate),
                "model reply contained malformed JSON, using schema defaults"
            );
            return T::default();
        }
    };

    if matches!(&value, JsonValue::Object(map) if map.is_empty()) {
        return T::default();
    }

    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(
                context,
                %error,
                candidate = %preview(&candidate),
                "model reply did not match the target schema, using schema defaults"
            );
            T::default()
        }
    }
}

/// Truncate text for log lines, respecting char boundaries.
fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct ExtractedClaims {
        #[serde(default)]
        claims: Vec<String>,
        #[serde(default)]
        no_claims: bool,
    }

    impl StructuredOutput for ExtractedClaims {
        fn object_schema() -> ObjectSchema {
            ObjectSchema::new()
                .with_field(FieldSpec::string_list("claims"))
                .with_field(FieldSpec::boolean("no_claims"))
        }
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed: ExtractedClaims =
            parse_structured(r#"{"claims": ["c1"], "no_claims": false}"#, "test");
        assert_eq!(parsed.claims, vec!["c1".to_string()]);
        assert!(!parsed.no_claims);
    }

    #[test]
    fn test_parse_fenced_json_matches_unwrapped() {
        let unwrapped: ExtractedClaims =
            parse_structured(r#"{"claims": ["c1"], "no_claims": false}"#, "test");
        let fenced: ExtractedClaims = parse_structured(
            "```json\n{\"claims\": [\"c1\"], \"no_claims\": false}\n```",
            "test",
        );
        assert_eq!(unwrapped, fenced);
    }

    #[test]
    fn test_refusal_text_yields_defaults() {
        let parsed: ExtractedClaims =
            parse_structured("I cannot comply with that request.", "test");
        assert_eq!(parsed, ExtractedClaims::default());
    }

    #[test]
    fn test_unbalanced_braces_yield_defaults() {
        let parsed: ExtractedClaims = parse_structured(r#"{"claims": ["c1""#, "test");
        assert_eq!(parsed, ExtractedClaims::default());
    }

    #[test]
    fn test_type_mismatch_yields_defaults() {
        let parsed: ExtractedClaims =
            parse_structured(r#"{"claims": "not-a-list", "no_claims": false}"#, "test");
        assert_eq!(parsed, ExtractedClaims::default());
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let parsed: ExtractedClaims = parse_structured("{}", "test");
        assert_eq!(parsed, ExtractedClaims::default());
    }

    #[test]
    fn test_absent_fields_take_defaults() {
        let parsed: ExtractedClaims = parse_structured(r#"{"no_claims": true}"#, "test");
        assert!(parsed.claims.is_empty());
        assert!(parsed.no_claims);
    }

    #[test]
    fn test_instruction_contains_required_phrases_and_shape() {
        let instruction = format_instruction(&ExtractedClaims::object_schema());
        assert!(instruction.contains("Please respond ONLY"));
        assert!(instruction.contains("valid JSON"));
        assert!(instruction.contains(r#""claims": <list[str]>"#));
        assert!(instruction.contains(r#""no_claims": <bool>"#));
    }

    #[test]
    fn test_inject_appends_after_blank_line() {
        let messages = vec![
            ChatMessage::system("Do task"),
            ChatMessage::user("Need JSON"),
        ];
        let augmented =
            inject_format_instruction(&messages, &ExtractedClaims::object_schema());

        assert_eq!(augmented.len(), 2);
        assert_eq!(augmented[0], messages[0]);
        assert!(augmented[1].content.starts_with("Need JSON\n\n"));
        assert!(augmented[1].content.contains("Please respond ONLY"));
        // input untouched
        assert_eq!(messages[1].content, "Need JSON");
    }

    #[test]
    fn test_inject_into_empty_last_message() {
        let messages = vec![ChatMessage::user("")];
        let augmented =
            inject_format_instruction(&messages, &ExtractedClaims::object_schema());
        assert!(augmented[0].content.starts_with("Please respond ONLY"));
    }

    #[test]
    fn test_inject_on_empty_sequence_is_unchanged() {
        let augmented =
            inject_format_instruction(&[], &ExtractedClaims::object_schema());
        assert!(augmented.is_empty());
    }

    #[test]
    fn test_inject_only_mutates_final_message() {
        let messages = vec![
            ChatMessage::system("a"),
            ChatMessage::user("b"),
            ChatMessage::assistant("c"),
            ChatMessage::user("d"),
        ];
        let augmented =
            inject_format_instruction(&messages, &ExtractedClaims::object_schema());
        assert_eq!(&augmented[..3], &messages[..3]);
        assert_ne!(augmented[3], messages[3]);
    }
}
