//! The two-variant structured-output backend.
//!
//! Some endpoints enforce a caller-supplied schema natively; the rest need
//! the prompt-and-parse shim. The variant is chosen once, from the model
//! profile, so call sites never branch on backend identity: both variants
//! expose the same `generate_structured` contract and both run replies
//! through the same tolerant parser.

use veristruct_core::{ChatMessage, ModelSettings};
use veristruct_output::{inject_format_instruction, parse_structured, StructuredOutput};

use crate::error::ModelError;
use crate::model::{BoxedChatModel, GenerateOptions, ResponseFormat};

/// A chat model paired with its structured-output strategy.
#[derive(Clone)]
pub enum StructuredBackend {
    /// The endpoint enforces the schema itself.
    Native(BoxedChatModel),
    /// The endpoint is prompted for JSON and its reply parsed tolerantly.
    PromptCoerced(BoxedChatModel),
}

impl StructuredBackend {
    /// Select the strategy for a model based on its profile.
    #[must_use]
    pub fn for_model(model: BoxedChatModel) -> Self {
        if model.profile().supports_native_structured_output {
            Self::Native(model)
        } else {
            Self::PromptCoerced(model)
        }
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &BoxedChatModel {
        match self {
            Self::Native(model) | Self::PromptCoerced(model) => model,
        }
    }

    /// Generate a reply coerced into the target type.
    ///
    /// Transport and API failures surface as `Err`; a reply that merely
    /// fails to contain usable JSON degrades to the schema's defaults and
    /// is still `Ok`.
    pub async fn generate_structured<T: StructuredOutput>(
        &self,
        messages: &[ChatMessage],
        settings: &ModelSettings,
    ) -> Result<T, ModelError> {
        let schema = T::object_schema();

        let reply = match self {
            Self::Native(model) => {
                let options = GenerateOptions::new()
                    .with_response_format(ResponseFormat::JsonSchema(schema.to_json_schema()));
                model.generate(messages, settings, &options).await?
            }
            Self::PromptCoerced(model) => {
                let augmented = inject_format_instruction(messages, &schema);
                let mut options = GenerateOptions::new();
                if model.profile().supports_json_mode {
                    options = options.with_response_format(ResponseFormat::JsonObject);
                }
                model.generate(&augmented, settings, &options).await?
            }
        };

        let identifier = self.model().identifier();
        Ok(parse_structured(&reply.text_content(), &identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockModel;
    use crate::profile::ModelProfile;
    use serde::Deserialize;
    use std::sync::Arc;
    use veristruct_output::{FieldSpec, ObjectSchema};

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
    fn test_variant_selection_follows_profile() {
        let native = Arc::new(MockModel::new("n").with_profile(ModelProfile::openai()));
        assert!(matches!(
            StructuredBackend::for_model(native),
            StructuredBackend::Native(_)
        ));

        let coerced = Arc::new(MockModel::new("c").with_profile(ModelProfile::deepseek()));
        assert!(matches!(
            StructuredBackend::for_model(coerced),
            StructuredBackend::PromptCoerced(_)
        ));
    }

    #[tokio::test]
    async fn test_prompt_coerced_injects_instruction_and_parses() {
        let mock = MockModel::new("deepseek-chat")
            .with_profile(ModelProfile::deepseek())
            .with_text_reply(r#"{"claims": ["c1"], "no_claims": false}"#);
        let backend = StructuredBackend::for_model(Arc::new(mock.clone()));

        let result: ExtractedClaims = backend
            .generate_structured(&[ChatMessage::user("List claims")], &ModelSettings::new())
            .await
            .unwrap();
        assert_eq!(result.claims, vec!["c1".to_string()]);

        let request = mock.last_request().unwrap();
        let last = request.messages.last().unwrap();
        assert!(last.content.starts_with("List claims\n\n"));
        assert!(last.content.contains("Please respond ONLY"));
        // DeepSeek profile also asks for provider JSON mode.
        assert_eq!(request.options.response_format, Some(ResponseFormat::JsonObject));
    }

    #[tokio::test]
    async fn test_prompt_coerced_without_json_mode_sets_no_format() {
        let mock = MockModel::new("plain").with_text_reply("{}");
        let backend = StructuredBackend::for_model(Arc::new(mock.clone()));

        let _: ExtractedClaims = backend
            .generate_structured(&[ChatMessage::user("go")], &ModelSettings::new())
            .await
            .unwrap();
        assert_eq!(mock.last_request().unwrap().options.response_format, None);
    }

    #[tokio::test]
    async fn test_native_passes_schema_untouched_prompt() {
        let mock = MockModel::new("gpt-4o-mini")
            .with_profile(ModelProfile::openai())
            .with_text_reply(r#"{"claims": [], "no_claims": true}"#);
        let backend = StructuredBackend::for_model(Arc::new(mock.clone()));

        let result: ExtractedClaims = backend
            .generate_structured(&[ChatMessage::user("List claims")], &ModelSettings::new())
            .await
            .unwrap();
        assert!(result.no_claims);

        let request = mock.last_request().unwrap();
        // Prompt untouched, schema constraint passed instead.
        assert_eq!(request.messages[0].content, "List claims");
        assert!(matches!(
            request.options.response_format,
            Some(ResponseFormat::JsonSchema(_))
        ));
    }

    #[tokio::test]
    async fn test_multi_part_reply_content_is_coerced() {
        use veristruct_core::{ContentPart, ReplyContent};

        let mock = MockModel::new("m").with_content_reply(ReplyContent::Parts(vec![
            ContentPart::text(r#"{"claims": ["c1"],"#),
            ContentPart::Other(serde_json::json!({"type": "annotation"})),
            ContentPart::text(r#" "no_claims": false}"#),
        ]));
        let backend = StructuredBackend::for_model(Arc::new(mock));

        let result: ExtractedClaims = backend
            .generate_structured(&[ChatMessage::user("go")], &ModelSettings::new())
            .await
            .unwrap();
        assert_eq!(result.claims, vec!["c1".to_string()]);
    }

    #[tokio::test]
    async fn test_unusable_reply_degrades_to_defaults() {
        let mock = MockModel::new("m").with_text_reply("I cannot comply with that request.");
        let backend = StructuredBackend::for_model(Arc::new(mock));

        let result: ExtractedClaims = backend
            .generate_structured(&[ChatMessage::user("go")], &ModelSettings::new())
            .await
            .unwrap();
        assert_eq!(result, ExtractedClaims::default());
    }

    #[tokio::test]
    async fn test_transport_error_surfaces_as_err() {
        let mock = MockModel::new("m").with_error(ModelError::Connection("down".into()));
        let backend = StructuredBackend::for_model(Arc::new(mock));

        let result: Result<ExtractedClaims, _> = backend
            .generate_structured(&[ChatMessage::user("go")], &ModelSettings::new())
            .await;
        assert!(result.is_err());
    }
}
