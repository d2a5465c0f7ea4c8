//! Scripted model for offline tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use veristruct_core::{ChatMessage, ModelReply, ModelSettings, ReplyContent};

use crate::error::ModelError;
use crate::model::{ChatModel, GenerateOptions};
use crate::profile::ModelProfile;

/// A mock model with a queue of scripted outcomes.
///
/// Outcomes are returned in order; once the queue is exhausted the mock
/// answers with a fixed placeholder reply. Every request is recorded so
/// tests can assert on what actually went over the wire.
///
/// # Example
///
/// ```rust
/// use veristruct_models::MockModel;
///
/// let model = MockModel::new("test")
///     .with_text_reply("{\"no_claims\": true}")
///     .with_text_reply("second reply");
/// ```
#[derive(Debug, Clone)]
pub struct MockModel {
    name: String,
    profile: ModelProfile,
    outcomes: Arc<Mutex<Vec<Result<ModelReply, ModelError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// One recorded generation request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// The messages sent to the model.
    pub messages: Vec<ChatMessage>,
    /// The per-request options.
    pub options: GenerateOptions,
}

impl MockModel {
    /// Create a new mock model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile: ModelProfile::plain_text(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply.
    #[must_use]
    pub fn with_reply(self, reply: ModelReply) -> Self {
        self.outcomes.lock().push(Ok(reply));
        self
    }

    /// Queue a plain-text reply.
    #[must_use]
    pub fn with_text_reply(self, text: impl Into<String>) -> Self {
        let name = self.name.clone();
        self.with_reply(ModelReply::text(text).with_model_name(name))
    }

    /// Queue a reply with non-text content.
    #[must_use]
    pub fn with_content_reply(self, content: ReplyContent) -> Self {
        let reply = ModelReply {
            content,
            ..ModelReply::text("")
        };
        self.with_reply(reply)
    }

    /// Queue an error outcome.
    #[must_use]
    pub fn with_error(self, error: ModelError) -> Self {
        self.outcomes.lock().push(Err(error));
        self
    }

    /// Set a custom profile.
    #[must_use]
    pub fn with_profile(mut self, profile: ModelProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Get recorded requests.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The last recorded request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> &str {
        "mock"
    }

    fn profile(&self) -> &ModelProfile {
        &self.profile
    }

    async fn generate(
        &self,
        messages: &[ChatMessage],
        _settings: &ModelSettings,
        options: &GenerateOptions,
    ) -> Result<ModelReply, ModelError> {
        self.requests.lock().push(RecordedRequest {
            messages: messages.to_vec(),
            options: options.clone(),
        });

        let mut outcomes = self.outcomes.lock();
        if outcomes.is_empty() {
            Ok(ModelReply::text("mock reply").with_model_name(self.name.clone()))
        } else {
            outcomes.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order_then_placeholder() {
        let model = MockModel::new("m").with_text_reply("one").with_text_reply("two");
        let settings = ModelSettings::new();
        let options = GenerateOptions::new();

        let msgs = [ChatMessage::user("q")];
        assert_eq!(
            model.generate(&msgs, &settings, &options).await.unwrap().text_content(),
            "one"
        );
        assert_eq!(
            model.generate(&msgs, &settings, &options).await.unwrap().text_content(),
            "two"
        );
        assert_eq!(
            model.generate(&msgs, &settings, &options).await.unwrap().text_content(),
            "mock reply"
        );
    }

    #[tokio::test]
    async fn test_error_outcome_and_recording() {
        let model = MockModel::new("m").with_error(ModelError::Connection("down".into()));
        let result = model
            .generate(
                &[ChatMessage::user("q")],
                &ModelSettings::new(),
                &GenerateOptions::new(),
            )
            .await;
        assert!(result.is_err());
        assert_eq!(model.recorded_requests().len(), 1);
        assert_eq!(model.last_request().unwrap().messages[0].content, "q");
    }
}
