//! Structured outputs of the claim pipeline.

use serde::{Deserialize, Serialize};
use veristruct_output::{FieldSpec, ObjectSchema, StructuredOutput};

/// One evidence snippet retrieved for a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Source URL.
    pub url: String,
    /// Page title, when the retriever reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Snippet text.
    pub text: String,
}

impl Evidence {
    /// Create an evidence snippet.
    #[must_use]
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            text: text.into(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Claims extracted from one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedClaims {
    /// The verifiable factual claims.
    #[serde(default)]
    pub claims: Vec<String>,
    /// Set when the sentence contains nothing verifiable.
    #[serde(default)]
    pub no_claims: bool,
}

impl StructuredOutput for ExtractedClaims {
    fn object_schema() -> ObjectSchema {
        ObjectSchema::new()
            .with_field(FieldSpec::string_list("claims"))
            .with_field(FieldSpec::boolean("no_claims"))
    }
}

/// Verdict label for a verified claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictLabel {
    /// The evidence supports the claim.
    Supported,
    /// The evidence contradicts the claim.
    Refuted,
    /// The evidence is not enough to decide either way.
    #[default]
    Insufficient,
}

/// A model's verdict on one claim against retrieved evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimVerdict {
    /// The verdict label.
    #[serde(default)]
    pub verdict: VerdictLabel,
    /// The model's reasoning for the verdict.
    #[serde(default)]
    pub reasoning: String,
}

impl StructuredOutput for ClaimVerdict {
    fn object_schema() -> ObjectSchema {
        ObjectSchema::new()
            .with_field(FieldSpec::string("verdict"))
            .with_field(FieldSpec::string("reasoning"))
    }
}
