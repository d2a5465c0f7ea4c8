//! # veristruct-output
//!
//! Tolerant structured-output coercion for unreliable free-text LLM replies.
//!
//! Some backends can be configured for schema-constrained output; many
//! cannot. For the latter, this crate provides the two halves of the
//! prompt-and-parse shim:
//!
//! - **Prompt augmentation**: [`inject_format_instruction`] appends a
//!   JSON-only instruction (with an example shape derived from the target
//!   schema) to the last message of a conversation.
//! - **Tolerant parsing**: [`parse_structured`] locates an embedded JSON
//!   object in free text (fenced code blocks, prose-wrapped objects),
//!   deserializes it into the target type, and falls back to schema
//!   defaults instead of erroring when the model produced nothing usable.
//!
//! ## Example
//!
//! ```rust
//! use serde::Deserialize;
//! use veristruct_output::{parse_structured, FieldSpec, ObjectSchema, StructuredOutput};
//!
//! #[derive(Debug, Default, Deserialize, PartialEq)]
//! struct ExtractedClaims {
//!     #[serde(default)]
//!     claims: Vec<String>,
//!     #[serde(default)]
//!     no_claims: bool,
//! }
//!
//! impl StructuredOutput for ExtractedClaims {
//!     fn object_schema() -> ObjectSchema {
//!         ObjectSchema::new()
//!             .with_field(FieldSpec::string_list("claims"))
//!             .with_field(FieldSpec::boolean("no_claims"))
//!     }
//! }
//!
//! let reply = "Sure!\n```json\n{\"claims\": [\"c1\"], \"no_claims\": false}\n```";
//! let parsed: ExtractedClaims = parse_structured(reply, "example");
//! assert_eq!(parsed.claims, vec!["c1".to_string()]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod coerce;
pub mod error;
pub mod parser;
pub mod schema;

// Re-exports
pub use coerce::{format_instruction, inject_format_instruction, parse_structured};
pub use error::{OutputParseError, ParseResult};
pub use parser::{extract_json_candidate, find_json_object};
pub use schema::{FieldSpec, ObjectSchema, StructuredOutput};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        extract_json_candidate, format_instruction, inject_format_instruction, parse_structured,
        FieldSpec, ObjectSchema, OutputParseError, StructuredOutput,
    };
}
