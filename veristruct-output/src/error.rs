//! Error types for output parsing.

use thiserror::Error;

/// Error during output parsing.
///
/// Note that the tolerant entry point ([`crate::parse_structured`]) never
/// surfaces these to callers; they exist for the lower-level extraction
/// functions and for log detail.
#[derive(Debug, Error)]
pub enum OutputParseError {
    /// Failed to parse JSON.
    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// No JSON object found in the output.
    #[error("no JSON object found in output")]
    NoJsonFound,
}

/// Result type for output parsing.
pub type ParseResult<T> = Result<T, OutputParseError>;
