//! Error types for message normalization.

use thiserror::Error;

/// Error raised when normalization meets a payload it cannot flatten.
///
/// Unlike a garbled model reply, this indicates a caller bug, so it is
/// surfaced immediately instead of being downgraded to an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A message-like value of an unsupported shape was passed in.
    #[error("unsupported message payload: {kind}")]
    UnsupportedPayload {
        /// Description of the offending payload shape.
        kind: String,
    },
}

impl NormalizeError {
    /// Create an unsupported-payload error.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedPayload { kind: kind.into() }
    }
}
