//! Parser error types for forge-parser.

use forge_core::errors::ErrorKind;

/// Errors from the strict JSON parsers.
///
/// The line-oriented parsers (ideas, quiz options, SWOT) never fail.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no JSON array found in response")]
    MissingArray,
}

impl ParseError {
    /// Every parse failure is a decode failure from the caller's point of view.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::SerializationFailure
    }
}
