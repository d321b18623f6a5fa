//! Parse error types.

use thiserror::Error;

/// Errors that can occur during parsing.
///
/// Markdown itself is permissive; this only surfaces when the underlying
/// parser refuses its input outright.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is invalid.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
        }
    }
}
