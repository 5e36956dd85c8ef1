//! Parse error types.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text could not be parsed.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// The source is too large for 32-bit line and column numbers.
    #[error("Source too large: {0} bytes")]
    TooLarge(usize),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource(message.into())
    }

    /// Fails if `source` is longer than `u32::MAX` bytes.
    pub(crate) fn check_size(source: &str) -> Result<(), Self> {
        if u32::try_from(source.len()).is_err() {
            return Err(Self::TooLarge(source.len()));
        }
        Ok(())
    }
}
