//! Record decode error types.
//!
//! Defined in `gradebook-core` so ingestion workers can classify decode
//! failures (blank line vs. malformed token) without string matching.

use thiserror::Error;

/// Errors that can occur when decoding one raw submission line.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The line contained no tokens at all.
    #[error("empty line")]
    EmptyLine,

    /// A score token was not a valid integer.
    #[error("invalid score token '{token}': {source}")]
    InvalidScore {
        token: String,
        source: std::num::ParseIntError,
    },
}

impl DecodeError {
    /// Returns `true` if the line was blank rather than malformed.
    pub fn is_blank(&self) -> bool {
        matches!(self, DecodeError::EmptyLine)
    }
}
