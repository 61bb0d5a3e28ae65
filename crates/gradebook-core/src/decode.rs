//! Submission record decoding.
//!
//! One raw input line becomes a student identity plus a score vector. The
//! reference grammar is whitespace-separated tokens: the first token names
//! the student, the remaining tokens are integer scores. Decoders only
//! produce the record; structural validation (length, negative entries)
//! stays with the roster store, so ingestion depends on the decoder's
//! output contract rather than any particular grammar.

use crate::error::DecodeError;

/// A decoded submission line: who submitted, and what they scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// Student identity, compared byte-for-byte by the roster.
    pub name: String,
    /// Per-test scores in submission order.
    pub scores: Vec<i32>,
}

/// Turns one raw input line into a submission record.
pub trait RecordDecoder: Send + Sync {
    fn decode(&self, line: &str) -> Result<SubmissionRecord, DecodeError>;
}

/// The reference decoder: whitespace-separated identity followed by
/// integer scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceDecoder;

impl RecordDecoder for WhitespaceDecoder {
    fn decode(&self, line: &str) -> Result<SubmissionRecord, DecodeError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(DecodeError::EmptyLine)?.to_string();
        let scores = tokens
            .map(|t| {
                t.parse::<i32>().map_err(|source| DecodeError::InvalidScore {
                    token: t.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SubmissionRecord { name, scores })
    }
}
