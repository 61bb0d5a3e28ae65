//! gradebook-core — Roster store, scoring rules, and record decoding.
//!
//! This crate defines the shared student roster, the submission validation
//! and best-submission rules, and the seams (record decoder, roster config
//! parser, report types) the rest of the gradebook system builds on.

pub mod decode;
pub mod error;
pub mod parser;
pub mod report;
pub mod roster;
pub mod scoring;
