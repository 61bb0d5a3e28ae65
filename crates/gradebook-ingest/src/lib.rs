//! gradebook-ingest — Concurrent submission ingestion.
//!
//! Fans submission sources out to one worker task each, funnels decoded
//! records into the shared roster, and joins every worker before
//! reporting.

pub mod coordinator;
pub mod source;

pub use coordinator::Ingestor;
pub use source::{FileSource, MemorySource, SourceReader, SubmissionSource};
