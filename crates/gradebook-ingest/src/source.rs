//! Submission sources: openable, line-readable inputs.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// Line reader over an opened source. Finite and not restartable.
pub struct SourceReader {
    lines: Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>,
}

impl SourceReader {
    pub fn new(reader: Box<dyn AsyncRead + Send + Unpin>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Next raw line, or `None` at end of input.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// An openable source of raw submission lines.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Label used in logs and reports (e.g. the file path).
    fn label(&self) -> String;

    /// Open the source. Failure here is recoverable per source: the
    /// coordinator records it and moves on to nothing else from this
    /// source, leaving its siblings untouched.
    async fn open(&self) -> io::Result<SourceReader>;
}

/// A submission file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SubmissionSource for FileSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    async fn open(&self) -> io::Result<SourceReader> {
        let file = File::open(&self.path).await?;
        Ok(SourceReader::new(Box::new(file)))
    }
}

/// An in-memory source, for tests and embedded callers.
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    content: String,
}

impl MemorySource {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl SubmissionSource for MemorySource {
    fn label(&self) -> String {
        self.label.clone()
    }

    async fn open(&self) -> io::Result<SourceReader> {
        let cursor = io::Cursor::new(self.content.clone().into_bytes());
        Ok(SourceReader::new(Box::new(cursor)))
    }
}
