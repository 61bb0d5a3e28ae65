//! Ingestion and roster report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of ingesting one source end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOutcome {
    /// Label of the source (e.g. its file path).
    pub source: String,
    /// Submissions the roster accepted.
    pub applied: u64,
    /// Decoded lines the roster rejected (bad shape or unknown student).
    pub rejected: u64,
    /// Lines that failed to decode and were skipped.
    pub skipped_lines: u64,
    /// I/O failure, if the source could not be opened or read to the end.
    pub error: Option<String>,
}

/// A complete ingestion run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the run started.
    pub created_at: DateTime<Utc>,
    /// Per-source outcomes, sorted by source label.
    pub sources: Vec<SourceOutcome>,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl IngestReport {
    /// Submissions applied across all sources.
    pub fn total_applied(&self) -> u64 {
        self.sources.iter().map(|s| s.applied).sum()
    }

    /// Number of sources that hit an I/O failure.
    pub fn failed_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.error.is_some()).count()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

/// One student's row in a roster report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    /// Total score of the retained submission; zero before the first one.
    pub score: i64,
    /// Valid submissions ever applied, including non-improving ones.
    pub submissions: u64,
    pub satisfactory: bool,
    pub full_credit: bool,
}

/// A consistent snapshot of the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// Tests per submission this roster is configured for.
    pub test_count: usize,
    pub student_count: usize,
    /// Sum of per-student submission counts.
    pub total_submissions: u64,
    /// Per-student rows, sorted by name.
    pub students: Vec<StudentSummary>,
}

impl RosterReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        save_json(self, path)
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report from {}", path.display()))?;
    serde_json::from_str(&content).context("failed to parse report JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ingest_report() -> IngestReport {
        IngestReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            sources: vec![
                SourceOutcome {
                    source: "day1.txt".into(),
                    applied: 3,
                    rejected: 1,
                    skipped_lines: 0,
                    error: None,
                },
                SourceOutcome {
                    source: "day2.txt".into(),
                    applied: 0,
                    rejected: 0,
                    skipped_lines: 0,
                    error: Some("No such file or directory".into()),
                },
            ],
            duration_ms: 12,
        }
    }

    #[test]
    fn ingest_report_totals() {
        let report = make_ingest_report();
        assert_eq!(report.total_applied(), 3);
        assert_eq!(report.failed_sources(), 1);
    }

    #[test]
    fn ingest_report_json_roundtrip() {
        let report = make_ingest_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingest.json");

        report.save_json(&path).unwrap();
        let loaded = IngestReport::load_json(&path).unwrap();

        assert_eq!(loaded.sources.len(), 2);
        assert_eq!(loaded.total_applied(), 3);
        assert_eq!(loaded.sources[1].error.as_deref(), Some("No such file or directory"));
    }

    #[test]
    fn roster_report_json_roundtrip() {
        let report = RosterReport {
            test_count: 4,
            student_count: 1,
            total_submissions: 2,
            students: vec![StudentSummary {
                name: "alice".into(),
                score: 21,
                submissions: 2,
                satisfactory: true,
                full_credit: false,
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        report.save_json(&path).unwrap();
        let loaded = RosterReport::load_json(&path).unwrap();

        assert_eq!(loaded.students[0].name, "alice");
        assert_eq!(loaded.students[0].score, 21);
        assert!(loaded.students[0].satisfactory);
    }
}
