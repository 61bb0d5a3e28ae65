//! The concurrent ingestion coordinator.
//!
//! One worker task per source, no ordering relationship between them; all
//! workers funnel decoded records into the shared roster's synchronized
//! apply operation, and the coordinator joins every worker before
//! returning. Failure granularity is per line and per source: nothing a
//! single source does can abort its siblings or the run.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use gradebook_core::decode::{RecordDecoder, WhitespaceDecoder};
use gradebook_core::report::{IngestReport, SourceOutcome};
use gradebook_core::roster::Roster;

use crate::source::SubmissionSource;

/// Fans submission sources out to concurrent workers over one shared
/// roster.
pub struct Ingestor {
    roster: Arc<Roster>,
    decoder: Arc<dyn RecordDecoder>,
}

impl Ingestor {
    /// Ingestor using the reference whitespace decoder.
    pub fn new(roster: Arc<Roster>) -> Self {
        Self::with_decoder(roster, Arc::new(WhitespaceDecoder))
    }

    /// Ingestor with a caller-supplied decoder.
    pub fn with_decoder(roster: Arc<Roster>, decoder: Arc<dyn RecordDecoder>) -> Self {
        Self { roster, decoder }
    }

    /// Ingest every source to completion.
    ///
    /// Each source runs as its own task. A source that cannot be opened,
    /// or a line that fails to decode, is recorded and skipped without
    /// aborting anything else, so the returned report always covers every
    /// source. Duplicate sources are not deduplicated; their submissions
    /// all apply.
    pub async fn ingest<S>(&self, sources: Vec<S>) -> IngestReport
    where
        S: SubmissionSource + 'static,
    {
        let start = Instant::now();
        let run_id = Uuid::new_v4();

        let mut workers = FuturesUnordered::new();
        for source in sources {
            let roster = Arc::clone(&self.roster);
            let decoder = Arc::clone(&self.decoder);
            workers.push(tokio::spawn(ingest_source(source, roster, decoder)));
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = workers.next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                // A panicking worker is contained by its task boundary;
                // the run itself still completes.
                Err(e) => warn!(run_id = %run_id, "ingestion worker aborted: {e}"),
            }
        }
        outcomes.sort_by(|a, b| a.source.cmp(&b.source));

        IngestReport {
            id: run_id,
            created_at: Utc::now(),
            sources: outcomes,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Worker: one source end to end.
async fn ingest_source<S>(
    source: S,
    roster: Arc<Roster>,
    decoder: Arc<dyn RecordDecoder>,
) -> SourceOutcome
where
    S: SubmissionSource,
{
    let label = source.label();
    let mut outcome = SourceOutcome {
        source: label.clone(),
        applied: 0,
        rejected: 0,
        skipped_lines: 0,
        error: None,
    };

    let mut reader = match source.open().await {
        Ok(reader) => reader,
        Err(e) => {
            warn!(source = %label, "failed to open source: {e}");
            outcome.error = Some(e.to_string());
            return outcome;
        }
    };

    loop {
        let line = match reader.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(source = %label, "read failed mid-source: {e}");
                outcome.error = Some(e.to_string());
                break;
            }
        };

        let record = match decoder.decode(&line) {
            Ok(record) => record,
            Err(e) => {
                if e.is_blank() {
                    debug!(source = %label, "skipping blank line");
                } else {
                    warn!(source = %label, "skipping undecodable line: {e}");
                }
                outcome.skipped_lines += 1;
                continue;
            }
        };

        if roster.apply_submission(&record.name, &record.scores) {
            outcome.applied += 1;
        } else {
            debug!(source = %label, student = %record.name, "submission rejected");
            outcome.rejected += 1;
        }
    }

    outcome
}
