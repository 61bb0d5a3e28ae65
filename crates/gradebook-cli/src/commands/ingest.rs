//! The `gradebook ingest` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use gradebook_core::parser;
use gradebook_core::report::RosterReport;
use gradebook_core::roster::Roster;
use gradebook_ingest::{FileSource, Ingestor};

pub async fn execute(
    roster_path: PathBuf,
    submissions: Vec<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = parser::parse_roster(&roster_path)?;
    debug!("loaded roster config from {}", roster_path.display());

    for w in parser::validate_roster(&config) {
        let prefix = w
            .student
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        eprintln!("{prefix} WARNING: {}", w.message);
    }

    let roster = Arc::new(Roster::new(config.test_count));
    for student in &config.students {
        if !roster.register(student) {
            eprintln!("  skipping duplicate or empty student name: '{student}'");
        }
    }

    eprintln!(
        "Ingesting {} source(s) into '{}' ({} students, {} tests)",
        submissions.len(),
        config.name,
        roster.student_count(),
        roster.test_count(),
    );

    let sources: Vec<FileSource> = submissions.iter().map(FileSource::new).collect();
    let ingestor = Ingestor::new(Arc::clone(&roster));
    let ingest_report = ingestor.ingest(sources).await;

    for outcome in &ingest_report.sources {
        match &outcome.error {
            Some(e) => eprintln!("  {}: FAILED ({e})", outcome.source),
            None => eprintln!(
                "  {}: {} applied, {} rejected, {} skipped",
                outcome.source, outcome.applied, outcome.rejected, outcome.skipped_lines
            ),
        }
    }
    eprintln!(
        "Done: {} submission(s) applied across {} source(s) ({}ms)",
        ingest_report.total_applied(),
        ingest_report.sources.len(),
        ingest_report.duration_ms,
    );

    let roster_report = roster.report();

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&roster_report)?),
        "table" => print_roster_table(&roster_report),
        other => eprintln!("Unknown format: {other}"),
    }

    if let Some(dir) = output {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        let ingest_path = dir.join(format!("ingest-{timestamp}.json"));
        ingest_report.save_json(&ingest_path)?;
        eprintln!("Ingestion report saved to: {}", ingest_path.display());

        let roster_path = dir.join(format!("roster-{timestamp}.json"));
        roster_report.save_json(&roster_path)?;
        eprintln!("Roster report saved to: {}", roster_path.display());
    }

    Ok(())
}

fn print_roster_table(report: &RosterReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Student",
        "Score",
        "Submissions",
        "Satisfactory",
        "Full credit",
    ]);

    for s in &report.students {
        table.add_row(vec![
            Cell::new(&s.name),
            Cell::new(s.score),
            Cell::new(s.submissions),
            Cell::new(if s.satisfactory { "yes" } else { "no" }),
            Cell::new(if s.full_credit { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
    println!(
        "{} student(s), {} submission(s) total",
        report.student_count, report.total_submissions
    );
}
