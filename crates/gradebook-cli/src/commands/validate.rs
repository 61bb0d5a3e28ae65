//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let config = gradebook_core::parser::parse_roster(&roster_path)?;

    println!(
        "Roster: {} ({} students, {} tests)",
        config.name,
        config.students.len(),
        config.test_count
    );

    let warnings = gradebook_core::parser::validate_roster(&config);
    for w in &warnings {
        let prefix = w
            .student
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Roster valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
