//! TOML roster configuration parser.
//!
//! Loads roster files naming the course, the per-submission test count,
//! and the students to register, and validates them for common mistakes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Roster configuration: the course, its test count, and the students to
/// register.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Human-readable course name.
    pub name: String,
    /// Scores expected per submission.
    pub test_count: usize,
    /// Student identities to register, in file order.
    pub students: Vec<String>,
}

/// Intermediate TOML structure for parsing roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    roster: TomlRosterHeader,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    #[serde(default)]
    name: String,
    test_count: usize,
    #[serde(default)]
    students: Vec<String>,
}

/// Parse a single TOML file into a `RosterConfig`.
pub fn parse_roster(path: &Path) -> Result<RosterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a TOML string into a `RosterConfig` (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<RosterConfig> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    // A zero test count in a config file is a typo, not a request for the
    // store's defensive clamp.
    anyhow::ensure!(
        parsed.roster.test_count >= 1,
        "test_count must be at least 1 in {}",
        source_path.display()
    );

    Ok(RosterConfig {
        name: parsed.roster.name,
        test_count: parsed.roster.test_count,
        students: parsed.roster.students,
    })
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student name concerned (if applicable).
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster config for common issues.
pub fn validate_roster(config: &RosterConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for student in &config.students {
        if !seen.insert(student) {
            warnings.push(ValidationWarning {
                student: Some(student.clone()),
                message: format!("duplicate student name: {student}"),
            });
        }
    }

    for student in &config.students {
        if student.is_empty() {
            warnings.push(ValidationWarning {
                student: None,
                message: "empty student name".into(),
            });
        }
    }

    if config.students.is_empty() {
        warnings.push(ValidationWarning {
            student: None,
            message: "no students listed; every submission will be rejected".into(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[roster]
name = "Intro to Systems"
test_count = 4

students = ["alice", "bob", "carol"]
"#;

    #[test]
    fn parse_valid_toml() {
        let config = parse_roster_str(VALID_TOML, &PathBuf::from("roster.toml")).unwrap();
        assert_eq!(config.name, "Intro to Systems");
        assert_eq!(config.test_count, 4);
        assert_eq!(config.students, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[roster]
test_count = 1
"#;
        let config = parse_roster_str(toml, &PathBuf::from("roster.toml")).unwrap();
        assert_eq!(config.name, "");
        assert!(config.students.is_empty());
    }

    #[test]
    fn parse_zero_test_count_fails() {
        let toml = r#"
[roster]
test_count = 0
"#;
        let result = parse_roster_str(toml, &PathBuf::from("roster.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_roster_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_names() {
        let toml = r#"
[roster]
test_count = 2

students = ["alice", "alice"]
"#;
        let config = parse_roster_str(toml, &PathBuf::from("roster.toml")).unwrap();
        let warnings = validate_roster(&config);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_names_and_empty_roster() {
        let config = RosterConfig {
            name: String::new(),
            test_count: 2,
            students: vec![String::new()],
        };
        let warnings = validate_roster(&config);
        assert!(warnings.iter().any(|w| w.message.contains("empty student name")));

        let empty = RosterConfig {
            name: String::new(),
            test_count: 2,
            students: vec![],
        };
        let warnings = validate_roster(&empty);
        assert!(warnings.iter().any(|w| w.message.contains("no students")));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let config = parse_roster(&path).unwrap();
        assert_eq!(config.students.len(), 3);
    }
}
