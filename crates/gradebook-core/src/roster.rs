//! The shared student roster.
//!
//! A concurrency-safe map from student identity to academic record. All
//! mutation goes through [`Roster::register`] and
//! [`Roster::apply_submission`]; queries never observe a record's retained
//! vector apart from its submission count.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::report::{RosterReport, StudentSummary};
use crate::scoring;

/// Per-student academic record. Owned exclusively by the roster.
#[derive(Debug, Default)]
struct StudentRecord {
    /// The one submission currently counted toward the score.
    retained: Option<Vec<i32>>,
    /// Valid submissions ever applied, including non-improving ones.
    submissions: u64,
}

/// Concurrency-safe roster keyed by student identity.
///
/// One reader-writer lock guards the whole map: writers hold it across the
/// full read-compare-write sequence for an identity, so overlapping
/// submissions for the same student cannot lose updates or replace the
/// retained vector against a stale total. Queries share the read lock.
pub struct Roster {
    test_count: usize,
    students: RwLock<HashMap<String, StudentRecord>>,
}

impl Roster {
    /// Create a roster expecting `test_count` scores per submission.
    /// A count below 1 is clamped to 1.
    pub fn new(test_count: usize) -> Self {
        Self {
            test_count: test_count.max(1),
            students: RwLock::new(HashMap::new()),
        }
    }

    /// Tests per submission this roster is configured for.
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Register a new student.
    ///
    /// Returns `false` on an empty name or one already registered; the
    /// existing record is never touched. Once registered, a student is
    /// never removed.
    pub fn register(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self.students.write().entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(StudentRecord::default());
                true
            }
        }
    }

    /// Apply one submission for `name`.
    ///
    /// Structurally invalid vectors (wrong length, negative entry) and
    /// empty or unregistered names are rejected without touching any
    /// state. Every other submission counts: the retained vector is
    /// replaced when the newcomer's total is at least the current one
    /// (ties prefer the newcomer), and the submission count increments
    /// either way. The compare, the conditional replace, and the
    /// increment happen under a single write-lock acquisition.
    pub fn apply_submission(&self, name: &str, scores: &[i32]) -> bool {
        if name.is_empty() || !scoring::is_valid_submission(scores, self.test_count) {
            return false;
        }

        let mut students = self.students.write();
        let Some(record) = students.get_mut(name) else {
            return false;
        };

        let replace = match record.retained.as_deref() {
            Some(retained) => scoring::should_replace(
                scoring::vector_total(retained),
                scoring::vector_total(scores),
            ),
            None => true,
        };
        if replace {
            record.retained = Some(scores.to_vec());
        }
        record.submissions += 1;
        true
    }

    /// Total score of the retained submission, or `Some(0)` for a student
    /// who has not submitted yet. `None` for an unknown name.
    pub fn score(&self, name: &str) -> Option<i64> {
        let students = self.students.read();
        let record = students.get(name)?;
        Some(record.retained.as_deref().map_or(0, scoring::vector_total))
    }

    /// Number of valid submissions ever applied for `name`, or `None` for
    /// an unknown name.
    pub fn submission_count(&self, name: &str) -> Option<u64> {
        self.students.read().get(name).map(|r| r.submissions)
    }

    /// Sum of submission counts over all registered students.
    pub fn total_submission_count(&self) -> u64 {
        self.students.read().values().map(|r| r.submissions).sum()
    }

    /// Number of registered students.
    pub fn student_count(&self) -> usize {
        self.students.read().len()
    }

    /// Whether the retained submission passes at least half the tests.
    /// Unknown names and students with no submission yet are not
    /// satisfactory rather than an error.
    pub fn satisfactory(&self, name: &str) -> bool {
        self.students
            .read()
            .get(name)
            .and_then(|r| r.retained.as_deref())
            .is_some_and(|scores| scoring::is_satisfactory(scores, self.test_count))
    }

    /// Whether the retained submission scored on every test. Unknown names
    /// and students with no submission yet get no credit.
    pub fn got_full_credit(&self, name: &str) -> bool {
        self.students
            .read()
            .get(name)
            .and_then(|r| r.retained.as_deref())
            .is_some_and(scoring::is_full_credit)
    }

    /// A consistent snapshot of every record, sorted by name.
    pub fn report(&self) -> RosterReport {
        let students = self.students.read();
        let mut rows: Vec<StudentSummary> = students
            .iter()
            .map(|(name, record)| {
                let retained = record.retained.as_deref();
                StudentSummary {
                    name: name.clone(),
                    score: retained.map_or(0, scoring::vector_total),
                    submissions: record.submissions,
                    satisfactory: retained
                        .is_some_and(|scores| scoring::is_satisfactory(scores, self.test_count)),
                    full_credit: retained.is_some_and(scoring::is_full_credit),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        RosterReport {
            test_count: self.test_count,
            student_count: rows.len(),
            total_submissions: students.values().map(|r| r.submissions).sum(),
            students: rows,
        }
    }
}
