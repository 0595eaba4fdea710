//! Fee record repository for JSON storage
//!
//! Persists the ledger's explicit records to fees.json as a flat, sorted list.
//! Loading builds a fresh ledger from the file and swaps it in wholesale with
//! [`FeeLedger::replace_all`]; nothing from the previous contents survives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TuitionError;
use crate::ledger::FeeLedger;
use crate::models::{FeeState, MonthValue, StudentId};

use super::file_io::{read_json, write_json_atomic};

/// One explicit record as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub student_id: StudentId,
    pub month: MonthValue,
    pub state: FeeState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FeeData {
    #[serde(default)]
    records: Vec<FeeRecord>,
}

/// Repository owning the in-memory ledger and its backing file
pub struct FeeRepository {
    path: PathBuf,
    ledger: FeeLedger,
}

impl FeeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ledger: FeeLedger::new(),
        }
    }

    /// The live ledger
    pub fn ledger(&self) -> &FeeLedger {
        &self.ledger
    }

    /// Load records from disk, replacing everything currently held
    pub fn load(&self) -> Result<(), TuitionError> {
        let file_data: FeeData = read_json(&self.path)?;

        let incoming = FeeLedger::from_records(
            file_data
                .records
                .into_iter()
                .map(|r| (r.student_id, r.month, r.state)),
        );

        self.ledger.replace_all(&incoming)
    }

    /// Save all explicit records to disk
    pub fn save(&self) -> Result<(), TuitionError> {
        let file_data = FeeData {
            records: self.records()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Every explicit record, sorted by student then month
    pub fn records(&self) -> Result<Vec<FeeRecord>, TuitionError> {
        let snapshot = self.ledger.snapshot()?;

        let mut records: Vec<FeeRecord> = snapshot
            .into_iter()
            .flat_map(|(student_id, months)| {
                months.into_iter().map(move |(month, state)| FeeRecord {
                    student_id,
                    month,
                    state,
                })
            })
            .collect();
        records.sort_by(|a, b| a.student_id.cmp(&b.student_id).then(a.month.cmp(&b.month)));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn month(code: &str) -> MonthValue {
        MonthValue::parse(code).unwrap()
    }

    fn create_test_repo() -> (TempDir, FeeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = FeeRepository::new(temp_dir.path().join("fees.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.ledger().record_count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let alice = StudentId::new();
        repo.ledger().mark_paid(alice, month("0925")).unwrap();
        repo.ledger().mark_unpaid(alice, month("1025")).unwrap();
        repo.save().unwrap();

        let repo2 = FeeRepository::new(temp_dir.path().join("fees.json"));
        repo2.load().unwrap();

        assert_eq!(
            repo2.ledger().explicit_status(alice, month("0925")).unwrap(),
            Some(FeeState::Paid)
        );
        assert_eq!(
            repo2.ledger().explicit_status(alice, month("1025")).unwrap(),
            Some(FeeState::Unpaid)
        );
    }

    #[test]
    fn test_load_replaces_unsaved_marks() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = StudentId::new();
        repo.ledger().mark_paid(alice, month("0925")).unwrap();
        repo.save().unwrap();

        repo.ledger().mark_paid(alice, month("1025")).unwrap();
        repo.load().unwrap();

        assert_eq!(repo.ledger().explicit_status(alice, month("1025")).unwrap(), None);
        assert_eq!(repo.ledger().record_count().unwrap(), 1);
    }

    #[test]
    fn test_file_format() {
        let (temp_dir, repo) = create_test_repo();
        let alice = StudentId::new();
        repo.ledger().mark_paid(alice, month("0925")).unwrap();
        repo.save().unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("fees.json")).unwrap();
        assert!(content.contains("\"month\": \"0925\""));
        assert!(content.contains("\"state\": \"PAID\""));
    }

    #[test]
    fn test_records_sorted() {
        let (_temp_dir, repo) = create_test_repo();
        let alice = StudentId::new();
        repo.ledger().mark_paid(alice, month("0126")).unwrap();
        repo.ledger().mark_paid(alice, month("1125")).unwrap();

        let months: Vec<_> = repo
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.month.canonical_form())
            .collect();
        assert_eq!(months, vec!["1125", "0126"]);
    }
}
