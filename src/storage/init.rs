//! Storage initialization
//!
//! Handles first-run setup: directories, an empty roster and an empty fee
//! file, so later commands find well-formed JSON.

use crate::config::paths::TuitionPaths;
use crate::error::TuitionError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &TuitionPaths) -> Result<(), TuitionError> {
    paths.ensure_directories()?;

    if !paths.students_file().exists() {
        write_json_atomic(paths.students_file(), &serde_json::json!({ "students": [] }))?;
    }

    if !paths.fees_file().exists() {
        write_json_atomic(paths.fees_file(), &serde_json::json!({ "records": [] }))?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TuitionPaths) -> bool {
    !paths.students_file().exists() || !paths.fees_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FeeRepository, StudentRepository};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TuitionPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let students = StudentRepository::new(paths.students_file());
        students.load().unwrap();
        assert_eq!(students.count().unwrap(), 0);

        let fees = FeeRepository::new(paths.fees_file());
        fees.load().unwrap();
        assert_eq!(fees.ledger().record_count().unwrap(), 0);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TuitionPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        std::fs::write(paths.fees_file(), r#"{"records": [1]}"#).unwrap();
        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.fees_file()).unwrap();
        assert!(content.contains("[1]"));
    }
}
