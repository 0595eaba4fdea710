//! Student repository for JSON storage
//!
//! Manages loading and saving the student roster to students.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TuitionError;
use crate::models::{Student, StudentId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable roster file layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct StudentData {
    students: Vec<Student>,
}

/// Repository for student persistence
pub struct StudentRepository {
    path: PathBuf,
    data: RwLock<HashMap<StudentId, Student>>,
}

impl StudentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load students from disk
    pub fn load(&self) -> Result<(), TuitionError> {
        let file_data: StudentData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for student in file_data.students {
            data.insert(student.id, student);
        }

        Ok(())
    }

    /// Save students to disk, sorted by name for stable diffs
    pub fn save(&self) -> Result<(), TuitionError> {
        let students = self.get_all()?;
        write_json_atomic(&self.path, &StudentData { students })
    }

    pub fn get(&self, id: StudentId) -> Result<Option<Student>, TuitionError> {
        let data = self
            .data
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All students, sorted by name
    pub fn get_all(&self) -> Result<Vec<Student>, TuitionError> {
        let data = self
            .data
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut students: Vec<_> = data.values().cloned().collect();
        students.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });
        Ok(students)
    }

    /// Get a student by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Student>, TuitionError> {
        let data = self
            .data
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|s| s.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a student
    pub fn upsert(&self, student: Student) -> Result<(), TuitionError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(student.id, student);
        Ok(())
    }

    /// Check if a name is already taken by another student
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<StudentId>,
    ) -> Result<bool, TuitionError> {
        let data = self
            .data
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.trim().to_lowercase();
        Ok(data
            .values()
            .any(|s| s.name.to_lowercase() == name_lower && Some(s.id) != exclude_id))
    }

    pub fn count(&self) -> Result<usize, TuitionError> {
        let data = self
            .data
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthValue;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, StudentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = StudentRepository::new(temp_dir.path().join("students.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let student = Student::new("Alice", MonthValue::parse("0825").ok());
        let id = student.id;

        repo.upsert(student).unwrap();

        let found = repo.get(id).unwrap().unwrap();
        assert_eq!(found.name, "Alice");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let student = Student::new("Alice", MonthValue::parse("0825").ok());
        let id = student.id;
        repo.upsert(student).unwrap();
        repo.save().unwrap();

        let repo2 = StudentRepository::new(temp_dir.path().join("students.json"));
        repo2.load().unwrap();

        let found = repo2.get(id).unwrap().unwrap();
        assert_eq!(found.enrolled, MonthValue::parse("0825").ok());
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Student::new("Alice Tan", None)).unwrap();

        assert!(repo.get_by_name("alice tan").unwrap().is_some());
        assert!(repo.get_by_name("Bob").unwrap().is_none());
    }

    #[test]
    fn test_name_exists() {
        let (_temp_dir, repo) = create_test_repo();
        let student = Student::new("Alice", None);
        let id = student.id;
        repo.upsert(student).unwrap();

        assert!(repo.name_exists("ALICE", None).unwrap());
        assert!(!repo.name_exists("Alice", Some(id)).unwrap());
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Student::new("charlie", None)).unwrap();
        repo.upsert(Student::new("Alice", None)).unwrap();
        repo.upsert(Student::new("Bob", None)).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Alice", "Bob", "charlie"]);
    }
}
