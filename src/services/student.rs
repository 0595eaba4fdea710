//! Student service
//!
//! Roster management: the fee ledger only needs an id, a name and an
//! enrollment month, so that is all this service maintains.

use crate::audit::AuditEntry;
use crate::error::{TuitionError, TuitionResult};
use crate::models::{MonthValue, Student, StudentId};
use crate::storage::Storage;

/// Service for student management
pub struct StudentService<'a> {
    storage: &'a Storage,
}

impl<'a> StudentService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a student to the roster
    pub fn add(&self, name: &str, enrolled: Option<MonthValue>) -> TuitionResult<Student> {
        let name = name.trim();

        if self.storage.students.name_exists(name, None)? {
            return Err(TuitionError::Duplicate {
                entity_type: "Student",
                identifier: name.to_string(),
            });
        }

        let student = Student::new(name, enrolled);
        student
            .validate()
            .map_err(|e| TuitionError::InvalidArgument(e.to_string()))?;

        self.storage.students.upsert(student.clone())?;
        self.storage.students.save()?;

        self.storage
            .audit()
            .log(&AuditEntry::student_added(&student))?;

        Ok(student)
    }

    /// Find a student by name, full id or short id (`stu-xxxxxxxx`)
    pub fn find(&self, identifier: &str) -> TuitionResult<Option<Student>> {
        let identifier = identifier.trim();

        if let Some(student) = self.storage.students.get_by_name(identifier)? {
            return Ok(Some(student));
        }

        if let Ok(id) = identifier.parse::<StudentId>() {
            return self.storage.students.get(id);
        }

        let lower = identifier.to_lowercase();
        if lower.starts_with("stu-") {
            return Ok(self
                .storage
                .students
                .get_all()?
                .into_iter()
                .find(|s| s.id.short() == lower));
        }

        Ok(None)
    }

    /// Like [`find`](Self::find), but a missing student is an error
    pub fn require(&self, identifier: &str) -> TuitionResult<Student> {
        self.find(identifier)?
            .ok_or_else(|| TuitionError::student_not_found(identifier))
    }

    /// All students, sorted by name
    pub fn list(&self) -> TuitionResult<Vec<Student>> {
        self.storage.students.get_all()
    }

    /// Set or clear a student's enrollment month
    pub fn set_enrollment(
        &self,
        identifier: &str,
        enrolled: Option<MonthValue>,
    ) -> TuitionResult<Student> {
        let mut student = self.require(identifier)?;
        let before = student.clone();

        student.set_enrolled(enrolled);

        self.storage.students.upsert(student.clone())?;
        self.storage.students.save()?;

        self.storage
            .audit()
            .log(&AuditEntry::enrollment_changed(&before, &student))?;

        Ok(student)
    }
}
