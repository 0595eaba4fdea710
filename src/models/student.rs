//! Student roster entries
//!
//! Only the fields the fee ledger needs are kept here: an identifier, a
//! display name and the month fee tracking starts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::StudentId;
use super::month::MonthValue;

/// Anything the fee ledger can derive payment state for
pub trait FeeSubject {
    fn student_id(&self) -> StudentId;

    /// First month fees are owed, if known
    fn enrollment_month(&self) -> Option<MonthValue>;
}

/// A tutored student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,

    pub name: String,

    /// First month this student owes fees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<MonthValue>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student
    pub fn new(name: impl Into<String>, enrolled: Option<MonthValue>) -> Self {
        let now = Utc::now();
        Self {
            id: StudentId::new(),
            name: name.into(),
            enrolled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change (or clear) the enrollment month
    pub fn set_enrolled(&mut self, enrolled: Option<MonthValue>) {
        self.enrolled = enrolled;
        self.updated_at = Utc::now();
    }

    /// Validate the student
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(StudentValidationError::NameTooLong(self.name.len()));
        }
        Ok(())
    }
}

impl FeeSubject for Student {
    fn student_id(&self) -> StudentId {
        self.id
    }

    fn enrollment_month(&self) -> Option<MonthValue> {
        self.enrolled
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for students
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Student name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Student name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for StudentValidationError {}
