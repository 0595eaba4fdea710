//! Audit records
//!
//! Roster records carry the whole student before and after the change. Fee
//! records carry a [`FeeSnapshot`] of the month and state, so a fee line in
//! the log reads like the ledger entry it touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{FeeState, MonthValue, Student};

/// Kind of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Student added, or a month marked for the first time
    Create,
    /// Enrollment changed, or an existing mark overwritten
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Student,
    FeeRecord,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EntityType::Student => "Student",
            EntityType::FeeRecord => "FeeRecord",
        })
    }
}

/// Fee payload stored in `before`/`after`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSnapshot {
    pub month: MonthValue,
    pub state: FeeState,
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Student id; fee records use `<student id>:<MMYY>`
    pub entity_id: String,

    /// Student name at the time of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// One-line description, e.g. `0925: PAID -> UNPAID`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// A student joined the roster
    pub fn student_added(student: &Student) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Student,
            entity_id: student.id.to_string(),
            entity_name: Some(student.name.clone()),
            before: None,
            after: serde_json::to_value(student).ok(),
            diff_summary: Some(format!("enrolled: {}", describe_month(student.enrolled))),
        }
    }

    /// A student's enrollment month was set or cleared
    pub fn enrollment_changed(before: &Student, after: &Student) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type: EntityType::Student,
            entity_id: after.id.to_string(),
            entity_name: Some(after.name.clone()),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: Some(format!(
                "enrolled: {} -> {}",
                describe_month(before.enrolled),
                describe_month(after.enrolled)
            )),
        }
    }

    /// A month was marked; `previous` is the explicit state it replaced
    pub fn fee_marked(
        student: &Student,
        month: MonthValue,
        previous: Option<FeeState>,
        state: FeeState,
    ) -> Self {
        let snapshot = |state: FeeState| serde_json::to_value(FeeSnapshot { month, state }).ok();

        Self {
            timestamp: Utc::now(),
            operation: if previous.is_some() {
                Operation::Update
            } else {
                Operation::Create
            },
            entity_type: EntityType::FeeRecord,
            entity_id: format!("{}:{}", student.id, month.canonical_form()),
            entity_name: Some(student.name.clone()),
            before: previous.and_then(snapshot),
            after: snapshot(state),
            diff_summary: Some(format!(
                "{}: {} -> {}",
                month.canonical_form(),
                previous.map_or_else(|| "none".to_string(), |p| p.to_string()),
                state
            )),
        }
    }

    /// Two-line rendering for `tuition audit`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

fn describe_month(month: Option<MonthValue>) -> String {
    month.map_or_else(|| "none".to_string(), |m| m.canonical_form())
}
