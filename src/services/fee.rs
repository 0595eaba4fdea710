//! Fee service
//!
//! Records fee payments against students in the roster and builds history
//! reports. Marks are persisted and audited immediately; queries are pure
//! reads of the in-memory ledger.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::audit::AuditEntry;
use crate::error::{TuitionError, TuitionResult};
use crate::models::{FeeState, FeeSubject, HistoryEntry, HistorySummary, MonthValue, Student};
use crate::storage::Storage;

/// Service for fee tracking
pub struct FeeService<'a> {
    storage: &'a Storage,
}

/// Result of a mark operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeMark {
    pub month: MonthValue,
    pub state: FeeState,
    /// Explicit state before this mark, if any
    pub previous: Option<FeeState>,
}

impl FeeMark {
    /// True if the mark changed the explicit record
    pub fn changed(&self) -> bool {
        self.previous != Some(self.state)
    }
}

/// A student's payment history over a month range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryReport {
    pub summary: HistorySummary,
    pub entries: Vec<HistoryEntry>,
}

impl HistoryReport {
    pub fn paid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.state().is_paid()).count()
    }

    pub fn unpaid_count(&self) -> usize {
        self.entries.len() - self.paid_count()
    }
}

impl<'a> FeeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Mark a month as paid
    pub fn mark_paid(&self, student: &Student, month: MonthValue) -> TuitionResult<FeeMark> {
        self.mark(student, month, FeeState::Paid)
    }

    /// Mark a month as unpaid
    pub fn mark_unpaid(&self, student: &Student, month: MonthValue) -> TuitionResult<FeeMark> {
        self.mark(student, month, FeeState::Unpaid)
    }

    /// Record an explicit state, persist it and audit the change
    pub fn mark(
        &self,
        student: &Student,
        month: MonthValue,
        state: FeeState,
    ) -> TuitionResult<FeeMark> {
        match student.enrolled {
            Some(enrolled) if month.is_before(&enrolled) => warn!(
                student = %student.name,
                %month,
                %enrolled,
                "marking a month before enrollment; it will not appear in history"
            ),
            None => warn!(
                student = %student.name,
                %month,
                "marking a student with no enrollment month"
            ),
            _ => {}
        }

        let previous = self.storage.ledger().mark(student.id, month, state)?;
        self.storage.fees.save()?;

        self.storage
            .audit()
            .log(&AuditEntry::fee_marked(student, month, previous, state))?;

        Ok(FeeMark {
            month,
            state,
            previous,
        })
    }

    /// The explicitly recorded state, without defaulting
    pub fn explicit_status(
        &self,
        student: &Student,
        month: MonthValue,
    ) -> TuitionResult<Option<FeeState>> {
        self.storage.ledger().explicit_status(student.id, month)
    }

    /// The effective state: `None` before enrollment, else explicit or unpaid
    pub fn status(&self, student: &Student, month: MonthValue) -> TuitionResult<Option<FeeState>> {
        self.storage.ledger().derived_status(student, month)
    }

    /// Every explicit mark for the student, including months outside
    /// enrollment that history reports skip
    pub fn recorded_marks(
        &self,
        student: &Student,
    ) -> TuitionResult<BTreeMap<MonthValue, FeeState>> {
        self.storage.ledger().records_for(student.id)
    }

    /// Build a history report from `start` through `end`
    ///
    /// Fails with `InvalidArgument` for students without an enrollment month.
    pub fn history(
        &self,
        student: &Student,
        start: MonthValue,
        end: MonthValue,
    ) -> TuitionResult<HistoryReport> {
        let enrolled = student.enrollment_month().ok_or_else(|| {
            TuitionError::InvalidArgument(format!(
                "{} has no enrollment month; set one with 'student enroll'",
                student.name
            ))
        })?;

        let entries = self.storage.ledger().history_entries(student, start, end)?;
        let summary =
            HistorySummary::new(&student.name, student.id, start, end, enrolled, entries.len())?;

        Ok(HistoryReport { summary, entries })
    }

    /// Enrolled months through `up_to` whose derived state is unpaid
    pub fn outstanding_months(
        &self,
        student: &Student,
        up_to: MonthValue,
    ) -> TuitionResult<Vec<MonthValue>> {
        let Some(enrolled) = student.enrollment_month() else {
            return Ok(Vec::new());
        };

        Ok(self
            .storage
            .ledger()
            .history_entries(student, enrolled, up_to)?
            .into_iter()
            .filter(|e| !e.state().is_paid())
            .map(|e| e.month())
            .collect())
    }
}

/// Resolve an optional `--from`/`--to` pair into a concrete range
///
/// `to` defaults to `today`; `from` defaults to the `window`-month span
/// ending at `to`, stopping at the first representable month.
pub fn resolve_range(
    from: Option<MonthValue>,
    to: Option<MonthValue>,
    today: MonthValue,
    window: u32,
) -> (MonthValue, MonthValue) {
    let end = to.unwrap_or(today);
    let start = from.unwrap_or_else(|| {
        let back = i32::try_from(window.saturating_sub(1)).unwrap_or(i32::MAX);
        end.plus_months(-back).unwrap_or(MonthValue::EARLIEST)
    });
    (start, end)
}
