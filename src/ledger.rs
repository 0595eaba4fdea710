//! Sparse per-student, per-month fee ledger
//!
//! The ledger only remembers payment states a user explicitly recorded.
//! Derived views (a single month's effective state, or a run of months for a
//! history report) are computed on read from those records plus the
//! student's enrollment month.
//!
//! All state sits behind one `RwLock`: marks and snapshot replacement take
//! the write lock, every query takes the read lock for its whole walk, so a
//! history report never observes a half-applied replacement.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{TuitionError, TuitionResult};
use crate::models::{derive_status, FeeState, FeeSubject, HistoryEntry, MonthValue, StudentId};

type StudentRecords = BTreeMap<MonthValue, FeeState>;

/// Explicit payment records keyed by student, then month
#[derive(Debug, Default)]
pub struct FeeLedger {
    records: RwLock<HashMap<StudentId, StudentRecords>>,
}

impl FeeLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from flat `(student, month, state)` records
    ///
    /// Later records for the same pair overwrite earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (StudentId, MonthValue, FeeState)>,
    {
        let mut map: HashMap<StudentId, StudentRecords> = HashMap::new();
        for (student, month, state) in records {
            map.entry(student).or_default().insert(month, state);
        }
        Self {
            records: RwLock::new(map),
        }
    }

    /// Record `month` as paid, returning the previous explicit state
    pub fn mark_paid(
        &self,
        student: StudentId,
        month: MonthValue,
    ) -> TuitionResult<Option<FeeState>> {
        self.mark(student, month, FeeState::Paid)
    }

    /// Record `month` as unpaid, returning the previous explicit state
    pub fn mark_unpaid(
        &self,
        student: StudentId,
        month: MonthValue,
    ) -> TuitionResult<Option<FeeState>> {
        self.mark(student, month, FeeState::Unpaid)
    }

    /// Set the explicit state for a (student, month) pair (last write wins)
    pub fn mark(
        &self,
        student: StudentId,
        month: MonthValue,
        state: FeeState,
    ) -> TuitionResult<Option<FeeState>> {
        let mut records = self.write()?;
        let previous = records.entry(student).or_default().insert(month, state);
        debug!(%student, %month, %state, ?previous, "fee mark recorded");
        Ok(previous)
    }

    /// The recorded state, if a user ever set one; never a default
    pub fn explicit_status(
        &self,
        student: StudentId,
        month: MonthValue,
    ) -> TuitionResult<Option<FeeState>> {
        let records = self.read()?;
        Ok(records
            .get(&student)
            .and_then(|months| months.get(&month))
            .copied())
    }

    /// Effective state for `month`: `None` before enrollment, else the
    /// explicit state or `Unpaid`
    pub fn derived_status<S: FeeSubject + ?Sized>(
        &self,
        student: &S,
        month: MonthValue,
    ) -> TuitionResult<Option<FeeState>> {
        let explicit = self.explicit_status(student.student_id(), month)?;
        Ok(derive_status(explicit, student.enrollment_month(), month))
    }

    /// Derived states for every month from `max(start, enrollment)` through
    /// `end` inclusive, ascending
    ///
    /// Empty when the student has no enrollment month or the clamped start
    /// falls after `end`.
    pub fn payment_history<S: FeeSubject + ?Sized>(
        &self,
        student: &S,
        start: MonthValue,
        end: MonthValue,
    ) -> TuitionResult<BTreeMap<MonthValue, FeeState>> {
        Ok(self
            .history_entries(student, start, end)?
            .into_iter()
            .map(|entry| (entry.month(), entry.state()))
            .collect())
    }

    /// Same walk as [`payment_history`](Self::payment_history), keeping
    /// whether each month was explicitly recorded
    pub fn history_entries<S: FeeSubject + ?Sized>(
        &self,
        student: &S,
        start: MonthValue,
        end: MonthValue,
    ) -> TuitionResult<Vec<HistoryEntry>> {
        let Some(enrolled) = student.enrollment_month() else {
            debug!(student = %student.student_id(), "no enrollment month, history empty");
            return Ok(Vec::new());
        };

        let effective_start = start.max(enrolled);
        if effective_start.is_after(&end) {
            return Ok(Vec::new());
        }

        let records = self.read()?;
        let marks = records.get(&student.student_id());

        let span = effective_start.months_until(&end) + 1;
        let mut entries = Vec::with_capacity(usize::try_from(span).unwrap_or(0));
        let mut current = effective_start;
        while current <= end {
            let explicit = marks.and_then(|m| m.get(&current)).copied();
            if let Some(state) = derive_status(explicit, Some(enrolled), current) {
                entries.push(HistoryEntry::new(current, state, explicit.is_some()));
            }
            match current.next() {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(entries)
    }

    /// Discard every record and deep-copy all records from `source`
    pub fn replace_all(&self, source: &FeeLedger) -> TuitionResult<()> {
        // Copy out first so replacing a ledger with itself cannot deadlock.
        let incoming = source.snapshot()?;
        let mut records = self.write()?;
        *records = incoming;
        debug!(students = records.len(), "fee ledger replaced");
        Ok(())
    }

    /// A copy of every explicit record
    pub fn snapshot(&self) -> TuitionResult<HashMap<StudentId, BTreeMap<MonthValue, FeeState>>> {
        Ok(self.read()?.clone())
    }

    /// A copy of one student's explicit records, ascending by month
    pub fn records_for(&self, student: StudentId) -> TuitionResult<BTreeMap<MonthValue, FeeState>> {
        Ok(self.read()?.get(&student).cloned().unwrap_or_default())
    }

    /// Number of students with at least one explicit record
    pub fn student_count(&self) -> TuitionResult<usize> {
        Ok(self.read()?.values().filter(|m| !m.is_empty()).count())
    }

    /// Total number of explicit records
    pub fn record_count(&self) -> TuitionResult<usize> {
        Ok(self.read()?.values().map(BTreeMap::len).sum())
    }

    fn read(&self) -> TuitionResult<RwLockReadGuard<'_, HashMap<StudentId, StudentRecords>>> {
        self.records
            .read()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> TuitionResult<RwLockWriteGuard<'_, HashMap<StudentId, StudentRecords>>> {
        self.records
            .write()
            .map_err(|e| TuitionError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
