//! Read-only payment history projections
//!
//! `HistoryEntry` is one derived month of a student's history, and
//! `HistorySummary` describes the query that produced a run of entries.

use serde::{Deserialize, Serialize};

use super::fee::FeeState;
use super::ids::StudentId;
use super::month::MonthValue;
use crate::error::{TuitionError, TuitionResult};

/// One month of derived payment history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    month: MonthValue,
    state: FeeState,
    /// True iff the ledger held a record for this month
    explicit: bool,
}

impl HistoryEntry {
    pub fn new(month: MonthValue, state: FeeState, explicit: bool) -> Self {
        Self {
            month,
            state,
            explicit,
        }
    }

    pub fn month(&self) -> MonthValue {
        self.month
    }

    pub fn state(&self) -> FeeState {
        self.state
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// "marked" for recorded states, "default" for derived ones
    pub fn source_label(&self) -> &'static str {
        if self.explicit {
            "marked"
        } else {
            "default"
        }
    }
}

/// Metadata describing a history query
///
/// Deserialization goes through [`HistorySummary::new`], so a blank name is
/// rejected on load as well as on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHistorySummary")]
pub struct HistorySummary {
    student_name: String,
    student_id: StudentId,
    start: MonthValue,
    end: MonthValue,
    enrolled: MonthValue,
    month_count: usize,
}

#[derive(Deserialize)]
struct RawHistorySummary {
    student_name: String,
    student_id: StudentId,
    start: MonthValue,
    end: MonthValue,
    enrolled: MonthValue,
    month_count: usize,
}

impl TryFrom<RawHistorySummary> for HistorySummary {
    type Error = TuitionError;

    fn try_from(raw: RawHistorySummary) -> Result<Self, Self::Error> {
        Self::new(
            raw.student_name,
            raw.student_id,
            raw.start,
            raw.end,
            raw.enrolled,
            raw.month_count,
        )
    }
}

impl HistorySummary {
    /// Create a summary
    ///
    /// Fails with `InvalidArgument` if the display name is blank.
    pub fn new(
        student_name: impl Into<String>,
        student_id: StudentId,
        start: MonthValue,
        end: MonthValue,
        enrolled: MonthValue,
        month_count: usize,
    ) -> TuitionResult<Self> {
        let student_name = student_name.into();
        if student_name.trim().is_empty() {
            return Err(TuitionError::InvalidArgument(
                "History summary requires a student name".into(),
            ));
        }

        Ok(Self {
            student_name,
            student_id,
            start,
            end,
            enrolled,
            month_count,
        })
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    /// Requested range start, before clamping to enrollment
    pub fn start(&self) -> MonthValue {
        self.start
    }

    pub fn end(&self) -> MonthValue {
        self.end
    }

    pub fn enrolled(&self) -> MonthValue {
        self.enrolled
    }

    pub fn month_count(&self) -> usize {
        self.month_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(code: &str) -> MonthValue {
        MonthValue::parse(code).unwrap()
    }

    #[test]
    fn test_entry_source_label() {
        let marked = HistoryEntry::new(month("0925"), FeeState::Paid, true);
        let derived = HistoryEntry::new(month("1025"), FeeState::Unpaid, false);

        assert_eq!(marked.source_label(), "marked");
        assert_eq!(derived.source_label(), "default");
    }

    #[test]
    fn test_entry_equality_uses_all_fields() {
        let a = HistoryEntry::new(month("0925"), FeeState::Unpaid, true);
        let b = HistoryEntry::new(month("0925"), FeeState::Unpaid, false);
        let c = HistoryEntry::new(month("0925"), FeeState::Unpaid, true);

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_summary_accessors() {
        let id = StudentId::new();
        let summary =
            HistorySummary::new("Alice", id, month("0725"), month("1125"), month("0825"), 4)
                .unwrap();

        assert_eq!(summary.student_name(), "Alice");
        assert_eq!(summary.student_id(), id);
        assert_eq!(summary.start(), month("0725"));
        assert_eq!(summary.end(), month("1125"));
        assert_eq!(summary.enrolled(), month("0825"));
        assert_eq!(summary.month_count(), 4);
    }

    #[test]
    fn test_summary_rejects_blank_name() {
        let err = HistorySummary::new(
            "  ",
            StudentId::new(),
            month("0825"),
            month("1125"),
            month("0825"),
            0,
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_summary_deserialization_validates_name() {
        let summary = HistorySummary::new(
            "Alice",
            StudentId::new(),
            month("0825"),
            month("0925"),
            month("0825"),
            2,
        )
        .unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        let parsed: HistorySummary = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(parsed, summary);

        let mut blank = json;
        blank["student_name"] = serde_json::json!("   ");
        let err = serde_json::from_value::<HistorySummary>(blank).unwrap_err();
        assert!(err.to_string().contains("requires a student name"));
    }
}
