//! Fee payment states
//!
//! A student's fee for a month is either paid or unpaid. The ledger only
//! stores states a user explicitly recorded; everything else is derived by
//! [`derive_status`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::MonthValue;

/// Payment state for one student in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeState {
    Paid,
    Unpaid,
}

impl FeeState {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for FeeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Paid => "PAID",
            Self::Unpaid => "UNPAID",
        })
    }
}

/// Effective payment state for `month`
///
/// Months before enrollment (or any month for a student with no enrollment
/// month) are not tracked and yield `None`. Tracked months take the explicit
/// state when one exists and default to [`FeeState::Unpaid`] otherwise.
pub fn derive_status(
    explicit: Option<FeeState>,
    enrollment: Option<MonthValue>,
    month: MonthValue,
) -> Option<FeeState> {
    let enrollment = enrollment?;
    if month.is_before(&enrollment) {
        return None;
    }
    Some(explicit.unwrap_or(FeeState::Unpaid))
}
