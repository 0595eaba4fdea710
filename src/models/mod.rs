//! Core data models
//!
//! Calendar months, payment states, history projections and the minimal
//! student record the fee ledger reads from.

pub mod fee;
pub mod history;
pub mod ids;
pub mod month;
pub mod student;

pub use fee::{derive_status, FeeState};
pub use history::{HistoryEntry, HistorySummary};
pub use ids::StudentId;
pub use month::{MonthParseError, MonthValue};
pub use student::{FeeSubject, Student};
