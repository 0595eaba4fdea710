//! Service layer
//!
//! Business logic on top of the storage layer: validation, persistence of
//! every change and the audit trail.

pub mod fee;
pub mod student;

pub use fee::{resolve_range, FeeMark, FeeService, HistoryReport};
pub use student::StudentService;
