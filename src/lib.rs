//! Tuition - monthly fee tracking for private tutors
//!
//! Fees are tracked per student per calendar month. Only explicit marks are
//! stored; every enrolled month without one is treated as unpaid, and months
//! before enrollment are not tracked at all.
//!
//! # Architecture
//!
//! - `models`: month values, fee states, students and history projections
//! - `ledger`: the in-memory sparse fee ledger
//! - `storage`: JSON file storage and the audit trail
//! - `services`: business logic over storage
//! - `cli`, `display`, `export`: the command-line surface
//! - `config`: path and settings management
//!
//! # Example
//!
//! ```rust
//! use tuition::{FeeLedger, FeeState, MonthValue, Student};
//!
//! let student = Student::new("Alice", MonthValue::parse("0825").ok());
//! let ledger = FeeLedger::new();
//! ledger.mark_paid(student.id, MonthValue::parse("0925").unwrap()).unwrap();
//!
//! let history = ledger
//!     .payment_history(&student, MonthValue::parse("0625").unwrap(), MonthValue::parse("1125").unwrap())
//!     .unwrap();
//! assert_eq!(history.len(), 4);
//! assert_eq!(history[&MonthValue::parse("0925").unwrap()], FeeState::Paid);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TuitionError, TuitionResult};
pub use ledger::FeeLedger;
pub use models::{FeeState, HistoryEntry, HistorySummary, MonthValue, Student, StudentId};
