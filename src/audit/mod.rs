//! Audit trail
//!
//! Every student change and fee mark is appended to `audit.log` as one JSON
//! line holding the before/after values.
//!
//! - `AuditEntry`: a single record with timestamp, operation and entity info
//! - `AuditLogger`: appends entries to the log and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, FeeSnapshot, Operation};
pub use logger::AuditLogger;
