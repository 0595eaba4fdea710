//! History report export
//!
//! - CSV: one row per month (spreadsheet-compatible)
//! - JSON: machine-readable report with metadata
//! - YAML: human-readable report with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_history_csv;
pub use self::json::{export_history_json, HistoryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_history_yaml;
