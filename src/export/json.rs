//! JSON export of a history report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TuitionError, TuitionResult};
use crate::models::{HistoryEntry, HistorySummary};
use crate::services::HistoryReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// A history report plus export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub summary: HistorySummary,
    pub months: Vec<HistoryEntry>,
}

impl HistoryExport {
    pub fn from_report(report: &HistoryReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: report.summary.clone(),
            months: report.entries.clone(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_history_json<W: Write>(report: &HistoryReport, writer: &mut W) -> TuitionResult<()> {
    let export = HistoryExport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TuitionError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TuitionError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeeState, MonthValue, StudentId};

    #[test]
    fn test_export_json_round_trip() {
        let aug = MonthValue::parse("0825").unwrap();
        let sep = MonthValue::parse("0925").unwrap();
        let summary = HistorySummary::new("Alice", StudentId::new(), aug, sep, aug, 2).unwrap();
        let report = HistoryReport {
            summary: summary.clone(),
            entries: vec![
                HistoryEntry::new(aug, FeeState::Unpaid, false),
                HistoryEntry::new(sep, FeeState::Paid, true),
            ],
        };

        let mut buffer = Vec::new();
        export_history_json(&report, &mut buffer).unwrap();

        let parsed: HistoryExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.summary, summary);
        assert_eq!(parsed.months, report.entries);
    }
}
