//! CSV export of a history report

use std::io::Write;

use crate::error::{TuitionError, TuitionResult};
use crate::services::HistoryReport;

/// Write one row per month: code, name, status and source
pub fn export_history_csv<W: Write>(report: &HistoryReport, writer: W) -> TuitionResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "Month Name", "Status", "Source"])
        .map_err(|e| TuitionError::Export(e.to_string()))?;

    for entry in &report.entries {
        csv_writer
            .write_record([
                entry.month().canonical_form(),
                entry.month().human_form(),
                entry.state().to_string(),
                entry.source_label().to_string(),
            ])
            .map_err(|e| TuitionError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TuitionError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeeState, HistoryEntry, HistorySummary, MonthValue, StudentId};

    #[test]
    fn test_export_csv() {
        let sep = MonthValue::parse("0925").unwrap();
        let summary = HistorySummary::new("Alice", StudentId::new(), sep, sep, sep, 1).unwrap();
        let report = HistoryReport {
            summary,
            entries: vec![HistoryEntry::new(sep, FeeState::Paid, true)],
        };

        let mut buffer = Vec::new();
        export_history_csv(&report, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Month,Month Name,Status,Source");
        assert_eq!(lines[1], "0925,September 2025,PAID,marked");
    }
}
