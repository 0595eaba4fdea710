//! YAML export of a history report

use std::io::Write;

use crate::error::{TuitionError, TuitionResult};
use crate::export::json::HistoryExport;
use crate::services::HistoryReport;

/// Write the report as YAML with a short comment header
pub fn export_history_yaml<W: Write>(report: &HistoryReport, writer: &mut W) -> TuitionResult<()> {
    let export = HistoryExport::from_report(report);

    writeln!(
        writer,
        "# Fee history for {}",
        export.summary.student_name()
    )
    .map_err(|e| TuitionError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TuitionError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TuitionError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TuitionError::Export(e.to_string()))?;

    Ok(())
}
