//! History report formatting

use crate::models::MonthValue;
use crate::services::HistoryReport;

/// Render a month either as "September 2025" or as its MMYY code
pub fn format_month(month: MonthValue, human: bool) -> String {
    if human {
        month.human_form()
    } else {
        month.canonical_form()
    }
}

/// Format a history report as a table with a header and totals line
pub fn format_history_report(report: &HistoryReport, human: bool) -> String {
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(&format!(
        "Fee history: {} ({})\n",
        summary.student_name(),
        summary.student_id().short()
    ));
    output.push_str(&format!(
        "Range: {} to {}   Enrolled: {}\n",
        format_month(summary.start(), human),
        format_month(summary.end(), human),
        format_month(summary.enrolled(), human)
    ));

    if report.entries.is_empty() {
        output.push_str("\nNo tracked months in this range.\n");
        return output;
    }

    let month_width = report
        .entries
        .iter()
        .map(|e| format_month(e.month(), human).len())
        .max()
        .unwrap_or(5)
        .max(5);

    output.push('\n');
    output.push_str(&format!(
        "{:<month_width$}  {:<6}  {}\n",
        "Month",
        "Status",
        "Source",
        month_width = month_width
    ));
    output.push_str(&format!(
        "{:-<month_width$}  {:-<6}  {:-<7}\n",
        "",
        "",
        "",
        month_width = month_width
    ));

    for entry in &report.entries {
        output.push_str(&format!(
            "{:<month_width$}  {:<6}  {}\n",
            format_month(entry.month(), human),
            entry.state(),
            entry.source_label(),
            month_width = month_width
        ));
    }

    output.push_str(&format!(
        "\n{} month(s): {} paid, {} unpaid\n",
        summary.month_count(),
        report.paid_count(),
        report.unpaid_count()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeeState, HistoryEntry, HistorySummary, StudentId};

    fn month(code: &str) -> MonthValue {
        MonthValue::parse(code).unwrap()
    }

    fn sample_report(entries: Vec<HistoryEntry>) -> HistoryReport {
        let summary = HistorySummary::new(
            "Alice",
            StudentId::new(),
            month("0825"),
            month("0925"),
            month("0825"),
            entries.len(),
        )
        .unwrap();
        HistoryReport { summary, entries }
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(month("0925"), true), "September 2025");
        assert_eq!(format_month(month("0925"), false), "0925");
    }

    #[test]
    fn test_format_report() {
        let report = sample_report(vec![
            HistoryEntry::new(month("0825"), FeeState::Unpaid, false),
            HistoryEntry::new(month("0925"), FeeState::Paid, true),
        ]);

        let output = format_history_report(&report, false);
        assert!(output.contains("Fee history: Alice"));
        assert!(output.contains("0825   UNPAID  default"));
        assert!(output.contains("0925   PAID    marked"));
        assert!(output.contains("2 month(s): 1 paid, 1 unpaid"));
    }

    #[test]
    fn test_format_empty_report() {
        let output = format_history_report(&sample_report(Vec::new()), true);
        assert!(output.contains("No tracked months in this range."));
        assert!(output.contains("Enrolled: August 2025"));
    }
}
