//! Fee CLI commands
//!
//! Marking months, point lookups and history reports.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::parse_month_arg;
use crate::config::settings::Settings;
use crate::display::{format_history_report, format_month};
use crate::error::{TuitionError, TuitionResult};
use crate::export::{export_history_csv, export_history_json, export_history_yaml};
use crate::models::MonthValue;
use crate::services::{resolve_range, FeeService, HistoryReport, StudentService};
use crate::storage::Storage;

/// Output format for history reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryFormat {
    /// Aligned table for the terminal
    Text,
    /// One row per month
    Csv,
    /// Report with metadata
    Json,
    /// Report with metadata, human-readable
    Yaml,
}

/// Fee subcommands
#[derive(Subcommand)]
pub enum FeeCommands {
    /// Mark a month as paid
    Paid {
        /// Student name or ID
        student: String,
        /// Month (MMYY)
        month: String,
    },
    /// Mark a month as unpaid
    Unpaid {
        /// Student name or ID
        student: String,
        /// Month (MMYY)
        month: String,
    },
    /// Show the fee status of one month
    Status {
        /// Student name or ID
        student: String,
        /// Month (MMYY)
        month: String,
    },
    /// Show payment history over a range of months
    History {
        /// Student name or ID
        student: String,
        /// First month (MMYY); defaults to the configured window before --to
        #[arg(short, long)]
        from: Option<String>,
        /// Last month (MMYY); defaults to the current month
        #[arg(short, long)]
        to: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: HistoryFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Show MMYY codes instead of month names
        #[arg(long)]
        codes: bool,
    },
    /// List every explicitly recorded mark for a student
    Marks {
        /// Student name or ID
        student: String,
    },
    /// List enrolled months that are still unpaid
    Outstanding {
        /// Student name or ID
        student: String,
        /// Last month to consider (MMYY); defaults to the current month
        #[arg(short, long)]
        to: Option<String>,
    },
}

/// Handle a fee command
pub fn handle_fee_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FeeCommands,
) -> TuitionResult<()> {
    let students = StudentService::new(storage);
    let fees = FeeService::new(storage);
    let human = settings.human_month_names;

    match cmd {
        FeeCommands::Paid { student, month } => {
            let month: MonthValue = month.parse()?;
            let student = students.require(&student)?;
            let mark = fees.mark_paid(&student, month)?;

            if mark.changed() {
                println!("Marked {} as PAID for {}", format_month(month, human), student.name);
            } else {
                println!("{} was already PAID for {}", format_month(month, human), student.name);
            }
        }

        FeeCommands::Unpaid { student, month } => {
            let month: MonthValue = month.parse()?;
            let student = students.require(&student)?;
            let mark = fees.mark_unpaid(&student, month)?;

            if mark.changed() {
                println!("Marked {} as UNPAID for {}", format_month(month, human), student.name);
            } else {
                println!("{} was already UNPAID for {}", format_month(month, human), student.name);
            }
        }

        FeeCommands::Status { student, month } => {
            let month: MonthValue = month.parse()?;
            let student = students.require(&student)?;

            match fees.status(&student, month)? {
                Some(state) => {
                    let source = if fees.explicit_status(&student, month)?.is_some() {
                        "marked"
                    } else {
                        "default"
                    };
                    println!(
                        "{}: {} {} ({})",
                        student.name,
                        format_month(month, human),
                        state,
                        source
                    );
                }
                None => println!(
                    "{}: {} is not tracked (before enrollment)",
                    student.name,
                    format_month(month, human)
                ),
            }
        }

        FeeCommands::History {
            student,
            from,
            to,
            format,
            output,
            codes,
        } => {
            let from = parse_month_arg(from.as_deref())?;
            let to = parse_month_arg(to.as_deref())?;
            let student = students.require(&student)?;

            let (start, end) =
                resolve_range(from, to, MonthValue::now(), settings.history_window());
            let report = fees.history(&student, start, end)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        TuitionError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    write_history(&report, format, human && !codes, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| TuitionError::Export(e.to_string()))?;
                    println!("History exported to: {}", path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    write_history(&report, format, human && !codes, &mut writer)?;
                }
            }
        }

        FeeCommands::Marks { student } => {
            let student = students.require(&student)?;
            let marks = fees.recorded_marks(&student)?;

            if marks.is_empty() {
                println!("No marks recorded for {}.", student.name);
            } else {
                println!("Marks recorded for {}:", student.name);
                for (month, state) in &marks {
                    let note = match student.enrolled {
                        Some(enrolled) if month.is_before(&enrolled) => "  (before enrollment)",
                        None => "  (not enrolled)",
                        _ => "",
                    };
                    println!(
                        "  {:<width$}  {:<6}{}",
                        format_month(*month, human),
                        state,
                        note,
                        width = if human { 14 } else { 4 }
                    );
                }
            }
        }

        FeeCommands::Outstanding { student, to } => {
            let up_to = parse_month_arg(to.as_deref())?.unwrap_or_else(MonthValue::now);
            let student = students.require(&student)?;
            let months = fees.outstanding_months(&student, up_to)?;

            if student.enrolled.is_none() {
                println!("{} has no enrollment month.", student.name);
            } else if months.is_empty() {
                println!("{} is fully paid through {}.", student.name, format_month(up_to, human));
            } else {
                println!(
                    "{} has {} unpaid month(s) through {}:",
                    student.name,
                    months.len(),
                    format_month(up_to, human)
                );
                for month in months {
                    println!("  {}", format_month(month, human));
                }
            }
        }
    }

    Ok(())
}

fn write_history<W: Write>(
    report: &HistoryReport,
    format: HistoryFormat,
    human: bool,
    writer: &mut W,
) -> TuitionResult<()> {
    match format {
        HistoryFormat::Text => {
            write!(writer, "{}", format_history_report(report, human))?;
            Ok(())
        }
        HistoryFormat::Csv => export_history_csv(report, writer),
        HistoryFormat::Json => export_history_json(report, writer),
        HistoryFormat::Yaml => export_history_yaml(report, writer),
    }
}
