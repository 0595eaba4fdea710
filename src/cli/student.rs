//! Student CLI commands

use clap::Subcommand;

use super::parse_month_arg;
use crate::display::format_student_list;
use crate::error::{TuitionError, TuitionResult};
use crate::services::StudentService;
use crate::storage::Storage;

/// Student subcommands
#[derive(Subcommand)]
pub enum StudentCommands {
    /// Add a student to the roster
    Add {
        /// Student name
        name: String,
        /// Enrollment month (MMYY)
        #[arg(short, long)]
        enrolled: Option<String>,
    },
    /// List all students
    List,
    /// Set or clear a student's enrollment month
    Enroll {
        /// Student name or ID
        student: String,
        /// Enrollment month (MMYY)
        month: Option<String>,
        /// Remove the enrollment month
        #[arg(long, conflicts_with = "month")]
        clear: bool,
    },
}

/// Handle a student command
pub fn handle_student_command(storage: &Storage, cmd: StudentCommands) -> TuitionResult<()> {
    let service = StudentService::new(storage);

    match cmd {
        StudentCommands::Add { name, enrolled } => {
            let enrolled = parse_month_arg(enrolled.as_deref())?;
            let student = service.add(&name, enrolled)?;

            println!("Added student: {}", student.name);
            if let Some(month) = student.enrolled {
                println!("  Enrolled: {}", month.human_form());
            }
            println!("  ID: {}", student.id.short());
        }

        StudentCommands::List => {
            println!("{}", format_student_list(&service.list()?));
        }

        StudentCommands::Enroll {
            student,
            month,
            clear,
        } => {
            let enrolled = parse_month_arg(month.as_deref())?;
            if enrolled.is_none() && !clear {
                return Err(TuitionError::InvalidArgument(
                    "Give an enrollment month (MMYY) or --clear".into(),
                ));
            }

            let updated = service.set_enrollment(&student, enrolled)?;
            match updated.enrolled {
                Some(month) => println!(
                    "{} enrolled from {}",
                    updated.name,
                    month.human_form()
                ),
                None => println!("Cleared enrollment for {}", updated.name),
            }
        }
    }

    Ok(())
}
