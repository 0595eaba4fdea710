//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod fee;
pub mod student;

pub use audit::handle_audit_command;
pub use fee::{handle_fee_command, FeeCommands, HistoryFormat};
pub use student::{handle_student_command, StudentCommands};

use crate::error::TuitionResult;
use crate::models::MonthValue;

/// Parse an optional `MMYY` argument
pub(crate) fn parse_month_arg(arg: Option<&str>) -> TuitionResult<Option<MonthValue>> {
    arg.map(|code| code.parse::<MonthValue>().map_err(Into::into))
        .transpose()
}
