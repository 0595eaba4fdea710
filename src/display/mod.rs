//! Display formatting for terminal output

pub mod history;
pub mod student;

pub use history::{format_history_report, format_month};
pub use student::format_student_list;
