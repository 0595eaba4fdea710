//! Audit log CLI command

use crate::error::TuitionResult;
use crate::storage::Storage;

/// Print the most recent audit entries in the order they were written
pub fn handle_audit_command(storage: &Storage, count: usize) -> TuitionResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
