//! CLI command for the audit history

use crate::error::TrackerResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> TrackerResult<()> {
    let Some(audit) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = audit.read_recent(count)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
