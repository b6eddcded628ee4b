//! Audit log CLI command

use crate::display::format_audit_entries;
use crate::error::SettleResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_log_command(storage: &Storage, count: usize) -> SettleResult<()> {
    let entries = storage.audit().read_recent(count)?;
    print!("{}", format_audit_entries(&entries));
    Ok(())
}
