//! Summary and settle-up CLI commands

use crate::config::Settings;
use crate::display::{format_member_table, format_settlements, generate_summary_text};
use crate::error::SettleResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Print the shareable text summary of a group
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    group: &str,
) -> SettleResult<()> {
    let service = LedgerService::new(storage, settings);
    let group = service.resolve_group(group)?;
    let summaries = service.member_summaries(group.id)?;
    let settlements = service.settlements(group.id)?;

    print!(
        "{}",
        generate_summary_text(&group, &summaries, &settlements, &settings.currency_symbol)
    );
    Ok(())
}

/// Print member balances and the transfers that settle them
pub fn handle_settle_command(
    storage: &Storage,
    settings: &Settings,
    group: &str,
) -> SettleResult<()> {
    let service = LedgerService::new(storage, settings);
    let group = service.resolve_group(group)?;
    let summaries = service.member_summaries(group.id)?;
    let settlements = service.settlements(group.id)?;

    println!("Settle up: {}", group.name);
    println!();
    print!("{}", format_member_table(&summaries, &settings.currency_symbol));
    println!();
    print!("{}", format_settlements(&settlements, &settings.currency_symbol));
    Ok(())
}
