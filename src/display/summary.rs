//! Plain-text group summary
//!
//! Produces the shareable summary of a group: each member's totals, the
//! shared expenses and the transfers needed to settle up.

use super::report::{section, separator};
use crate::models::{Group, Money};
use crate::services::{MemberSummary, Settlement};

const RULE_WIDTH: usize = 40;

/// Describe a balance from the member's point of view
fn describe_balance(summary: &MemberSummary, symbol: &str) -> String {
    if summary.is_creditor() {
        format!("{} (to receive)", summary.balance.format_with_symbol(symbol))
    } else if summary.is_debtor() {
        format!("{} (to pay)", summary.balance.abs().format_with_symbol(symbol))
    } else {
        "settled".to_string()
    }
}

/// Format one settlement line
pub fn format_settlement(settlement: &Settlement, symbol: &str) -> String {
    format!(
        "{} pays {}: {}",
        settlement.from_name,
        settlement.to_name,
        settlement.amount.format_with_symbol(symbol)
    )
}

/// Format the list of suggested transfers
pub fn format_settlements(settlements: &[Settlement], symbol: &str) -> String {
    if settlements.is_empty() {
        return "All settled up.\n".to_string();
    }

    settlements
        .iter()
        .map(|s| format!("{}\n", format_settlement(s, symbol)))
        .collect()
}

/// Generate the full text summary of a group
pub fn generate_summary_text(
    group: &Group,
    summaries: &[MemberSummary],
    settlements: &[Settlement],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense Summary: {}\n", group.name));
    output.push_str(&separator(RULE_WIDTH));
    output.push('\n');
    if let Some(description) = &group.description {
        output.push_str(description);
        output.push('\n');
    }
    output.push_str(&format!(
        "Generated {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    output.push_str(&section("Members"));
    for s in summaries {
        output.push_str(&format!("{}\n", s.name));
        output.push_str(&format!(
            "  Total spent: {}\n",
            s.total_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Total paid:  {}\n",
            s.total_paid.format_with_symbol(symbol)
        ));
        output.push_str(&format!("  Balance:     {}\n", describe_balance(s, symbol)));
    }
    output.push('\n');

    let shared = group.shared_expenses();
    output.push_str(&section("Shared Expenses"));
    if shared.is_empty() {
        output.push_str("None\n");
    } else {
        for expense in &shared {
            let names: Vec<String> = expense
                .participants
                .iter()
                .map(|p| group.member_name(p.member_id))
                .collect();
            output.push_str(&format!(
                "{}  {}  {}  paid by {} ({})\n",
                expense.date.format("%Y-%m-%d"),
                expense.title,
                expense.amount.format_with_symbol(symbol),
                group.member_name(expense.paid_by),
                names.join(", ")
            ));
        }
        let total: Money = shared.iter().map(|e| e.amount).sum();
        output.push_str(&format!("Total shared: {}\n", total.format_with_symbol(symbol)));
    }
    output.push('\n');

    output.push_str(&section("Settlements"));
    output.push_str(&format_settlements(settlements, symbol));

    output
}
