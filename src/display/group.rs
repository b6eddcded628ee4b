//! Group display formatting
//!
//! Formats groups and their members for terminal output in table and detail
//! views.

use super::report::column_width;
use crate::models::{Group, Money};
use crate::services::MemberSummary;

/// Format a list of groups as a table
pub fn format_group_list(groups: &[Group], symbol: &str) -> String {
    if groups.is_empty() {
        return "No groups found.".to_string();
    }

    let name_width = column_width("Name", groups.iter().map(|g| g.name.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>7}  {:>8}  {:>12}\n",
        "ID",
        "Name",
        "Members",
        "Expenses",
        "Spent",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->7}  {:->8}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for group in groups {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>7}  {:>8}  {:>12}\n",
            group.id.to_string(),
            group.name,
            group.members.len(),
            group.expenses.len(),
            group.total_spent().format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

/// Format member totals as a table
pub fn format_member_table(summaries: &[MemberSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No members.\n".to_string();
    }

    let name_width = column_width("Member", summaries.iter().map(|s| s.name.as_str()));
    let money = |m: Money| m.format_with_symbol(symbol);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}\n",
        "Member",
        "Budget",
        "Remaining",
        "Paid",
        "Spent",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for s in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}\n",
            s.name,
            money(s.budget),
            money(s.remaining),
            money(s.total_paid),
            money(s.total_spent),
            money(s.balance),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single group's details
pub fn format_group_details(group: &Group, summaries: &[MemberSummary], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  ID:          {}\n", group.id));
    if let Some(description) = &group.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    output.push_str(&format!("  Expenses:    {}\n", group.expenses.len()));
    output.push_str(&format!(
        "  Total Spent: {}\n",
        group.total_spent().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Budgets:     {}\n",
        group.total_budget().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Created:     {}\n",
        group.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified:    {}\n",
        group.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');
    output.push_str(&format_member_table(summaries, symbol));

    output
}
