//! Expense display formatting
//!
//! Register-style listing of a group's expenses and a detail view showing
//! every participant's share.

use super::report::truncate;
use crate::models::{Expense, Group};

/// Format a single expense as a register row
pub fn format_expense_row(group: &Group, expense: &Expense, symbol: &str) -> String {
    let marker = if expense.is_shared() { "*" } else { " " };
    format!(
        "{} {:<12} {} {:<24} {:<12} {:<10} {:>12}",
        marker,
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.title, 24),
        truncate(&group.member_name(expense.paid_by), 12),
        expense.split_type.to_string(),
        expense.amount.format_with_symbol(symbol),
    )
}

/// Format a group's expenses in the order they were recorded
pub fn format_expense_list(group: &Group, symbol: &str) -> String {
    if group.expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<12} {:<10} {:<24} {:<12} {:<10} {:>12}\n",
        "ID", "Date", "Title", "Paid By", "Split", "Amount"
    ));
    output.push_str(&"-".repeat(88));
    output.push('\n');

    for expense in &group.expenses {
        output.push_str(&format_expense_row(group, expense, symbol));
        output.push('\n');
    }

    output.push_str(&"-".repeat(88));
    output.push('\n');
    output.push_str(&format!(
        "{} expenses, {} shared (*), total {}\n",
        group.expenses.len(),
        group.shared_expenses().len(),
        group.total_spent().format_with_symbol(symbol)
    ));

    output
}

/// Format expense details with the participant breakdown
pub fn format_expense_details(group: &Group, expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("Title:   {}\n", expense.title));
    output.push_str(&format!("Date:    {}\n", expense.date.format("%Y-%m-%d %H:%M UTC")));
    output.push_str(&format!("Amount:  {}\n", expense.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Paid by: {}\n", group.member_name(expense.paid_by)));
    output.push_str(&format!("Split:   {}\n", expense.split_type));

    if let Some(description) = &expense.description {
        output.push_str(&format!("Notes:   {}\n", description));
    }

    output.push_str("\nShares:\n");
    for participant in &expense.participants {
        let paid = if participant.paid { " (paid)" } else { "" };
        output.push_str(&format!(
            "  {} {}{}\n",
            group.member_name(participant.member_id),
            participant.share.format_with_symbol(symbol),
            paid
        ));
    }

    output
}
