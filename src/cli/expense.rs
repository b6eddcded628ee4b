//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SettleError, SettleResult};
use crate::models::{Group, Money, SplitType};
use crate::services::{parse_basis_points, ExpenseInput, LedgerService, ParticipantInput};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Group name or ID
        group: String,
        /// Short title (e.g., "Dinner")
        title: String,
        /// Amount (e.g., "42.50" or "42")
        amount: String,
        /// Member who paid
        #[arg(short, long)]
        paid_by: String,
        /// How to split the amount (equal, percentage, exact)
        #[arg(short, long, default_value = "equal")]
        split: SplitType,
        /// Participant as NAME or NAME=VALUE; VALUE is an amount for exact
        /// splits and a percentage for percentage splits. Defaults to every
        /// member for equal splits
        #[arg(short, long = "with")]
        with: Vec<String>,
        /// Only the payer takes part
        #[arg(short, long, conflicts_with = "with")]
        individual: bool,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List a group's expenses
    List {
        /// Group name or ID
        group: String,
    },
    /// Show expense details
    Show {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
    },
    /// Delete an expense and refund its shares
    Delete {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
    },
}

/// Resolve `--with` entries against the group's members
fn parse_participants(
    group: &Group,
    split: SplitType,
    entries: &[String],
) -> SettleResult<Vec<ParticipantInput>> {
    if entries.is_empty() {
        if split != SplitType::Equal {
            return Err(SettleError::InvalidSplit(format!(
                "{} splits need --with NAME=VALUE for each participant",
                split
            )));
        }
        return Ok(group
            .members
            .iter()
            .map(|m| ParticipantInput::member(m.id))
            .collect());
    }

    entries
        .iter()
        .map(|entry| {
            let (name, value) = match entry.rsplit_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (entry.as_str(), None),
            };
            let member = group
                .find_member(name)
                .ok_or_else(|| SettleError::member_not_found(name.trim()))?;

            match (split, value) {
                (SplitType::Equal, _) | (_, None) => Ok(ParticipantInput::member(member.id)),
                (SplitType::Exact, Some(value)) => {
                    let share = Money::parse(value).map_err(|e| {
                        SettleError::Validation(format!(
                            "Invalid amount for {}: {}",
                            member.name, e
                        ))
                    })?;
                    Ok(ParticipantInput::with_share(member.id, share))
                }
                (SplitType::Percentage, Some(value)) => {
                    let bps = parse_basis_points(value).map_err(SettleError::Validation)?;
                    Ok(ParticipantInput::with_percent(member.id, bps))
                }
            }
        })
        .collect()
}

fn find_expense_id(group: &Group, identifier: &str) -> SettleResult<crate::models::ExpenseId> {
    group
        .find_expense(identifier)
        .map(|e| e.id)
        .ok_or_else(|| SettleError::expense_not_found(identifier))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SettleResult<()> {
    let service = LedgerService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            group,
            title,
            amount,
            paid_by,
            split,
            with,
            individual,
            description,
        } => {
            let group = service.resolve_group(&group)?;

            let amount = Money::parse(&amount).map_err(|e| {
                SettleError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '42.50' or '42'. Error: {}",
                    amount, e
                ))
            })?;

            let payer = group
                .find_member(&paid_by)
                .ok_or_else(|| SettleError::member_not_found(paid_by.trim()))?;

            let participants = if individual {
                Vec::new()
            } else {
                parse_participants(&group, split, &with)?
            };

            let expense = service.add_expense(
                group.id,
                ExpenseInput {
                    title,
                    amount,
                    description,
                    paid_by: payer.id,
                    split_type: split,
                    individual,
                    participants,
                },
            )?;

            println!(
                "Added expense: {} {} paid by {}",
                expense.title,
                expense.amount.format_with_symbol(symbol),
                payer.name
            );
            println!("  ID: {}", expense.id);
            for p in &expense.participants {
                println!(
                    "  {} owes {}",
                    group.member_name(p.member_id),
                    p.share.format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::List { group } => {
            let group = service.resolve_group(&group)?;
            print!("{}", format_expense_list(&group, symbol));
        }

        ExpenseCommands::Show { group, expense } => {
            let group = service.resolve_group(&group)?;
            let id = find_expense_id(&group, &expense)?;
            if let Some(expense) = group.expense(id) {
                print!("{}", format_expense_details(&group, expense, symbol));
            }
        }

        ExpenseCommands::Delete { group, expense } => {
            let group = service.resolve_group(&group)?;
            let id = find_expense_id(&group, &expense)?;
            let removed = service.delete_expense(group.id, id)?;

            println!(
                "Deleted expense: {} {}",
                removed.title,
                removed.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
