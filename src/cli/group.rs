//! Group CLI commands
//!
//! Implements CLI commands for creating and inspecting groups.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_group_details, format_group_list};
use crate::error::{SettleError, SettleResult};
use crate::models::Money;
use crate::services::balance::member_summaries;
use crate::services::{CreateGroupInput, LedgerService, MemberInput};
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group
    Create {
        /// Group name (at least 3 characters)
        name: String,
        /// Member as NAME or NAME:BUDGET (e.g., "Alice" or "Alice:500"); repeatable
        #[arg(short, long = "member", required = true)]
        members: Vec<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all groups
    List,
    /// Show group details and member balances
    Show {
        /// Group name or ID
        group: String,
    },
}

/// Parse a member given as NAME or NAME:BUDGET
pub fn parse_member_arg(arg: &str) -> SettleResult<MemberInput> {
    match arg.rsplit_once(':') {
        Some((name, budget)) => {
            let budget = Money::parse(budget).map_err(|e| {
                SettleError::Validation(format!("Invalid budget for '{}': {}", name.trim(), e))
            })?;
            Ok(MemberInput::with_budget(name.trim(), budget))
        }
        None => Ok(MemberInput::new(arg.trim())),
    }
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> SettleResult<()> {
    let service = LedgerService::new(storage, settings);

    match cmd {
        GroupCommands::Create {
            name,
            members,
            description,
        } => {
            let members = members
                .iter()
                .map(|arg| parse_member_arg(arg))
                .collect::<SettleResult<Vec<_>>>()?;

            let group = service.create_group(CreateGroupInput {
                name,
                description,
                members,
            })?;

            println!("Created group: {}", group.name);
            println!("  ID: {}", group.id);
            for member in &group.members {
                println!(
                    "  {} (budget {})",
                    member.name,
                    settings.format_money(member.budget)
                );
            }
        }

        GroupCommands::List => {
            let groups = service.list_groups()?;
            println!("{}", format_group_list(&groups, &settings.currency_symbol));
        }

        GroupCommands::Show { group } => {
            let group = service.resolve_group(&group)?;
            let summaries = member_summaries(&group);
            print!(
                "{}",
                format_group_details(&group, &summaries, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member_arg() {
        assert_eq!(parse_member_arg("Alice").unwrap(), MemberInput::new("Alice"));
        assert_eq!(
            parse_member_arg("Bob:120.50").unwrap(),
            MemberInput::with_budget("Bob", Money::from_cents(12050))
        );
        assert!(parse_member_arg("Bob:lots").unwrap_err().is_validation());
    }
}
