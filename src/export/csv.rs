//! CSV Export functionality
//!
//! Spreadsheet-friendly export with one row per expense participant.

use std::io::Write;

use serde::Serialize;

use crate::error::{SettleError, SettleResult};
use crate::models::{Group, SplitType};

#[derive(Debug, Serialize)]
struct ShareRow<'a> {
    group: &'a str,
    expense_id: String,
    date: String,
    title: &'a str,
    paid_by: String,
    split_type: SplitType,
    member: String,
    share: String,
    paid: bool,
}

fn export_error(e: impl std::fmt::Display) -> SettleError {
    SettleError::Export(e.to_string())
}

/// Export every participant share of the given groups
pub fn export_shares_csv<W: Write>(groups: &[Group], writer: W) -> SettleResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for group in groups {
        for expense in &group.expenses {
            for participant in &expense.participants {
                wtr.serialize(ShareRow {
                    group: &group.name,
                    expense_id: expense.id.to_string(),
                    date: expense.date.format("%Y-%m-%d").to_string(),
                    title: &expense.title,
                    paid_by: group.member_name(expense.paid_by),
                    split_type: expense.split_type,
                    member: group.member_name(participant.member_id),
                    share: participant.share.format_with_symbol(""),
                    paid: participant.paid,
                })
                .map_err(export_error)?;
            }
        }
    }

    wtr.flush().map_err(export_error)?;
    Ok(())
}
