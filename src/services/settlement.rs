//! Settlement solver
//!
//! Reduces the members' net balances to a short list of payer -> payee
//! transfers using greedy two-cursor matching: the largest debtor pays the
//! largest creditor, whichever side is exhausted moves on, repeat.
//!
//! Balances are integer cents, so "debt equals credit" is an exact
//! comparison and every emitted amount is a whole number of cents.

use std::fmt;

use serde::Serialize;

use super::balance::{balances, MemberBalance};
use crate::models::{Group, MemberId, Money};

/// A suggested transfer that moves balances toward zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from: MemberId,
    pub from_name: String,
    pub to: MemberId,
    pub to_name: String,
    pub amount: Money,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {}: {}", self.from_name, self.to_name, self.amount)
    }
}

/// Compute the transfers that zero out the given balances.
///
/// Debtors are visited most negative first and creditors largest first.
/// Members with equal balances keep their input order, so identical input
/// always produces identical output. Balances that are already zero are
/// ignored; if every balance is zero the result is empty.
pub fn settle(balances: &[MemberBalance]) -> Vec<Settlement> {
    let mut debtors: Vec<MemberBalance> = balances
        .iter()
        .filter(|b| b.balance.is_negative())
        .cloned()
        .collect();
    let mut creditors: Vec<MemberBalance> = balances
        .iter()
        .filter(|b| b.balance.is_positive())
        .cloned()
        .collect();

    // sort_by is stable: ties keep input order
    debtors.sort_by(|a, b| a.balance.cmp(&b.balance));
    creditors.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debt = debtors[i].balance.abs();
        let credit = creditors[j].balance;
        let amount = debt.min(credit);

        if amount.is_positive() {
            settlements.push(Settlement {
                from: debtors[i].member_id,
                from_name: debtors[i].name.clone(),
                to: creditors[j].member_id,
                to_name: creditors[j].name.clone(),
                amount,
            });
        }

        if debt == credit {
            i += 1;
            j += 1;
        } else if debt < credit {
            creditors[j].balance -= debt;
            i += 1;
        } else {
            debtors[i].balance += credit;
            j += 1;
        }
    }

    settlements
}

/// Transfers that settle up a group as it stands now
pub fn group_settlements(group: &Group) -> Vec<Settlement> {
    settle(&balances(group))
}
