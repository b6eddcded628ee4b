//! Member balance tracking
//!
//! Derives what each member has spent, paid and is owed from the group's
//! current expense list. Nothing here is cached; every call recomputes from
//! the expenses it is given.

use serde::Serialize;

use crate::models::{Group, MemberId, Money};

/// Per-member totals over a group's expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub member_id: MemberId,
    pub name: String,
    /// Sum of the member's shares across all expenses
    pub total_spent: Money,
    /// Sum of the amounts of expenses the member paid for
    pub total_paid: Money,
    /// `total_paid - total_spent`; positive means the member is owed money
    pub balance: Money,
    pub budget: Money,
    pub remaining: Money,
}

impl MemberSummary {
    pub fn is_creditor(&self) -> bool {
        self.balance.is_positive()
    }

    pub fn is_debtor(&self) -> bool {
        self.balance.is_negative()
    }
}

/// A member's net position, the input of the settlement solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub member_id: MemberId,
    pub name: String,
    pub balance: Money,
}

impl MemberBalance {
    pub fn new(member_id: MemberId, name: impl Into<String>, balance: Money) -> Self {
        Self {
            member_id,
            name: name.into(),
            balance,
        }
    }
}

impl From<&MemberSummary> for MemberBalance {
    fn from(summary: &MemberSummary) -> Self {
        Self::new(summary.member_id, summary.name.clone(), summary.balance)
    }
}

/// Sum of a member's shares across all expenses
pub fn total_spent(group: &Group, member_id: MemberId) -> Money {
    group
        .expenses
        .iter()
        .filter_map(|e| e.share_of(member_id))
        .sum()
}

/// Sum of the amounts of expenses a member paid for
pub fn total_paid(group: &Group, member_id: MemberId) -> Money {
    group
        .expenses
        .iter()
        .filter(|e| e.paid_by == member_id)
        .map(|e| e.amount)
        .sum()
}

/// Totals for one member, or None if they are not in the group
pub fn member_summary(group: &Group, member_id: MemberId) -> Option<MemberSummary> {
    let member = group.member(member_id)?;
    let spent = total_spent(group, member_id);
    let paid = total_paid(group, member_id);

    Some(MemberSummary {
        member_id,
        name: member.name.clone(),
        total_spent: spent,
        total_paid: paid,
        balance: paid - spent,
        budget: member.budget,
        remaining: member.remaining,
    })
}

/// Totals for every member, in member order
pub fn member_summaries(group: &Group) -> Vec<MemberSummary> {
    group
        .members
        .iter()
        .filter_map(|m| member_summary(group, m.id))
        .collect()
}

/// Net balance of every member, in member order
pub fn balances(group: &Group) -> Vec<MemberBalance> {
    member_summaries(group).iter().map(MemberBalance::from).collect()
}
