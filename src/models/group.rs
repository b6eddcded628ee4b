//! Group model
//!
//! The group is the aggregate root: it owns its members and expenses, and all
//! mutations go through it so that member budgets always match the expense
//! list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::{ExpenseId, GroupId, MemberId};
use super::member::Member;
use super::money::Money;

/// Minimum length of a group name
pub const MIN_GROUP_NAME_LEN: usize = 3;

/// A group of members sharing expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Members, in the order they were added at creation
    pub members: Vec<Member>,

    /// Expenses, in the order they were recorded
    #[serde(default)]
    pub expenses: Vec<Expense>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group with no expenses
    pub fn new(name: impl Into<String>, description: Option<String>, members: Vec<Member>) -> Self {
        let now = Utc::now();
        Self {
            id: GroupId::new(),
            name: name.into(),
            description,
            members,
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Get a member by ID
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// Find a member by name (case-insensitive) or ID
    pub fn find_member(&self, identifier: &str) -> Option<&Member> {
        let identifier = identifier.trim();
        self.members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(identifier))
            .or_else(|| self.members.iter().find(|m| m.id.matches(identifier)))
    }

    /// Display name for a member ID, falling back to the ID itself
    pub fn member_name(&self, id: MemberId) -> String {
        self.member(id)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Get an expense by ID
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by full or short ID
    pub fn find_expense(&self, identifier: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.matches(identifier))
    }

    /// Expenses split between more than one member
    pub fn shared_expenses(&self) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.is_shared()).collect()
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of all member budgets
    pub fn total_budget(&self) -> Money {
        self.members.iter().map(|m| m.budget).sum()
    }

    /// Record an expense and charge every participant their share
    pub fn apply_expense(&mut self, expense: Expense) {
        for participant in &expense.participants {
            if let Some(member) = self.member_mut(participant.member_id) {
                member.charge(participant.share);
            }
        }
        self.expenses.push(expense);
        self.touch();
    }

    /// Remove an expense, refunding exactly the share each participant took on
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        let expense = self.expenses.remove(index);

        for participant in &expense.participants {
            if let Some(member) = self.member_mut(participant.member_id) {
                member.refund(participant.share);
            }
        }
        self.touch();

        Some(expense)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
