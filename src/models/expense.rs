//! Expense model
//!
//! An expense records who paid, how much, and how the cost is divided among
//! the participating members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{ExpenseId, MemberId};
use super::money::Money;

/// How an expense amount is divided among participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitType {
    /// Everyone pays the same share
    #[default]
    Equal,
    /// Each participant pays a percentage of the total
    Percentage,
    /// Each participant pays an explicit amount
    Exact,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "Equal"),
            Self::Percentage => write!(f, "Percentage"),
            Self::Exact => write!(f, "Exact"),
        }
    }
}

impl FromStr for SplitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" | "eq" => Ok(Self::Equal),
            "percentage" | "percent" | "pct" => Ok(Self::Percentage),
            "exact" | "amount" => Ok(Self::Exact),
            other => Err(format!(
                "Unknown split type '{}'. Use equal, percentage or exact",
                other
            )),
        }
    }
}

/// A member's portion of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The member taking on this share
    pub member_id: MemberId,

    /// The member's share of the expense
    pub share: Money,

    /// Whether this share is already settled (the payer's own share)
    #[serde(default)]
    pub paid: bool,
}

impl Participant {
    pub fn new(member_id: MemberId, share: Money, paid: bool) -> Self {
        Self {
            member_id,
            share,
            paid,
        }
    }
}

/// A shared or individual expense within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the group
    pub id: ExpenseId,

    /// Short title ("Dinner", "Fuel")
    pub title: String,

    /// Total amount paid
    pub amount: Money,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Member who paid the full amount
    pub paid_by: MemberId,

    /// How the amount is divided
    #[serde(default)]
    pub split_type: SplitType,

    /// Ordered list of shares
    pub participants: Vec<Participant>,

    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        paid_by: MemberId,
        split_type: SplitType,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            description: None,
            paid_by,
            split_type,
            participants,
            date: Utc::now(),
        }
    }

    /// Shared between more than one member
    pub fn is_shared(&self) -> bool {
        self.participants.len() > 1
    }

    /// Only the payer takes part
    pub fn is_individual(&self) -> bool {
        self.participants.len() == 1 && self.participants[0].member_id == self.paid_by
    }

    /// Get the share a member holds in this expense
    pub fn share_of(&self, member_id: MemberId) -> Option<Money> {
        self.participants
            .iter()
            .find(|p| p.member_id == member_id)
            .map(|p| p.share)
    }

    /// Check if a member takes part in this expense
    pub fn involves(&self, member_id: MemberId) -> bool {
        self.paid_by == member_id || self.share_of(member_id).is_some()
    }

    /// Total of all participant shares
    pub fn shares_total(&self) -> Money {
        self.participants.iter().map(|p| p.share).sum()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount
        )
    }
}
