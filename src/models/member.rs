//! Group member model
//!
//! A member belongs to exactly one group and carries a spending budget. The
//! remaining budget is reduced by every share the member takes on and
//! restored when the expense is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use super::money::Money;

/// A member of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier within the group
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Budget the member started with
    pub budget: Money,

    /// Budget left after the member's shares across all expenses
    pub remaining: Money,
}

impl Member {
    /// Create a new member with a full remaining budget
    pub fn new(name: impl Into<String>, budget: Money) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            email: None,
            budget,
            remaining: budget,
        }
    }

    /// Create a member with an email address
    pub fn with_email(name: impl Into<String>, email: impl Into<String>, budget: Money) -> Self {
        let mut member = Self::new(name, budget);
        member.email = Some(email.into());
        member
    }

    /// Amount of budget used so far
    pub fn used(&self) -> Money {
        self.budget - self.remaining
    }

    /// Take on a share of an expense
    pub fn charge(&mut self, share: Money) {
        self.remaining -= share;
    }

    /// Give back a share of a removed expense
    pub fn refund(&mut self, share: Money) {
        self.remaining += share;
    }

    /// Check if the member can cover a share without going below zero
    pub fn can_afford(&self, share: Money) -> bool {
        self.remaining >= share
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("Neo", Money::from_cents(80000));
        assert_eq!(member.name, "Neo");
        assert_eq!(member.remaining, member.budget);
        assert!(member.used().is_zero());
        assert!(member.email.is_none());
    }

    #[test]
    fn test_charge_and_refund() {
        let mut member = Member::new("Lizzy", Money::from_cents(80000));
        member.charge(Money::from_cents(3333));
        assert_eq!(member.remaining, Money::from_cents(76667));
        assert_eq!(member.used(), Money::from_cents(3333));

        member.refund(Money::from_cents(3333));
        assert_eq!(member.remaining, member.budget);
    }

    #[test]
    fn test_can_afford() {
        let member = Member::new("Jason", Money::from_cents(1000));
        assert!(member.can_afford(Money::from_cents(1000)));
        assert!(!member.can_afford(Money::from_cents(1001)));
    }

    #[test]
    fn test_email_skipped_when_absent() {
        let member = Member::new("Zakes", Money::zero());
        let json = serde_json::to_string(&member).unwrap();
        assert!(!json.contains("email"));

        let with_email = Member::with_email("Kenny", "kenny@example.com", Money::zero());
        let json = serde_json::to_string(&with_email).unwrap();
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back.email.as_deref(), Some("kenny@example.com"));
    }
}
