//! Core data models for SettleUp
//!
//! This module contains the data structures of the expense-sharing domain:
//! groups, members, expenses and their participant shares.

pub mod expense;
pub mod group;
pub mod ids;
pub mod member;
pub mod money;

pub use expense::{Expense, Participant, SplitType};
pub use group::{Group, MIN_GROUP_NAME_LEN};
pub use ids::{ExpenseId, GroupId, MemberId};
pub use member::Member;
pub use money::{Money, MoneyParseError, FULL_BASIS_POINTS};
