//! Display formatting for terminal output
//!
//! Provides utilities for formatting groups, expenses, balances and
//! settlements for terminal display and plain-text sharing.

pub mod audit;
pub mod expense;
pub mod group;
pub mod report;
pub mod summary;

pub use audit::format_audit_entries;
pub use expense::{format_expense_details, format_expense_list};
pub use group::{format_group_details, format_group_list, format_member_table};
pub use summary::{format_settlements, generate_summary_text};
