//! Audit logging system for SettleUp
//!
//! Records every group creation and every expense added or deleted, with the
//! entity snapshot, in an append-only audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use settleup::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.title.clone()),
//!     &expense,
//! )
//! .in_group(group.id.to_string());
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
