//! Custom error types for SettleUp
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for SettleUp operations
#[derive(Error, Debug)]
pub enum SettleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed input (too-short names, empty titles, shares not adding up)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expense amount was zero, negative or above `Money::MAX`
    #[error("Invalid amount: {0} (must be positive and at most {})", Money::MAX)]
    InvalidAmount(Money),

    /// Empty or inconsistent participant set
    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A participant cannot afford their share
    #[error("{member} doesn't have enough budget for this expense: need {needed}, have {available}")]
    InsufficientBudget {
        member: String,
        needed: Money,
        available: Money,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SettleError {
    /// Create a "not found" error for groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Group",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by bad caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount(_) | Self::InvalidSplit(_)
        )
    }
}

impl From<std::io::Error> for SettleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SettleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SettleUp operations
pub type SettleResult<T> = Result<T, SettleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SettleError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SettleError::group_not_found("Weekend Getaway");
        assert_eq!(err.to_string(), "Group not found: Weekend Getaway");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_insufficient_budget_error() {
        let err = SettleError::InsufficientBudget {
            member: "Lizzy".into(),
            needed: Money::from_cents(5000),
            available: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Lizzy doesn't have enough budget for this expense: need $50.00, have $30.00"
        );
    }

    #[test]
    fn test_split_errors_are_validation() {
        assert!(SettleError::InvalidAmount(Money::zero()).is_validation());
        assert!(SettleError::InvalidSplit("no participants".into()).is_validation());
        assert!(SettleError::Validation("bad".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let settle_err: SettleError = io_err.into();
        assert!(matches!(settle_err, SettleError::Io(_)));
    }
}
