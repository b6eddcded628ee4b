//! User settings for SettleUp
//!
//! Manages user preferences: currency symbol, the budget new members start
//! with, how strictly explicit shares must add up, and whether members may
//! overspend their budget.

use serde::{Deserialize, Serialize};

use super::paths::SettlePaths;
use crate::error::SettleError;
use crate::models::Money;

/// User settings for SettleUp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output and summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Budget given to members created without an explicit one
    #[serde(default = "default_member_budget")]
    pub default_member_budget: Money,

    /// Allowed gap between explicit shares and the expense amount
    #[serde(default = "default_share_tolerance")]
    pub share_tolerance: Money,

    /// Refuse expenses that would push a participant below zero budget
    #[serde(default)]
    pub enforce_budgets: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_member_budget() -> Money {
    Money::from_dollars_cents(800, 0)
}

fn default_share_tolerance() -> Money {
    Money::from_cents(1)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_member_budget: default_member_budget(),
            share_tolerance: default_share_tolerance(),
            enforce_budgets: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SettlePaths) -> Result<Self, SettleError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SettleError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SettleError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SettlePaths) -> Result<(), SettleError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SettleError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SettleError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
