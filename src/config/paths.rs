//! Path management for SettleUp
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `SETTLEUP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/settleup` or `~/.config/settleup`
//! 3. Windows: `%APPDATA%\settleup`

use std::path::PathBuf;

use crate::error::SettleError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SETTLEUP_DATA_DIR";

/// Manages all paths used by SettleUp
#[derive(Debug, Clone)]
pub struct SettlePaths {
    base_dir: PathBuf,
}

impl SettlePaths {
    /// Create a new SettlePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SettleError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SettlePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/settleup/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/settleup/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to groups.json
    pub fn groups_file(&self) -> PathBuf {
        self.data_dir().join("groups.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SettleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SettleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SettleError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if SettleUp has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SettleError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SettleError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("settleup"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SettleError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SettleError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("settleup"))
}
