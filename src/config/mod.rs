//! Configuration module for SettleUp
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SettlePaths;
pub use settings::Settings;
