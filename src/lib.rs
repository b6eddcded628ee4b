//! SettleUp - Group expense tracking and settlement
//!
//! This library provides the core functionality for the SettleUp application.
//! Members of a group record shared or individual expenses; the ledger keeps
//! every member's budget in step with the expense list and works out the
//! transfers that settle everyone's balances.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, groups, members, expenses)
//! - `storage`: JSON file storage layer
//! - `services`: Share calculation, ledger, balances and settlement
//! - `audit`: Audit logging system
//! - `display`: Terminal and plain-text formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `settleup` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use settleup::config::{paths::SettlePaths, settings::Settings};
//! use settleup::services::{CreateGroupInput, LedgerService, MemberInput};
//! use settleup::storage::Storage;
//!
//! let paths = SettlePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let ledger = LedgerService::new(&storage, &settings);
//! let group = ledger.create_group(CreateGroupInput {
//!     name: "Weekend Trip".into(),
//!     description: None,
//!     members: vec![MemberInput::new("Alice"), MemberInput::new("Bob")],
//! })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::SettleError;
