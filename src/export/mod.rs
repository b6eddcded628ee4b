//! Export module for SettleUp
//!
//! Provides data export in multiple formats:
//! - CSV: one row per participant share (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_shares_csv;
pub use json::{export_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
