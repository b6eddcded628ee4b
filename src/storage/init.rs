//! Storage initialization
//!
//! Handles first-run setup

use tracing::info;

use crate::config::paths::SettlePaths;
use crate::error::SettleError;

use super::file_io::{write_groups, GroupData};

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and an empty groups file. Existing data is
/// left untouched.
pub fn initialize_storage(paths: &SettlePaths) -> Result<(), SettleError> {
    paths.ensure_directories()?;

    let groups_file = paths.groups_file();
    if !groups_file.exists() {
        write_groups(&groups_file, &GroupData::default())?;
        info!(path = %groups_file.display(), "created empty groups file");
    }

    Ok(())
}
