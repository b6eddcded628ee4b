//! Storage layer for SettleUp
//!
//! Provides JSON file storage with atomic writes, per-group locking, and the
//! audit trail that accompanies every mutation.

pub mod file_io;
pub mod groups;
pub mod init;

pub use file_io::{read_groups, write_groups, GroupData};
pub use groups::GroupRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SettlePaths;
use crate::error::SettleError;
use crate::models::GroupId;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SettlePaths,
    pub groups: GroupRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SettlePaths) -> Result<Self, SettleError> {
        paths.ensure_directories()?;

        Ok(Self {
            groups: GroupRepository::new(paths.groups_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SettlePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SettleError> {
        self.groups.load()
    }

    /// Record the creation of an entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        group_id: GroupId,
        entity: &T,
    ) -> Result<(), SettleError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity)
            .in_group(group_id.to_string());
        self.audit.log(&entry)
    }

    /// Record the deletion of an entity in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        group_id: GroupId,
        entity: &T,
    ) -> Result<(), SettleError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity)
            .in_group(group_id.to_string());
        self.audit.log(&entry)
    }
}
