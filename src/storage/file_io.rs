//! groups.json encoding
//!
//! Reads the groups file and replaces it atomically. The whole document is
//! serialized before the disk is touched, so an encoding failure never leaves
//! a stray temp file behind.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SettleError, SettleResult};
use crate::models::Group;

/// On-disk layout of groups.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub groups: Vec<Group>,
}

impl GroupData {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    fn check_unique_ids(&self, path: &Path) -> SettleResult<()> {
        let mut seen = HashSet::new();
        match self.groups.iter().find(|g| !seen.insert(g.id)) {
            Some(group) => Err(SettleError::Storage(format!(
                "{} lists group {} ({}) more than once",
                path.display(),
                group.id,
                group.name
            ))),
            None => Ok(()),
        }
    }
}

/// Temp file used while replacing the groups file
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Read the groups file; a missing file holds no groups
pub fn read_groups(path: &Path) -> SettleResult<GroupData> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GroupData::default()),
        Err(e) => {
            return Err(SettleError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let data: GroupData = serde_json::from_slice(&raw)
        .map_err(|e| SettleError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;
    data.check_unique_ids(path)?;

    Ok(data)
}

/// Replace the groups file with `data`, returning the number of bytes written
///
/// The new contents go to a temp file in the same directory which is then
/// renamed over the original, so readers see either the old file or the new
/// one.
pub fn write_groups(path: &Path, data: &GroupData) -> SettleResult<usize> {
    let count = data.groups.len();
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| SettleError::Storage(format!("Failed to serialize {} groups: {}", count, e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SettleError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp = temp_path(path);
    write_synced(&temp, &bytes).map_err(|e| {
        let _ = fs::remove_file(&temp);
        SettleError::Storage(format!(
            "Failed to write {} groups to {}: {}",
            count,
            temp.display(),
            e
        ))
    })?;

    fs::rename(&temp, path).map_err(|e| {
        let _ = fs::remove_file(&temp);
        SettleError::Storage(format!(
            "Failed to replace {} with {} groups: {}",
            path.display(),
            count,
            e
        ))
    })?;

    Ok(bytes.len())
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Money};
    use tempfile::TempDir;

    fn test_group(name: &str) -> Group {
        Group::new(name, None, vec![Member::new("Neo", Money::from_cents(80000))])
    }

    #[test]
    fn test_missing_file_has_no_groups() {
        let temp_dir = TempDir::new().unwrap();
        let data = read_groups(&temp_dir.path().join("groups.json")).unwrap();
        assert!(data.groups.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("groups.json");
        let data = GroupData::new(vec![test_group("Flat"), test_group("Ski Trip")]);

        let written = write_groups(&path, &data).unwrap();
        assert_eq!(written as u64, fs::metadata(&path).unwrap().len());
        assert!(!temp_path(&path).exists());

        assert_eq!(read_groups(&path).unwrap(), data);
    }

    #[test]
    fn test_blocked_temp_file_keeps_old_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let original = GroupData::new(vec![test_group("Flat")]);
        write_groups(&path, &original).unwrap();

        fs::create_dir(temp_path(&path)).unwrap();
        let err = write_groups(&path, &GroupData::default()).unwrap_err();

        assert!(matches!(err, SettleError::Storage(_)));
        assert!(err.to_string().contains("Failed to write 0 groups"));
        assert_eq!(read_groups(&path).unwrap(), original);
    }

    #[test]
    fn test_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_groups(&path).unwrap_err();
        assert!(matches!(err, SettleError::Storage(_)));
    }

    #[test]
    fn test_duplicate_group_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let group = test_group("Flat");
        let bytes = serde_json::to_vec(&GroupData::new(vec![group.clone(), group])).unwrap();
        fs::write(&path, bytes).unwrap();

        let err = read_groups(&path).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
