//! Group repository for JSON storage
//!
//! Owns every group aggregate and persists them to groups.json. Each group
//! sits behind its own lock so reads clone a complete snapshot. Mutations are
//! serialized by the save lock, and a change only becomes visible once the
//! file holding it has been written.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::error::{SettleError, SettleResult};
use crate::models::{Group, GroupId};

use super::file_io::{read_groups, write_groups, GroupData};

type GroupHandle = Arc<RwLock<Group>>;

/// Group IDs never change, so lookups don't need the group's own lock
type GroupEntry = (GroupId, GroupHandle);

/// Repository for group persistence
pub struct GroupRepository {
    path: PathBuf,
    /// Groups in creation order
    data: RwLock<Vec<GroupEntry>>,
    /// Held for the whole of every insert, update and load
    save_lock: Mutex<()>,
}

fn lock_error(e: impl std::fmt::Display) -> SettleError {
    SettleError::Storage(format!("Failed to acquire lock: {}", e))
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            save_lock: Mutex::new(()),
        }
    }

    /// Load groups from disk
    pub fn load(&self) -> SettleResult<()> {
        let _guard = self.save_lock.lock().map_err(lock_error)?;
        let file_data = read_groups(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        *data = file_data
            .groups
            .into_iter()
            .map(|g| (g.id, Arc::new(RwLock::new(g))))
            .collect();

        debug!(count = data.len(), path = %self.path.display(), "loaded groups");
        Ok(())
    }

    fn entries(&self) -> SettleResult<Vec<GroupEntry>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data
            .iter()
            .map(|(id, handle)| (*id, Arc::clone(handle)))
            .collect())
    }

    /// Write every group in `entries`, using `pending` in place of the stored
    /// copy of its group. The caller holds the save lock.
    fn persist(&self, entries: &[GroupEntry], pending: &Group) -> SettleResult<()> {
        let mut groups = Vec::with_capacity(entries.len() + 1);
        let mut replaced = false;
        for (id, handle) in entries {
            if *id == pending.id {
                groups.push(pending.clone());
                replaced = true;
            } else {
                groups.push(handle.read().map_err(lock_error)?.clone());
            }
        }
        if !replaced {
            groups.push(pending.clone());
        }

        let count = groups.len();
        let bytes = write_groups(&self.path, &GroupData::new(groups))?;

        debug!(count, bytes, group = %pending.id, path = %self.path.display(), "saved groups");
        Ok(())
    }

    /// Add a newly created group and persist it
    ///
    /// The group is only added once the file including it has been written.
    pub fn insert(&self, group: Group) -> SettleResult<()> {
        let _guard = self.save_lock.lock().map_err(lock_error)?;
        let entries = self.entries()?;

        if entries.iter().any(|(id, _)| *id == group.id) {
            return Err(SettleError::Duplicate {
                entity_type: "Group",
                identifier: group.id.to_string(),
            });
        }

        self.persist(&entries, &group)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.push((group.id, Arc::new(RwLock::new(group))));
        Ok(())
    }

    /// Get a snapshot of a group by ID
    pub fn get(&self, id: GroupId) -> SettleResult<Option<Group>> {
        let handle = {
            let data = self.data.read().map_err(lock_error)?;
            data.iter()
                .find(|(group_id, _)| *group_id == id)
                .map(|(_, handle)| Arc::clone(handle))
        };
        let Some(handle) = handle else {
            return Ok(None);
        };
        let group = handle.read().map_err(lock_error)?.clone();
        Ok(Some(group))
    }

    /// Get snapshots of all groups in creation order
    pub fn get_all(&self) -> SettleResult<Vec<Group>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut groups = Vec::with_capacity(data.len());
        for (_, handle) in data.iter() {
            groups.push(handle.read().map_err(lock_error)?.clone());
        }
        Ok(groups)
    }

    /// Find a group by name (case-insensitive) or ID
    pub fn find(&self, identifier: &str) -> SettleResult<Option<Group>> {
        let identifier = identifier.trim();
        let groups = self.get_all()?;

        if let Some(group) = groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(identifier))
        {
            return Ok(Some(group.clone()));
        }

        Ok(groups.into_iter().find(|g| g.id.matches(identifier)))
    }

    /// Apply a mutation to one group and persist it as a single step.
    ///
    /// The closure works on a copy while the group's write lock is held. The
    /// copy is written to disk and only then replaces the stored group, so a
    /// failed mutation or a failed write leaves the group exactly as it was.
    pub fn update<T, F>(&self, id: GroupId, mutate: F) -> SettleResult<T>
    where
        F: FnOnce(&mut Group) -> SettleResult<T>,
    {
        let _guard = self.save_lock.lock().map_err(lock_error)?;
        let entries = self.entries()?;
        let handle = entries
            .iter()
            .find(|(group_id, _)| *group_id == id)
            .map(|(_, handle)| Arc::clone(handle))
            .ok_or_else(|| SettleError::group_not_found(id.to_string()))?;

        let mut stored = handle.write().map_err(lock_error)?;
        let mut working = stored.clone();
        let result = mutate(&mut working)?;

        self.persist(&entries, &working)?;
        *stored = working;

        Ok(result)
    }

    /// Number of groups
    pub fn count(&self) -> SettleResult<usize> {
        Ok(self.data.read().map_err(lock_error)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Money};
    use crate::storage::file_io::temp_path;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, GroupRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups.json");
        let repo = GroupRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn test_group(name: &str) -> Group {
        Group::new(
            name,
            None,
            vec![Member::new("Neo", Money::from_cents(80000))],
        )
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let group = test_group("Weekend Getaway");
        let id = group.id;

        repo.insert(group).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Weekend Getaway");
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get(GroupId::new()).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        let group = test_group("Flat");
        repo.insert(group.clone()).unwrap();

        let err = repo.insert(group).unwrap_err();
        assert!(matches!(err, SettleError::Duplicate { .. }));
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(test_group("First")).unwrap();
        repo.insert(test_group("Second")).unwrap();

        let repo2 = GroupRepository::new(temp_dir.path().join("groups.json"));
        repo2.load().unwrap();
        let names: Vec<_> = repo2.get_all().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp_dir, repo) = create_test_repo();
        let group = test_group("Ski Trip");
        let id = group.id;
        repo.insert(group).unwrap();

        assert_eq!(repo.find("ski trip").unwrap().unwrap().id, id);
        assert_eq!(repo.find(&id.to_string()).unwrap().unwrap().id, id);
        assert!(repo.find("Beach").unwrap().is_none());
    }

    #[test]
    fn test_failed_update_leaves_group_untouched() {
        let (_temp_dir, repo) = create_test_repo();
        let group = test_group("Flat");
        let id = group.id;
        repo.insert(group.clone()).unwrap();

        let result: SettleResult<()> = repo.update(id, |g| {
            g.name = "Changed".into();
            Err(SettleError::Validation("nope".into()))
        });

        assert!(result.is_err());
        assert_eq!(repo.get(id).unwrap().unwrap(), group);
    }

    #[test]
    fn test_failed_write_leaves_group_untouched() {
        let (temp_dir, repo) = create_test_repo();
        let group = test_group("Flat");
        let id = group.id;
        repo.insert(group.clone()).unwrap();

        let blocker = temp_path(&temp_dir.path().join("groups.json"));
        std::fs::create_dir(&blocker).unwrap();

        let err = repo
            .update(id, |g| {
                g.name = "Changed".into();
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, SettleError::Storage(_)));
        assert_eq!(repo.get(id).unwrap().unwrap(), group);

        let err = repo.insert(test_group("Second")).unwrap_err();
        assert!(matches!(err, SettleError::Storage(_)));
        assert_eq!(repo.count().unwrap(), 1);

        std::fs::remove_dir(&blocker).unwrap();
        repo.update(id, |g| {
            g.name = "Changed".into();
            Ok(())
        })
        .unwrap();

        let reloaded = GroupRepository::new(temp_dir.path().join("groups.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(id).unwrap().unwrap().name, "Changed");
        assert_eq!(reloaded.count().unwrap(), 1);
    }

    #[test]
    fn test_update_unknown_group() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.update(GroupId::new(), |_| Ok(())).unwrap_err();
        assert!(err.is_not_found());
    }
}
