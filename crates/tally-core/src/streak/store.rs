//! Durable streak storage.
//!
//! One human-readable JSON file mapping user id to streak record, loaded
//! once at process start and rewritten in full after every mutation.
//! Write-through, no buffering: `commit` does not return until the new
//! snapshot is on disk (or the write has failed and been reported).
//!
//! The full-snapshot rewrite is fine at the scale of one chat guild; it
//! would not be at a large user population. Known limitation, not a bug.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::engine::StreakRecord;
use crate::config::data_dir;
use crate::error::{CoreError, StoreError};

/// On-disk file name, next to the config.
const STORE_FILE: &str = "streaks.json";

/// The full user -> streak mapping, exclusively owned by the process.
#[derive(Debug)]
pub struct StreakStore {
    path: PathBuf,
    records: HashMap<String, StreakRecord>,
}

impl StreakStore {
    /// Load the mapping from `path`.
    ///
    /// A missing file is a fresh deployment and yields an empty store. A
    /// file that exists but cannot be parsed is fatal: no partial recovery
    /// is attempted, the operator fixes or removes the file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: path.clone(),
                    source,
                })
            }
        };
        Ok(Self { path, records })
    }

    /// Load from the default location (`streaks.json` in the data dir).
    pub fn open_default() -> Result<Self, CoreError> {
        let path = data_dir()?.join(STORE_FILE);
        Ok(Self::load(path)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a user's record. No side effects.
    pub fn get(&self, user_id: &str) -> Option<&StreakRecord> {
        self.records.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StreakRecord)> {
        self.records.iter()
    }

    /// Replace a user's record and synchronously persist the whole mapping.
    ///
    /// On a failed write the in-memory record is already replaced; memory
    /// stays authoritative and disk is stale until the next successful
    /// commit. The caller decides whether that is fatal (it is not, for the
    /// bot -- the divergence is logged and the process carries on).
    pub fn commit(&mut self, user_id: &str, record: StreakRecord) -> Result<(), StoreError> {
        self.records.insert(user_id.to_string(), record);
        self.persist()
    }

    /// Write the full mapping to a sibling temp file, then rename it over
    /// the target so a failed write never clobbers the previous snapshot.
    fn persist(&self) -> Result<(), StoreError> {
        let write_failed = |source: io::Error| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let content = serde_json::to_string_pretty(&self.records)
            .map_err(|e| write_failed(io::Error::other(e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(write_failed)?;
        fs::rename(&tmp, &self.path).map_err(write_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::engine::{advance, StreakAction};
    use chrono::NaiveDate;

    fn record(streak: u32, date: &str) -> StreakRecord {
        StreakRecord {
            streak,
            last_event_date: date.parse().unwrap(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = StreakStore::load(dir.path().join("streaks.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streaks.json");
        fs::write(&path, "{ not json").unwrap();

        match StreakStore::load(&path) {
            Err(StoreError::Corrupt { .. }) => {}
            other => panic!("Expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn commit_roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streaks.json");

        let mut store = StreakStore::load(&path).unwrap();
        store.commit("alice", record(3, "2024-06-01")).unwrap();
        store.commit("bob", record(1, "2024-05-28")).unwrap();

        let reloaded = StreakStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("alice"), Some(&record(3, "2024-06-01")));
        assert_eq!(reloaded.get("bob"), Some(&record(1, "2024-05-28")));
    }

    #[test]
    fn commit_replaces_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streaks.json");

        let mut store = StreakStore::load(&path).unwrap();
        store.commit("alice", record(3, "2024-06-01")).unwrap();

        let date: NaiveDate = "2024-06-02".parse().unwrap();
        let (next, action) = advance(store.get("alice"), date);
        assert_eq!(action, StreakAction::Incremented);
        store.commit("alice", next).unwrap();

        let reloaded = StreakStore::load(&path).unwrap();
        assert_eq!(reloaded.get("alice"), Some(&record(4, "2024-06-02")));
    }

    #[test]
    fn on_disk_format_is_human_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streaks.json");

        let mut store = StreakStore::load(&path).unwrap();
        store.commit("alice", record(5, "2024-06-01")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"alice\""));
        assert!(content.contains("\"streak\": 5"));
        assert!(content.contains("\"lastEventDate\": \"2024-06-01\""));
    }

    #[test]
    fn persist_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streaks.json");

        let mut store = StreakStore::load(&path).unwrap();
        store.commit("alice", record(1, "2024-06-01")).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
