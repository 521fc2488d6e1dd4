use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::UserProfile;
use crate::records::persistence::{load_records, save_records, RecordStore};

/// Owns the record store and its backing file.
///
/// Every append rewrites the whole file before returning, so a persisted
/// id is never handed out for a record that failed to reach disk.
/// Access to the file is not serialized across processes; concurrent
/// writers race read-modify-write and the last writer wins.
pub struct RecordManager {
    path: PathBuf,
    store: RecordStore,
}

impl RecordManager {
    /// Open the store at `path`, starting fresh if the file is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let store = load_records(&path)?;
        Ok(Self { path, store })
    }

    /// Append a profile, persist the store, and return the assigned id.
    ///
    /// A persistence failure propagates; the caller sees that the
    /// submission was not saved.
    pub fn append(&mut self, profile: UserProfile) -> Result<u64> {
        let id = self.store.insert(profile);
        save_records(&self.path, &self.store)?;
        Ok(id)
    }

    /// All records as (id, profile) pairs, ordered by key.
    pub fn records(&self) -> impl Iterator<Item = (&String, &UserProfile)> {
        self.store.records.iter()
    }

    /// Look up a record by its string id.
    pub fn get(&self, id: &str) -> Option<&UserProfile> {
        self.store.records.get(id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.store.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use tempfile::tempdir;

    fn sample_profile(name: &str) -> UserProfile {
        UserProfile::new(
            name.to_string(),
            28,
            Gender::Female,
            165.0,
            60.0,
            "maintain weight".to_string(),
            2,
        )
    }

    #[test]
    fn test_open_missing_file_starts_fresh() {
        let dir = tempdir().unwrap();
        let manager = RecordManager::open(dir.path().join("records.json")).unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_append_persists_and_returns_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        let mut manager = RecordManager::open(&path).unwrap();
        let id = manager.append(sample_profile("Asha")).unwrap();
        assert_eq!(id, 1);
        assert!(path.exists());

        let second = manager.append(sample_profile("Ben")).unwrap();
        assert_eq!(second, 2);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("2").unwrap().name, "Ben");
    }

    #[test]
    fn test_ids_continue_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        let mut manager = RecordManager::open(&path).unwrap();
        manager.append(sample_profile("Asha")).unwrap();
        manager.append(sample_profile("Ben")).unwrap();
        drop(manager);

        let mut reopened = RecordManager::open(&path).unwrap();
        let id = reopened.append(sample_profile("Cam")).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_append_to_unwritable_path_errors() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("records.json");
        std::fs::create_dir(&path).unwrap();

        let mut manager = RecordManager::open(dir.path().join("other.json")).unwrap();
        manager.path = path;
        assert!(manager.append(sample_profile("Asha")).is_err());
    }
}
