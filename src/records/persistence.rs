use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::UserProfile;

/// The persisted record document.
///
/// Records are keyed by the string form of their assigned id.
/// `next_record_id` is the source of truth for id assignment and is
/// never derived from the map's keys, so ids are monotonic across
/// restarts even if the map contains foreign keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordStore {
    pub records: BTreeMap<String, UserProfile>,

    pub next_record_id: u64,
}

impl RecordStore {
    /// A fresh store with no records and the counter at 1.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_record_id: 1,
        }
    }

    /// Assign the next id to `profile` and insert it. Returns the id.
    pub fn insert(&mut self, profile: UserProfile) -> u64 {
        let id = self.next_record_id;
        self.records.insert(id.to_string(), profile);
        self.next_record_id += 1;
        id
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the record store from a JSON file.
///
/// A missing file is not an error; it yields a fresh store.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(RecordStore::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the record store to a JSON file, rewriting it in full.
pub fn save_records<P: AsRef<Path>>(path: P, store: &RecordStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}
