//! Key-value slot storage
//!
//! A slot is a named string value. The console keeps exactly two of them
//! (roster and auth), each holding a full JSON snapshot.
//!
//! ```text
//! {data_dir}/
//! ├── staff_manager_employees.json   # roster snapshot
//! └── staff_manager_auth.json        # auth snapshot
//! ```

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Invalid slot key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent string slots addressed by fixed keys
pub trait SlotStore: Send + Sync {
    /// Read a slot, `None` if it was never written (or was removed)
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite a slot with a full value
    fn write(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Remove a slot; removing a missing slot is not an error
    fn remove(&self, key: &str) -> Result<(), SlotError>;
}

fn check_key(key: &str) -> Result<(), SlotError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SlotError::InvalidKey(key.to_string()))
    }
}

/// One JSON file per slot under a data directory
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Slot file path: {dir}/{key}.json
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        check_key(key)?;
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        check_key(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Atomic write: tmp file + rename
        let path = self.slot_path(key);
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&tmp_path, value)?;
        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        tracing::trace!(key = %key, bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        check_key(key)?;
        let path = self.slot_path(key);

        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::trace!(key = %key, "Slot removed");
        }
        Ok(())
    }
}

/// In-process slots; nothing survives the process
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        check_key(key)?;
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        check_key(key)?;
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        check_key(key)?;
        self.slots.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn SlotStore) {
        assert_eq!(store.read("alpha").unwrap(), None);

        store.write("alpha", "one").unwrap();
        assert_eq!(store.read("alpha").unwrap().as_deref(), Some("one"));

        store.write("alpha", "two").unwrap();
        assert_eq!(store.read("alpha").unwrap().as_deref(), Some("two"));

        store.remove("alpha").unwrap();
        assert_eq!(store.read("alpha").unwrap(), None);

        // Removing again is fine
        store.remove("alpha").unwrap();
    }

    #[test]
    fn test_memory_slot_store() {
        exercise(&MemorySlotStore::new());
    }

    #[test]
    fn test_file_slot_store() {
        let temp_dir = TempDir::new().unwrap();
        // Directory is created on first write
        let store = FileSlotStore::new(temp_dir.path().join("nested/data"));
        exercise(&store);
    }

    #[test]
    fn test_file_write_leaves_no_tmp_and_ignores_stale_tmp() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp_dir.path());

        store.write("alpha", "committed").unwrap();
        let tmp_path = temp_dir.path().join("alpha.json.tmp");
        assert!(!tmp_path.exists());

        // A write interrupted before the rename leaves only the tmp file behind
        std::fs::write(&tmp_path, "[{\"trunc").unwrap();
        assert_eq!(store.read("alpha").unwrap().as_deref(), Some("committed"));

        store.write("alpha", "next").unwrap();
        assert_eq!(store.read("alpha").unwrap().as_deref(), Some("next"));
        assert!(!tmp_path.exists());
    }

    #[test]
    fn test_file_slot_path() {
        let store = FileSlotStore::new("/tmp/staff");
        assert_eq!(
            store.slot_path("staff_manager_auth"),
            PathBuf::from("/tmp/staff/staff_manager_auth.json")
        );
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let store = MemorySlotStore::new();
        assert!(matches!(store.read(""), Err(SlotError::InvalidKey(_))));
        assert!(matches!(
            store.write("../escape", "x"),
            Err(SlotError::InvalidKey(_))
        ));
    }
}
