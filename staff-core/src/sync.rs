//! DurableSync - roster and auth snapshots
//!
//! Every write is a whole snapshot. Reads are fail-soft: a slot that cannot
//! be read or parsed is logged and reported as absent, so a damaged file
//! never keeps the console from starting.

use serde::{Serialize, de::DeserializeOwned};
use shared::{AppError, AuthState, EmployeeRecord};
use std::sync::Arc;
use thiserror::Error;

use crate::slot::{SlotError, SlotStore};

/// Roster slot key
pub const ROSTER_KEY: &str = "staff_manager_employees";

/// Auth slot key
pub const AUTH_KEY: &str = "staff_manager_auth";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Slot error: {0}")]
    Slot(#[from] SlotError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// Bridge between in-memory state and the slot store
#[derive(Clone)]
pub struct DurableSync {
    slots: Arc<dyn SlotStore>,
}

impl DurableSync {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self { slots }
    }

    /// Load the roster snapshot, `None` if never written or unreadable
    pub fn load_roster(&self) -> Option<Vec<EmployeeRecord>> {
        self.load(ROSTER_KEY)
    }

    /// Overwrite the roster snapshot
    pub fn save_roster(&self, records: &[EmployeeRecord]) -> Result<(), SyncError> {
        self.save(ROSTER_KEY, records)?;
        tracing::debug!(count = records.len(), "Roster saved");
        Ok(())
    }

    /// Load the auth snapshot, `None` if never written or unreadable
    pub fn load_auth(&self) -> Option<AuthState> {
        self.load(AUTH_KEY)
    }

    pub fn save_auth(&self, state: &AuthState) -> Result<(), SyncError> {
        self.save(AUTH_KEY, state)
    }

    /// Erase the auth snapshot (logout)
    pub fn clear_auth(&self) -> Result<(), SyncError> {
        self.slots.remove(AUTH_KEY)?;
        tracing::debug!("Auth snapshot cleared");
        Ok(())
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), SyncError> {
        let content = serde_json::to_string_pretty(value)?;
        self.slots.write(key, &content)?;
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let content = match self.slots.read(key) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read slot, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Malformed slot data, treating as absent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_roster;
    use crate::slot::MemorySlotStore;

    fn sync_with_store() -> (DurableSync, Arc<MemorySlotStore>) {
        let store = Arc::new(MemorySlotStore::new());
        (DurableSync::new(store.clone()), store)
    }

    #[test]
    fn test_roster_round_trip_preserves_order() {
        let (sync, _) = sync_with_store();
        assert!(sync.load_roster().is_none());

        let roster = sample_roster();
        sync.save_roster(&roster).unwrap();

        assert_eq!(sync.load_roster().unwrap(), roster);
    }

    #[test]
    fn test_empty_roster_is_present_not_absent() {
        let (sync, _) = sync_with_store();
        sync.save_roster(&[]).unwrap();
        assert_eq!(sync.load_roster(), Some(vec![]));
    }

    #[test]
    fn test_malformed_roster_treated_as_absent() {
        let (sync, store) = sync_with_store();
        store.write(ROSTER_KEY, "[{\"id\": 1, \"oops\"").unwrap();
        assert!(sync.load_roster().is_none());
    }

    #[test]
    fn test_auth_save_load_clear() {
        let (sync, _) = sync_with_store();
        assert!(sync.load_auth().is_none());

        sync.save_auth(&AuthState::authenticated("alice")).unwrap();
        assert_eq!(sync.load_auth(), Some(AuthState::authenticated("alice")));

        sync.clear_auth().unwrap();
        assert!(sync.load_auth().is_none());
    }

    #[test]
    fn test_clear_auth_leaves_roster() {
        let (sync, _) = sync_with_store();
        sync.save_roster(&sample_roster()).unwrap();
        sync.save_auth(&AuthState::authenticated("alice")).unwrap();

        sync.clear_auth().unwrap();

        assert_eq!(sync.load_roster().unwrap().len(), sample_roster().len());
    }
}
