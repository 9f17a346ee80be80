//! RecordStore - the session roster
//!
//! Ordered newest-first. Every successful mutation writes the whole roster
//! through [`DurableSync`] before returning; a write failure is logged and
//! the in-memory change stands.

use shared::{AppError, EmployeeDraft, EmployeeId, EmployeeRecord, util::contains_ignore_case};
use thiserror::Error;

use crate::seed::sample_roster;
use crate::sync::DurableSync;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::employee_not_found(id),
        }
    }
}

/// Authoritative roster for the session
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    sync: DurableSync,
}

impl RecordStore {
    /// Create a store over an existing snapshot (nothing is written)
    pub fn new(sync: DurableSync, records: Vec<EmployeeRecord>) -> Self {
        Self { records, sync }
    }

    /// Rehydrate from the roster slot
    ///
    /// A slot that was never written yields the sample roster when
    /// `seed_sample_data` is set, otherwise an empty roster. The seed is
    /// not persisted until the first mutation.
    pub fn open(sync: DurableSync, seed_sample_data: bool) -> Self {
        let records = match sync.load_roster() {
            Some(records) => {
                tracing::info!(count = records.len(), "Roster restored");
                records
            }
            None if seed_sample_data => {
                tracing::info!("No saved roster, seeding sample data");
                sample_roster()
            }
            None => Vec::new(),
        };
        Self::new(sync, records)
    }

    /// Full listing, newest first
    pub fn list(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Case-insensitive match on full name, department or role
    pub fn search(&self, term: &str) -> Vec<&EmployeeRecord> {
        self.records
            .iter()
            .filter(|r| {
                contains_ignore_case(&r.full_name(), term)
                    || contains_ignore_case(r.department.name(), term)
                    || contains_ignore_case(&r.role, term)
            })
            .collect()
    }

    /// Insert a new record at the front and return it
    pub fn add(&mut self, draft: EmployeeDraft) -> EmployeeRecord {
        let id = self.fresh_id();
        let record = EmployeeRecord::from_draft(id, draft);
        self.records.insert(0, record.clone());
        self.persist();

        tracing::info!(id = %record.id, "Employee created");
        record
    }

    /// Replace every field except `id`, keeping the record's position
    pub fn update(&mut self, id: &EmployeeId, draft: EmployeeDraft) -> StoreResult<EmployeeRecord> {
        let record = self.find_mut(id)?;
        record.apply(draft);
        let updated = record.clone();
        self.persist();

        tracing::info!(id = %id, "Employee updated");
        Ok(updated)
    }

    /// Hard delete
    pub fn remove(&mut self, id: &EmployeeId) -> StoreResult<EmployeeRecord> {
        let index = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let removed = self.records.remove(index);
        self.persist();

        tracing::info!(id = %id, "Employee deleted");
        Ok(removed)
    }

    /// Set only the bio field
    pub fn patch_bio(&mut self, id: &EmployeeId, bio: impl Into<String>) -> StoreResult<()> {
        self.find_mut(id)?.bio = Some(bio.into());
        self.persist();

        tracing::debug!(id = %id, "Employee bio updated");
        Ok(())
    }

    fn find_mut(&mut self, id: &EmployeeId) -> StoreResult<&mut EmployeeRecord> {
        self.records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn fresh_id(&self) -> EmployeeId {
        loop {
            let id = EmployeeId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.sync.save_roster(&self.records) {
            tracing::warn!(error = %e, "Failed to persist roster");
        }
    }
}
