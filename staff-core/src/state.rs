//! AppState - the console's context object
//!
//! Owns the roster, the session gate and the narrative capability. Every
//! roster operation is gated on an authenticated session.

use parking_lot::Mutex;
use shared::{
    AppError, AppResult, AuthState, DashboardStats, EmployeeDraft, EmployeeId, EmployeeRecord,
};
use staff_client::{HttpNarrativeClient, NarrativeGenerator, NarrativeRequest, narrate};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::ConsoleConfig;
use crate::session::SessionGate;
use crate::slot::{FileSlotStore, SlotStore};
use crate::stats::aggregate;
use crate::store::{RecordStore, StoreError};
use crate::sync::DurableSync;
use crate::validation::validate;

/// Result of a bio request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BioOutcome {
    /// Text stored on the record (generated or fallback)
    Applied(String),
    /// Record was deleted while the request was in flight; result discarded
    TargetGone,
    /// A request for this record is already outstanding
    AlreadyPending,
}

/// Dashboard stats with the optional narrative summary
#[derive(Debug, Clone, PartialEq)]
pub struct WorkforceReport {
    pub stats: DashboardStats,
    /// `None` for an empty roster (no request is made)
    pub analysis: Option<String>,
}

pub struct AppState {
    store: RwLock<RecordStore>,
    session: RwLock<SessionGate>,
    narrator: Arc<dyn NarrativeGenerator>,
    /// Ids with a bio request in flight
    pending_bios: Mutex<HashSet<EmployeeId>>,
    login_delay: Duration,
}

/// Releases a pending-bio claim on drop
struct PendingBio<'a> {
    pending: &'a Mutex<HashSet<EmployeeId>>,
    id: EmployeeId,
}

impl<'a> PendingBio<'a> {
    fn claim(pending: &'a Mutex<HashSet<EmployeeId>>, id: &EmployeeId) -> Option<Self> {
        if pending.lock().insert(id.clone()) {
            Some(Self {
                pending,
                id: id.clone(),
            })
        } else {
            None
        }
    }
}

impl Drop for PendingBio<'_> {
    fn drop(&mut self) {
        self.pending.lock().remove(&self.id);
    }
}

impl AppState {
    /// File-backed slots under `config.data_dir` and the HTTP narrative client
    pub fn bootstrap(config: &ConsoleConfig) -> AppResult<Self> {
        let slots = Arc::new(FileSlotStore::new(&config.data_dir));
        let narrator = Arc::new(HttpNarrativeClient::new(&config.narrative)?);

        tracing::info!(data_dir = %config.data_dir.display(), "Bootstrapping staff console");
        Ok(Self::with_slot_store(slots, narrator, config))
    }

    /// Wire the console over any slot store and generator
    pub fn with_slot_store(
        slots: Arc<dyn SlotStore>,
        narrator: Arc<dyn NarrativeGenerator>,
        config: &ConsoleConfig,
    ) -> Self {
        let sync = DurableSync::new(slots);
        let store = RecordStore::open(sync.clone(), config.seed_sample_data);
        let session = SessionGate::restore(sync);

        Self {
            store: RwLock::new(store),
            session: RwLock::new(session),
            narrator,
            pending_bios: Mutex::new(HashSet::new()),
            login_delay: config.login_delay(),
        }
    }

    // ========== Session ==========

    pub async fn auth(&self) -> AuthState {
        self.session.read().await.state().clone()
    }

    /// Demo sign-in after the simulated delay
    pub async fn sign_in(&self, username: &str) -> AuthState {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
        self.session.write().await.login(username)
    }

    pub async fn sign_out(&self) -> AuthState {
        self.session.write().await.logout()
    }

    async fn require_auth(&self) -> AppResult<()> {
        if self.session.read().await.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::not_authenticated())
        }
    }

    // ========== Roster ==========

    pub async fn employees(&self) -> AppResult<Vec<EmployeeRecord>> {
        self.require_auth().await?;
        Ok(self.store.read().await.list().to_vec())
    }

    pub async fn employee(&self, id: &EmployeeId) -> AppResult<EmployeeRecord> {
        self.require_auth().await?;
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<EmployeeRecord>> {
        self.require_auth().await?;
        Ok(self
            .store
            .read()
            .await
            .search(term)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn create_employee(&self, draft: EmployeeDraft) -> AppResult<EmployeeRecord> {
        self.require_auth().await?;
        validate(&draft)?;
        Ok(self.store.write().await.add(draft))
    }

    pub async fn update_employee(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> AppResult<EmployeeRecord> {
        self.require_auth().await?;
        validate(&draft)?;
        Ok(self.store.write().await.update(id, draft)?)
    }

    pub async fn delete_employee(&self, id: &EmployeeId) -> AppResult<EmployeeRecord> {
        self.require_auth().await?;
        Ok(self.store.write().await.remove(id)?)
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        self.require_auth().await?;
        Ok(aggregate(self.store.read().await.list()))
    }

    // ========== Narrative ==========

    /// Stats plus a workforce-trend summary
    pub async fn workforce_report(&self) -> AppResult<WorkforceReport> {
        let stats = self.dashboard().await?;
        if stats.total_employees == 0 {
            return Ok(WorkforceReport {
                stats,
                analysis: None,
            });
        }

        let request = NarrativeRequest::workforce(&stats);
        let analysis = narrate(self.narrator.as_ref(), &request).await;
        Ok(WorkforceReport {
            stats,
            analysis: Some(analysis),
        })
    }

    /// Generate and store a bio for one employee
    ///
    /// The store lock is not held while the service is awaited. If the
    /// record is deleted meanwhile the text is discarded.
    pub async fn generate_bio(&self, id: &EmployeeId) -> AppResult<BioOutcome> {
        self.require_auth().await?;

        let Some(_claim) = PendingBio::claim(&self.pending_bios, id) else {
            tracing::debug!(id = %id, "Bio request already pending");
            return Ok(BioOutcome::AlreadyPending);
        };

        let request = {
            let store = self.store.read().await;
            let record = store.get(id).ok_or_else(|| AppError::employee_not_found(id))?;
            NarrativeRequest::bio(record)
        };

        let bio = narrate(self.narrator.as_ref(), &request).await;

        match self.store.write().await.patch_bio(id, bio.clone()) {
            Ok(()) => Ok(BioOutcome::Applied(bio)),
            Err(StoreError::NotFound(_)) => {
                tracing::info!(id = %id, "Employee removed before bio arrived, discarding");
                Ok(BioOutcome::TargetGone)
            }
        }
    }
}
