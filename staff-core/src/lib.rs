//! Staff Console core
//!
//! Core components:
//! - RecordStore: in-memory roster, write-through to DurableSync
//! - DurableSync: roster and auth snapshots in a key-value slot store
//! - SessionGate: demo login/logout state machine
//! - stats: dashboard aggregation
//! - AppState: the context object that wires everything together

pub mod config;
pub mod logging;
pub mod seed;
pub mod session;
pub mod slot;
pub mod state;
pub mod stats;
pub mod store;
pub mod sync;
pub mod validation;

pub use shared;
pub use staff_client;

pub use config::{ConfigError, ConsoleConfig};
pub use logging::{LoggingError, init_logging};
pub use session::SessionGate;
pub use slot::{FileSlotStore, MemorySlotStore, SlotError, SlotStore};
pub use state::{AppState, BioOutcome, WorkforceReport};
pub use stats::aggregate;
pub use store::{RecordStore, StoreError, StoreResult};
pub use sync::{AUTH_KEY, DurableSync, ROSTER_KEY, SyncError};
pub use validation::{FieldError, ValidationErrors, validate};
