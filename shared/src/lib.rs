//! Shared types for the staff console
//!
//! Domain models, the unified error system and small utilities used by
//! both the narrative client and the console core.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    AuthState, DashboardStats, Department, DeptCount, EmployeeDraft, EmployeeId, EmployeeRecord,
    EmployeeStatus,
};
