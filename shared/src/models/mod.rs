//! Data models
//!
//! Shared between the console core and the narrative client. Field names
//! serialize in camelCase to match the persisted slots.

pub mod auth;
pub mod employee;
pub mod stats;

// Re-exports
pub use auth::*;
pub use employee::*;
pub use stats::*;
