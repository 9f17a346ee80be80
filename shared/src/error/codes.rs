//! Error codes for the staff console
//!
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors (94xx storage)

use std::fmt;

/// Error code carried by every [`AppError`](super::AppError)
///
/// The numeric value is stable so callers can log or display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Narrative service failed or returned an unusable response
    NarrativeServiceError = 9101,

    // ==================== 94xx: Storage ====================
    /// Storage write failed
    StorageWriteFailed = 9405,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::NarrativeServiceError => "Narrative service unavailable",
            ErrorCode::StorageWriteFailed => "Storage write failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
