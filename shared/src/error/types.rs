//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error surfaced at the application boundary, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level validation messages, ids)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry as a string
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.as_ref()?.get(key)?.as_str()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an employee not found error
    pub fn employee_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
            .with_detail("id", id.to_string())
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Create a storage write error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageWriteFailed, msg)
    }

    /// Create a narrative service error
    pub fn narrative(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NarrativeServiceError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotAuthenticated);
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
        assert_eq!(err.message, "Not authenticated");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid email format");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Invalid email format");
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("firstName", "Required")
            .with_detail("salary", "Must be greater than 0");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail_str("firstName"), Some("Required"));
        assert_eq!(err.detail_str("salary"), Some("Must be greater than 0"));
        assert_eq!(err.detail_str("email"), None);
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::employee_not_found("abc");
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee abc not found");
        assert_eq!(err.detail_str("id"), Some("abc"));

        let err = AppError::not_authenticated();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);

        let err = AppError::config("bad file");
        assert_eq!(err.code, ErrorCode::ConfigError);

        let err = AppError::storage("disk gone");
        assert_eq!(err.code, ErrorCode::StorageWriteFailed);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::EmployeeNotFound, "Record not found");
        assert_eq!(format!("{}", err), "Record not found");
    }
}
