//! Employee form validation
//!
//! Runs before a draft reaches the RecordStore. Every violation is reported
//! per field; nothing is trimmed or coerced.

use shared::{AppError, EmployeeDraft};
use std::fmt;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// One invalid field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as serialized (camelCase)
    pub field: &'static str,
    pub message: &'static str,
}

/// All invalid fields of a draft, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field).collect();
        write!(f, "Invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        errors.iter().fold(
            AppError::validation(errors.to_string()),
            |err, e| err.with_detail(e.field, e.message),
        )
    }
}

/// Check a draft before add/update
pub fn validate(draft: &EmployeeDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.first_name.is_empty() {
        errors.push("firstName", "Required");
    }
    if draft.last_name.is_empty() {
        errors.push("lastName", "Required");
    }
    if !EMAIL_SHAPE.is_match(&draft.email) {
        errors.push("email", "Valid email required");
    }
    if draft.role.is_empty() {
        errors.push("role", "Role is required");
    }
    if !(draft.salary.is_finite() && draft.salary > 0.0) {
        errors.push("salary", "Must be greater than 0");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
