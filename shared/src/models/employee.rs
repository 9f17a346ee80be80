//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque employee identifier
///
/// Generated once at creation and never changed. Persisted as a plain
/// string so rosters written by earlier versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Generate a fresh random (UUID v4) id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Department (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Operations,
}

impl Department {
    /// Every department, in form/display order
    pub const ALL: [Department; 6] = [
        Department::Engineering,
        Department::Sales,
        Department::Marketing,
        Department::Hr,
        Department::Finance,
        Department::Operations,
    ];

    /// Display name, identical to the persisted form
    pub const fn name(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Employment status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Onboarding,
    Inactive,
    Terminated,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 4] = [
        EmployeeStatus::Active,
        EmployeeStatus::Onboarding,
        EmployeeStatus::Inactive,
        EmployeeStatus::Terminated,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Onboarding => "Onboarding",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Employee record (one per staff member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Generated narrative bio, absent until requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl EmployeeRecord {
    /// Build a record from a draft and an already-assigned id
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department: draft.department,
            role: draft.role,
            salary: draft.salary,
            hire_date: draft.hire_date,
            status: draft.status,
            avatar: draft.avatar,
            bio: draft.bio,
        }
    }

    /// Replace every field except `id`
    pub fn apply(&mut self, draft: EmployeeDraft) {
        let id = std::mem::replace(&mut self.id, EmployeeId(String::new()));
        *self = Self::from_draft(id, draft);
    }

    /// Record minus id, e.g. to prefill an edit form
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department,
            role: self.role.clone(),
            salary: self.salary,
            hire_date: self.hire_date,
            status: self.status,
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update employee payload (a record without its id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Random placeholder avatar given to every new form
pub fn placeholder_avatar() -> String {
    format!("https://picsum.photos/seed/{}/200", uuid::Uuid::new_v4().simple())
}

impl Default for EmployeeDraft {
    /// Blank form state: Engineering, Active, hired today, placeholder avatar
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            department: Department::Engineering,
            role: String::new(),
            salary: 0.0,
            hire_date: chrono::Local::now().date_naive(),
            status: EmployeeStatus::Active,
            avatar: Some(placeholder_avatar()),
            bio: None,
        }
    }
}
