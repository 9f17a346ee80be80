//! Dashboard statistics (derived, never persisted)

use serde::{Deserialize, Serialize};

/// Head count for one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptCount {
    pub name: String,
    pub value: usize,
}

/// Workforce summary for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_count: usize,
    pub avg_salary: f64,
    /// One entry per department present, in order of first occurrence
    pub dept_distribution: Vec<DeptCount>,
}

impl DashboardStats {
    /// Department names in distribution order
    pub fn department_names(&self) -> Vec<String> {
        self.dept_distribution
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }
}
