//! Dashboard aggregation
//!
//! Pure projection of a roster snapshot. Nothing is cached; callers
//! recompute whenever the roster changes.

use shared::{DashboardStats, DeptCount, EmployeeRecord, EmployeeStatus};

/// Summarize a roster snapshot
pub fn aggregate(records: &[EmployeeRecord]) -> DashboardStats {
    let total_employees = records.len();
    let active_count = records
        .iter()
        .filter(|r| r.status == EmployeeStatus::Active)
        .count();

    let avg_salary = if total_employees == 0 {
        0.0
    } else {
        records.iter().map(|r| r.salary).sum::<f64>() / total_employees as f64
    };

    // First-occurrence order; the department set is small so a linear scan is fine
    let mut dept_distribution: Vec<DeptCount> = Vec::new();
    for record in records {
        let name = record.department.name();
        match dept_distribution.iter_mut().find(|d| d.name == name) {
            Some(entry) => entry.value += 1,
            None => dept_distribution.push(DeptCount {
                name: name.to_string(),
                value: 1,
            }),
        }
    }

    DashboardStats {
        total_employees,
        active_count,
        avg_salary,
        dept_distribution,
    }
}
