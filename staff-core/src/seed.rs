//! Sample roster used on first start

use chrono::NaiveDate;
use shared::{Department, EmployeeId, EmployeeRecord, EmployeeStatus};

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    first_name: &str,
    last_name: &str,
    department: Department,
    role: &str,
    salary: f64,
    hired: (i32, u32, u32),
    status: EmployeeStatus,
) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::from(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department,
        role: role.to_string(),
        salary,
        hire_date: NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2)
            .expect("seed hire dates are valid calendar dates"),
        status,
        avatar: Some(format!("https://picsum.photos/seed/{}/200", id)),
        bio: None,
    }
}

/// Seed dataset for a roster slot that has never been written
pub fn sample_roster() -> Vec<EmployeeRecord> {
    use Department::*;
    use EmployeeStatus::*;

    #[rustfmt::skip]
    let roster = [
        employee("1", "Sarah", "Chen", Engineering, "Senior Frontend Engineer", 145000.0, (2021, 3, 15), Active),
        employee("2", "Marcus", "Johnson", Sales, "Account Executive", 95000.0, (2022, 7, 1), Active),
        employee("3", "Elena", "Rodriguez", Marketing, "Brand Strategist", 88000.0, (2023, 1, 10), Onboarding),
        employee("4", "David", "Kim", Engineering, "DevOps Engineer", 132000.0, (2020, 11, 2), Active),
        employee("5", "Priya", "Patel", Hr, "People Partner", 78000.0, (2019, 5, 20), Inactive),
        employee("6", "James", "Wilson", Finance, "Financial Analyst", 91000.0, (2021, 9, 6), Active),
    ];

    roster.into()
}
