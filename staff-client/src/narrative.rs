//! Narrative requests and the generator capability

use async_trait::async_trait;
use shared::{DashboardStats, EmployeeRecord};

use crate::ClientResult;

/// Shown instead of a workforce summary when generation fails
pub const TREND_FALLBACK: &str = "Unable to generate workforce insights at this time.";

/// Stored as the bio when generation fails
pub const BIO_FALLBACK: &str = "Bio generation is currently unavailable.";

/// What a narrative request is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeKind {
    WorkforceTrend,
    EmployeeBio,
}

/// Payload sent to the text-generation service
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeRequest {
    /// Workforce-trend summary from aggregate stats
    WorkforceTrend {
        total_employees: usize,
        avg_salary: f64,
        departments: Vec<String>,
    },
    /// Short biography for one employee
    EmployeeBio {
        first_name: String,
        role: String,
        department: String,
    },
}

impl NarrativeRequest {
    pub fn workforce(stats: &DashboardStats) -> Self {
        Self::WorkforceTrend {
            total_employees: stats.total_employees,
            avg_salary: stats.avg_salary,
            departments: stats.department_names(),
        }
    }

    pub fn bio(record: &EmployeeRecord) -> Self {
        Self::EmployeeBio {
            first_name: record.first_name.clone(),
            role: record.role.clone(),
            department: record.department.name().to_string(),
        }
    }

    pub fn kind(&self) -> NarrativeKind {
        match self {
            Self::WorkforceTrend { .. } => NarrativeKind::WorkforceTrend,
            Self::EmployeeBio { .. } => NarrativeKind::EmployeeBio,
        }
    }

    /// Fixed text used when the service cannot answer
    pub fn fallback(&self) -> &'static str {
        match self.kind() {
            NarrativeKind::WorkforceTrend => TREND_FALLBACK,
            NarrativeKind::EmployeeBio => BIO_FALLBACK,
        }
    }

    /// Prompt text sent to the model
    pub fn prompt(&self) -> String {
        match self {
            Self::WorkforceTrend {
                total_employees,
                avg_salary,
                departments,
            } => format!(
                "Analyze this workforce snapshot: {} employees, an average salary of ${:.0}, \
                 spread across these departments: {}. Provide a brief, professional two-sentence \
                 executive insight about workforce trends.",
                total_employees,
                avg_salary,
                departments.join(", ")
            ),
            Self::EmployeeBio {
                first_name,
                role,
                department,
            } => format!(
                "Write a short, professional two-sentence bio for {}, who works as a {} in the {} \
                 department. Keep it warm and concise.",
                first_name, role, department
            ),
        }
    }
}

/// Text-generation capability
///
/// Single attempt per call. Implementations report failures as errors;
/// [`narrate`] turns them into the fallback text.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, request: &NarrativeRequest) -> ClientResult<String>;
}

/// Run a request and degrade any failure to the fixed fallback string
pub async fn narrate(generator: &dyn NarrativeGenerator, request: &NarrativeRequest) -> String {
    match generator.generate(request).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(kind = ?request.kind(), error = %e, "Narrative generation failed, using fallback");
            request.fallback().to_string()
        }
    }
}
