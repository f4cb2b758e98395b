use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the uploaded compensation CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub current_salary: f64,
    pub experience_years: f64,
    pub performance_rating: f64,
    pub location: String,
}

/// Pay classification relative to the model's estimated market range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayStatus {
    Underpaid,
    #[serde(rename = "Fairly Paid")]
    FairlyPaid,
    Overpaid,
}

impl PayStatus {
    pub const ALL: [PayStatus; 3] = [PayStatus::Underpaid, PayStatus::FairlyPaid, PayStatus::Overpaid];

    pub fn label(self) -> &'static str {
        match self {
            PayStatus::Underpaid => "Underpaid",
            PayStatus::FairlyPaid => "Fairly Paid",
            PayStatus::Overpaid => "Overpaid",
        }
    }
}

impl fmt::Display for PayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An employee as returned by the model: the input record plus market estimates.
///
/// `market_salary_min <= market_salary_max` is expected but not enforced;
/// the model's numbers are taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub market_salary_min: f64,
    pub market_salary_max: f64,
    pub pay_status: PayStatus,
    pub suggested_salary: f64,
    pub justification: String,
}

impl AnalyzedEmployee {
    /// Column names in serialization order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "employee_id",
        "name",
        "department",
        "role",
        "current_salary",
        "experience_years",
        "performance_rating",
        "location",
        "market_salary_min",
        "market_salary_max",
        "pay_status",
        "suggested_salary",
        "justification",
    ];

    /// Field values rendered as text, aligned with [`Self::FIELD_NAMES`].
    pub fn field_values(&self) -> [String; 13] {
        let e = &self.employee;
        [
            e.employee_id.clone(),
            e.name.clone(),
            e.department.clone(),
            e.role.clone(),
            e.current_salary.to_string(),
            e.experience_years.to_string(),
            e.performance_rating.to_string(),
            e.location.clone(),
            self.market_salary_min.to_string(),
            self.market_salary_max.to_string(),
            self.pay_status.to_string(),
            self.suggested_salary.to_string(),
            self.justification.clone(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayStatusDistribution {
    pub underpaid_count: u32,
    pub fairly_paid_count: u32,
    pub overpaid_count: u32,
}

impl PayStatusDistribution {
    pub fn count(&self, status: PayStatus) -> u32 {
        match status {
            PayStatus::Underpaid => self.underpaid_count,
            PayStatus::FairlyPaid => self.fairly_paid_count,
            PayStatus::Overpaid => self.overpaid_count,
        }
    }

    /// Widened so model-supplied counts near `u32::MAX` cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.underpaid_count)
            + u64::from(self.fairly_paid_count)
            + u64::from(self.overpaid_count)
    }
}

/// Average salary of one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub name: String,
    #[serde(rename = "avgSalary")]
    pub avg_salary: f64,
}

/// The full analysis returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzed_employees: Vec<AnalyzedEmployee>,
    /// Nominally 0 – 100.
    pub equity_score: f64,
    pub summary: String,
    pub pay_status_distribution: PayStatusDistribution,
    pub salary_by_department: Vec<DepartmentSalary>,
}
