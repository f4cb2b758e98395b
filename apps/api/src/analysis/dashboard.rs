//! Dashboard view model — what the overview, visualizations and report tabs render.
//!
//! Derived from an `AnalysisResult` on every request and never stored.

use serde::Serialize;

use crate::analysis::box_plot::{experience_box_plots, BoxPlotData};
use crate::models::employee::{
    AnalysisResult, AnalyzedEmployee, DepartmentSalary, PayStatus, PayStatusDistribution,
};

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub overview: Overview,
    pub visualizations: Visualizations,
    pub report: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub equity_score: f64,
    pub summary: String,
    pub pay_status_breakdown: Vec<PayStatusSlice>,
}

/// One slice of the pay-status pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayStatusSlice {
    pub name: PayStatus,
    pub value: u32,
    /// Share of the distribution total, rounded to a whole percent.
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Visualizations {
    pub salary_by_department: Vec<DepartmentSalary>,
    pub salary_vs_performance: Vec<ScatterPoint>,
    pub salary_vs_experience: Vec<BoxPlotData>,
}

/// x = performance rating, y = current salary, z = years of experience.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub current_salary: f64,
    pub pay_status: PayStatus,
    pub suggested_salary: f64,
    pub justification: String,
}

impl Dashboard {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            overview: Overview {
                equity_score: result.equity_score,
                summary: result.summary.clone(),
                pay_status_breakdown: pay_status_breakdown(&result.pay_status_distribution),
            },
            visualizations: Visualizations {
                salary_by_department: result.salary_by_department.clone(),
                salary_vs_performance: result
                    .analyzed_employees
                    .iter()
                    .map(scatter_point)
                    .collect(),
                salary_vs_experience: experience_box_plots(&result.analyzed_employees),
            },
            report: result.analyzed_employees.iter().map(report_row).collect(),
        }
    }
}

pub fn pay_status_breakdown(distribution: &PayStatusDistribution) -> Vec<PayStatusSlice> {
    let total = distribution.total();
    PayStatus::ALL
        .into_iter()
        .map(|status| {
            let value = distribution.count(status);
            let percent = if total == 0 {
                0
            } else {
                (f64::from(value) * 100.0 / total as f64).round() as u32
            };
            PayStatusSlice {
                name: status,
                value,
                percent,
            }
        })
        .collect()
}

fn scatter_point(analyzed: &AnalyzedEmployee) -> ScatterPoint {
    let e = &analyzed.employee;
    ScatterPoint {
        x: e.performance_rating,
        y: e.current_salary,
        z: e.experience_years,
        name: e.name.clone(),
    }
}

fn report_row(analyzed: &AnalyzedEmployee) -> ReportRow {
    let e = &analyzed.employee;
    ReportRow {
        employee_id: e.employee_id.clone(),
        name: e.name.clone(),
        role: e.role.clone(),
        department: e.department.clone(),
        current_salary: e.current_salary,
        pay_status: analyzed.pay_status,
        suggested_salary: analyzed.suggested_salary,
        justification: analyzed.justification.clone(),
    }
}
