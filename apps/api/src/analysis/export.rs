//! CSV export of the analyzed employee table.

use crate::models::employee::AnalyzedEmployee;

/// Download name offered for the exported report.
pub const EXPORT_FILENAME: &str = "compensation_analysis_report.csv";

/// Renders the analyzed employees as CSV, one row per employee in result order.
///
/// The header row is the bare field names; every value is double-quoted with
/// embedded quotes doubled. Returns `None` for an empty table.
///
/// The header is the fixed [`AnalyzedEmployee::FIELD_NAMES`], which is also the
/// key order every record serializes with, so it equals the first record's keys.
pub fn export_csv(employees: &[AnalyzedEmployee]) -> Option<String> {
    if employees.is_empty() {
        return None;
    }

    let header = AnalyzedEmployee::FIELD_NAMES.join(",");
    let rows = employees.iter().map(|employee| {
        employee
            .field_values()
            .iter()
            .map(|value| quote(value))
            .collect::<Vec<_>>()
            .join(",")
    });

    Some(
        std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
