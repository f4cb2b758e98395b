//! CSV Parser — turns an uploaded compensation CSV into `Employee` records.
//!
//! The format is deliberately plain: fields are split on every comma, no quoting
//! or escaping is recognised, and each field is whitespace-trimmed.

use thiserror::Error;

use crate::models::employee::Employee;

/// Columns that must appear in the header, in any order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "employee_id",
    "name",
    "department",
    "role",
    "current_salary",
    "experience_years",
    "performance_rating",
    "location",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("CSV must have a header and at least one data row.")]
    Malformed,

    #[error("Missing required CSV column: {0}")]
    MissingColumn(String),

    /// `row` is the 1-based line number with the header as row 1.
    #[error(
        "Invalid number format in row {row}. Check salary, experience, and performance columns."
    )]
    InvalidNumber { row: usize },
}

/// Parses raw CSV text into employees, preserving line order.
///
/// An input whose data rows are all absent is rejected as malformed; callers
/// still check for an empty result before analysis.
pub fn parse_csv(text: &str) -> Result<Vec<Employee>, CsvError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(CsvError::Malformed);
    }

    let header: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    for column in REQUIRED_COLUMNS {
        if !header.contains(&column) {
            return Err(CsvError::MissingColumn(column.to_string()));
        }
    }

    let columns = ColumnIndex::new(&header);

    lines[1..]
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let values: Vec<&str> = line.split(',').collect();
            columns.employee(&values, index + 2)
        })
        .collect()
}

/// Header position of every required column. Where a name repeats, the
/// rightmost occurrence wins.
struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    fn new(header: &[&str]) -> Self {
        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            // presence was checked by the caller
            *slot = header.iter().rposition(|h| *h == column).unwrap_or_default();
        }
        Self { positions }
    }

    fn field<'a>(&self, values: &[&'a str], column: usize) -> &'a str {
        values
            .get(self.positions[column])
            .map(|v| v.trim())
            .unwrap_or("")
    }

    fn employee(&self, values: &[&str], row: usize) -> Result<Employee, CsvError> {
        let number = |column: usize| parse_number(self.field(values, column));

        let (Some(current_salary), Some(experience_years), Some(performance_rating)) =
            (number(4), number(5), number(6))
        else {
            return Err(CsvError::InvalidNumber { row });
        };

        Ok(Employee {
            employee_id: self.field(values, 0).to_string(),
            name: self.field(values, 1).to_string(),
            department: self.field(values, 2).to_string(),
            role: self.field(values, 3).to_string(),
            current_salary,
            experience_years,
            performance_rating,
            location: self.field(values, 7).to_string(),
        })
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "employee_id,name,department,role,current_salary,experience_years,performance_rating,location";

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let csv = format!("\u{feff}{HEADER}\n1,Ann,Eng,Dev,50000,3,4.2,NY");
        let employees = parse_csv(&csv).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].employee_id, "1");
    }

    #[test]
    fn test_single_row_parses_all_fields() {
        let csv = format!("{HEADER}\n1,Ann,Eng,Dev,50000,3,4.2,NY");
        let employees = parse_csv(&csv).unwrap();
        assert_eq!(employees.len(), 1);
        let ann = &employees[0];
        assert_eq!(ann.employee_id, "1");
        assert_eq!(ann.name, "Ann");
        assert_eq!(ann.department, "Eng");
        assert_eq!(ann.role, "Dev");
        assert_eq!(ann.current_salary, 50000.0);
        assert_eq!(ann.experience_years, 3.0);
        assert!((ann.performance_rating - 4.2).abs() < f64::EPSILON);
        assert_eq!(ann.location, "NY");
    }

    #[test]
    fn test_rows_keep_input_order() {
        let csv = format!(
            "{HEADER}\n3,Cid,Ops,SRE,70000,8,3.9,SF\n1,Ann,Eng,Dev,50000,3,4.2,NY\n2,Bo,Eng,QA,45000,1,3.0,LA\n"
        );
        let ids: Vec<String> = parse_csv(&csv)
            .unwrap()
            .into_iter()
            .map(|e| e.employee_id)
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_column_order_is_irrelevant_and_extra_columns_ignored() {
        let csv = "location, team_size ,performance_rating,experience_years,current_salary,role,department,name,employee_id\n\
                   Berlin,4,3.5,10,80000,Lead,Eng,Dee,7";
        let employees = parse_csv(csv).unwrap();
        assert_eq!(employees[0].employee_id, "7");
        assert_eq!(employees[0].location, "Berlin");
        assert_eq!(employees[0].experience_years, 10.0);
    }

    #[test]
    fn test_fields_and_header_are_trimmed_and_crlf_tolerated() {
        let csv = " employee_id , name ,department,role,current_salary,experience_years,performance_rating,location\r\n 9 , Eve ,HR,Partner, 61000 ,4,4,Paris\r\n";
        let employees = parse_csv(csv).unwrap();
        assert_eq!(employees[0].employee_id, "9");
        assert_eq!(employees[0].name, "Eve");
        assert_eq!(employees[0].location, "Paris");
        assert_eq!(employees[0].current_salary, 61000.0);
    }

    #[test]
    fn test_missing_trailing_field_becomes_empty_string() {
        let csv = format!("{HEADER}\n1,Ann,Eng,Dev,50000,3,4.2");
        let employees = parse_csv(&csv).unwrap();
        assert_eq!(employees[0].location, "");
    }

    #[test]
    fn test_header_only_is_malformed() {
        assert_eq!(parse_csv(HEADER), Err(CsvError::Malformed));
        assert_eq!(parse_csv(&format!("{HEADER}\n\n  ")), Err(CsvError::Malformed));
        assert_eq!(parse_csv(""), Err(CsvError::Malformed));
    }

    #[test]
    fn test_missing_column_is_named() {
        let csv = "employee_id,name,department,role,current_salary,experience_years,location\n1,Ann,Eng,Dev,50000,3,NY";
        let err = parse_csv(csv).unwrap_err();
        assert_eq!(err, CsvError::MissingColumn("performance_rating".to_string()));
        assert_eq!(err.to_string(), "Missing required CSV column: performance_rating");
    }

    #[test]
    fn test_invalid_number_reports_display_row() {
        let csv = format!("{HEADER}\n1,Ann,Eng,Dev,50000,3,4.2,NY\n2,Bo,Eng,QA,lots,1,3.0,LA");
        let err = parse_csv(&csv).unwrap_err();
        assert_eq!(err, CsvError::InvalidNumber { row: 3 });
        assert!(err.to_string().starts_with("Invalid number format in row 3."));
    }

    #[test]
    fn test_first_data_row_is_row_two() {
        let csv = format!("{HEADER}\n1,Ann,Eng,Dev,50000,three,4.2,NY");
        assert_eq!(parse_csv(&csv), Err(CsvError::InvalidNumber { row: 2 }));
    }

    #[test]
    fn test_empty_or_non_finite_number_is_rejected() {
        let empty = format!("{HEADER}\n1,Ann,Eng,Dev,50000,3,,NY");
        assert_eq!(parse_csv(&empty), Err(CsvError::InvalidNumber { row: 2 }));

        let infinite = format!("{HEADER}\n1,Ann,Eng,Dev,inf,3,4,NY");
        assert_eq!(parse_csv(&infinite), Err(CsvError::InvalidNumber { row: 2 }));

        let nan = format!("{HEADER}\n1,Ann,Eng,Dev,50000,NaN,4,NY");
        assert_eq!(parse_csv(&nan), Err(CsvError::InvalidNumber { row: 2 }));
    }

    #[test]
    fn test_quoted_fields_are_not_unescaped() {
        let csv = format!("{HEADER}\n1,\"Smith,Ann\",Eng,Dev,50000,3,4.2,NY");
        // the comma inside quotes shifts every later column
        assert_eq!(parse_csv(&csv), Err(CsvError::InvalidNumber { row: 2 }));
    }
}
