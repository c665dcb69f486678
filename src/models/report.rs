//! Monthly report models.
//!
//! This module contains the row and totals types produced by the report
//! aggregator in [`crate::report`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single row of the monthly payroll report.
///
/// Rows arrive at the aggregator already joined with the employee's name
/// and position and the department's display name.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportRow;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let row = ReportRow {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     position: "Engineer".to_string(),
///     department_name: "IT Dept".to_string(),
///     gross_salary: Decimal::from_str("50000.00").unwrap(),
///     total_deduction: Decimal::from_str("7500.00").unwrap(),
///     net_salary: Decimal::from_str("42500.00").unwrap(),
/// };
/// assert_eq!(row.department_name, "IT Dept");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's position title.
    pub position: String,
    /// The display name of the employee's department.
    pub department_name: String,
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction.
    pub net_salary: Decimal,
}

/// The totals row of a monthly report, summed with exact decimal addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of gross salaries across all rows.
    pub gross_salary: Decimal,
    /// Sum of total deductions across all rows.
    pub total_deduction: Decimal,
    /// Sum of net salaries across all rows.
    pub net_salary: Decimal,
}

impl ReportTotals {
    /// The zero totals row reported for a month with no salary records.
    ///
    /// The zeros carry two fractional digits so they serialize in the
    /// same `0.00` form as every other monetary amount.
    pub fn zero() -> Self {
        Self {
            gross_salary: Decimal::new(0, 2),
            total_deduction: Decimal::new(0, 2),
            net_salary: Decimal::new(0, 2),
        }
    }
}

/// The complete monthly payroll report: ordered rows plus a totals row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The month the report covers, in `YYYY-MM` form.
    pub month: String,
    /// Report rows ordered by department name, last name, first name.
    pub rows: Vec<ReportRow>,
    /// Column-wise totals across all rows.
    pub totals: ReportTotals,
}
