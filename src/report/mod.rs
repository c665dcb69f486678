//! Monthly report aggregation.
//!
//! This module derives the organization-wide monthly payroll report from
//! the salary records of a single month. It performs no I/O, never fails,
//! and is idempotent: the same input always yields the same output.

use crate::models::{MonthlyReport, ReportRow, ReportTotals};

/// Builds the monthly payroll report for `month` from the given rows.
///
/// The input rows are the salary records whose month equals the token,
/// each already joined with its employee's name and position and that
/// employee's department name. Rows are ordered by department name, then
/// last name, then first name (stable, case-sensitive lexical order), and
/// a totals row sums gross salary, total deduction and net salary with
/// exact decimal addition.
///
/// An empty input yields an empty row sequence and zero totals; callers
/// distinguish "no data" from "error" by sequence emptiness, never by an
/// error result.
///
/// # Examples
///
/// ```
/// use payroll_engine::report::build_monthly_report;
///
/// let report = build_monthly_report("2025-01", vec![]);
/// assert!(report.rows.is_empty());
/// assert_eq!(report.totals.net_salary, rust_decimal::Decimal::ZERO);
/// ```
pub fn build_monthly_report(month: &str, mut rows: Vec<ReportRow>) -> MonthlyReport {
    rows.sort_by(|a, b| {
        a.department_name
            .cmp(&b.department_name)
            .then_with(|| a.last_name.cmp(&b.last_name))
            .then_with(|| a.first_name.cmp(&b.first_name))
    });

    let totals = sum_totals(&rows);

    MonthlyReport {
        month: month.to_string(),
        rows,
        totals,
    }
}

/// Sums the three monetary columns of a row slice with exact decimal
/// addition.
pub fn sum_totals(rows: &[ReportRow]) -> ReportTotals {
    let mut totals = ReportTotals::zero();
    for row in rows {
        totals.gross_salary += row.gross_salary;
        totals.total_deduction += row.total_deduction;
        totals.net_salary += row.net_salary;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(department: &str, last: &str, first: &str, gross: &str, deduction: &str) -> ReportRow {
        let gross = dec(gross);
        let deduction = dec(deduction);
        ReportRow {
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: "Engineer".to_string(),
            department_name: department.to_string(),
            gross_salary: gross,
            total_deduction: deduction,
            net_salary: gross - deduction,
        }
    }

    #[test]
    fn test_empty_month_yields_zero_totals() {
        let report = build_monthly_report("2025-03", vec![]);
        assert_eq!(report.month, "2025-03");
        assert!(report.rows.is_empty());
        assert_eq!(report.totals, ReportTotals::zero());
    }

    #[test]
    fn test_single_row_totals_equal_the_row() {
        let report = build_monthly_report(
            "2025-01",
            vec![row("IT Dept", "Doe", "Jane", "50000.00", "7500.00")],
        );

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.totals.gross_salary, dec("50000.00"));
        assert_eq!(report.totals.total_deduction, dec("7500.00"));
        assert_eq!(report.totals.net_salary, dec("42500.00"));
    }

    #[test]
    fn test_rows_ordered_by_department_then_last_then_first() {
        let report = build_monthly_report(
            "2025-01",
            vec![
                row("Sales", "Adams", "Ann", "1000.00", "0"),
                row("IT Dept", "Zimmer", "Bob", "1000.00", "0"),
                row("IT Dept", "Adams", "Cleo", "1000.00", "0"),
                row("IT Dept", "Adams", "Ann", "1000.00", "0"),
            ],
        );

        let keys: Vec<(&str, &str, &str)> = report
            .rows
            .iter()
            .map(|r| {
                (
                    r.department_name.as_str(),
                    r.last_name.as_str(),
                    r.first_name.as_str(),
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                ("IT Dept", "Adams", "Ann"),
                ("IT Dept", "Adams", "Cleo"),
                ("IT Dept", "Zimmer", "Bob"),
                ("Sales", "Adams", "Ann"),
            ]
        );
    }

    #[test]
    fn test_ordering_is_case_sensitive() {
        let report = build_monthly_report(
            "2025-01",
            vec![
                row("accounts", "Doe", "Jane", "1000.00", "0"),
                row("Sales", "Doe", "Jane", "1000.00", "0"),
            ],
        );

        // Uppercase sorts before lowercase in lexical byte order.
        assert_eq!(report.rows[0].department_name, "Sales");
        assert_eq!(report.rows[1].department_name, "accounts");
    }

    #[test]
    fn test_ordering_is_stable_for_equal_keys() {
        let first = row("IT Dept", "Doe", "Jane", "100.00", "10.00");
        let second = row("IT Dept", "Doe", "Jane", "200.00", "20.00");
        let report = build_monthly_report("2025-01", vec![first.clone(), second.clone()]);

        assert_eq!(report.rows, vec![first, second]);
    }

    #[test]
    fn test_totals_do_not_drift_over_many_rows() {
        // 10,000 rows of 0.01 sum to exactly 100.00.
        let rows: Vec<ReportRow> = (0..10_000)
            .map(|_| row("IT Dept", "Doe", "Jane", "0.01", "0"))
            .collect();

        let report = build_monthly_report("2025-01", rows);
        assert_eq!(report.totals.gross_salary, dec("100.00"));
        assert_eq!(report.totals.net_salary, dec("100.00"));
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let rows = vec![
            row("Sales", "Adams", "Ann", "1000.00", "100.00"),
            row("IT Dept", "Doe", "Jane", "50000.00", "7500.00"),
        ];

        let first = build_monthly_report("2025-01", rows.clone());
        let second = build_monthly_report("2025-01", rows);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    fn arbitrary_row() -> impl Strategy<Value = ReportRow> {
        (
            prop::sample::select(vec!["IT Dept", "Sales", "HR"]),
            prop::sample::select(vec!["Adams", "Doe", "Zimmer"]),
            prop::sample::select(vec!["Ann", "Bob", "Cleo"]),
            0i64..=10_000_000,
            0i64..=10_000_000,
        )
            .prop_map(|(department, last, first, gross_cents, deduction_seed)| {
                let deduction_cents = deduction_seed % (gross_cents + 1);
                let gross = Decimal::new(gross_cents, 2);
                let deduction = Decimal::new(deduction_cents, 2);
                ReportRow {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    position: "Engineer".to_string(),
                    department_name: department.to_string(),
                    gross_salary: gross,
                    total_deduction: deduction,
                    net_salary: gross - deduction,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_partition_totals_sum_to_union_totals(
            rows in prop::collection::vec(arbitrary_row(), 0..40),
            split in 0usize..40,
        ) {
            let split = split.min(rows.len());
            let (left, right) = rows.split_at(split);

            let union = build_monthly_report("2025-01", rows.clone());
            let left_totals = build_monthly_report("2025-01", left.to_vec()).totals;
            let right_totals = build_monthly_report("2025-01", right.to_vec()).totals;

            prop_assert_eq!(
                union.totals.gross_salary,
                left_totals.gross_salary + right_totals.gross_salary
            );
            prop_assert_eq!(
                union.totals.total_deduction,
                left_totals.total_deduction + right_totals.total_deduction
            );
            prop_assert_eq!(
                union.totals.net_salary,
                left_totals.net_salary + right_totals.net_salary
            );
        }

        #[test]
        fn prop_totals_equal_sum_of_output_rows(
            rows in prop::collection::vec(arbitrary_row(), 0..40),
        ) {
            let report = build_monthly_report("2025-01", rows);
            prop_assert_eq!(report.totals, sum_totals(&report.rows));
        }
    }
}
