//! Salary record consistency checks.
//!
//! This module enforces the arithmetic invariant linking gross salary,
//! total deduction and net salary, and the referential invariant linking a
//! salary record to an existing employee.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::NewSalaryRecord;
use crate::validation::{is_valid_integer, is_valid_month};

use super::money::{MONEY_PRECISION, check_money, money_ceiling, net_salary_tolerance};

/// Validates a candidate salary record against the payroll invariants.
///
/// The checks run in a fixed order and stop at the first failure:
///
/// 1. The employee number must be present in `existing_employee_numbers`.
/// 2. The gross salary must be a valid monetary amount.
/// 3. The total deduction must be a valid monetary amount no greater than
///    the candidate's own gross salary.
/// 4. The net salary must be a valid monetary amount.
/// 5. The net salary must equal gross salary minus total deduction within
///    a fixed tolerance of 0.01, which absorbs decimal rounding from
///    client-entered values.
/// 6. The month token must be a valid `YYYY-MM` period.
///
/// On success the candidate is returned unchanged: the engine never
/// recomputes net salary, the caller must supply a value already
/// consistent with the formula.
///
/// # Examples
///
/// ```
/// use payroll_engine::engine::validate_salary_record;
/// use payroll_engine::models::NewSalaryRecord;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
/// use std::str::FromStr;
///
/// let employees: BTreeSet<u32> = [1].into_iter().collect();
/// let candidate = NewSalaryRecord {
///     employee_number: 1,
///     gross_salary: Decimal::from_str("50000.00").unwrap(),
///     total_deduction: Decimal::from_str("7500.00").unwrap(),
///     net_salary: Decimal::from_str("42500.00").unwrap(),
///     month: "2025-01".to_string(),
/// };
/// assert!(validate_salary_record(candidate, &employees).is_ok());
/// ```
pub fn validate_salary_record(
    candidate: NewSalaryRecord,
    existing_employee_numbers: &BTreeSet<u32>,
) -> PayrollResult<NewSalaryRecord> {
    let employee_number = i64::from(candidate.employee_number);
    if !is_valid_integer(employee_number, 1, i64::MAX)
        || !existing_employee_numbers.contains(&candidate.employee_number)
    {
        return Err(PayrollError::UnknownEmployee { employee_number });
    }

    validate_salary_amounts(
        candidate.gross_salary,
        candidate.total_deduction,
        candidate.net_salary,
        &candidate.month,
    )?;

    Ok(candidate)
}

/// Validates the amount and month fields shared by salary creation and
/// salary updates.
///
/// Runs steps 2-6 of [`validate_salary_record`]; updates reuse this
/// directly because they never move a record to another employee.
pub fn validate_salary_amounts(
    gross_salary: Decimal,
    total_deduction: Decimal,
    net_salary: Decimal,
    month: &str,
) -> PayrollResult<()> {
    check_money("gross_salary", gross_salary, money_ceiling())?;

    // The deduction's upper bound is the candidate's own gross salary,
    // evaluated only after the gross salary passed its own check.
    if total_deduction.normalize().scale() > MONEY_PRECISION {
        return Err(PayrollError::InvalidFormat {
            field: "total_deduction".to_string(),
            message: format!("at most {MONEY_PRECISION} fractional digits are allowed"),
        });
    }
    if total_deduction < Decimal::ZERO {
        return Err(PayrollError::OutOfRange {
            field: "total_deduction".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if total_deduction > gross_salary {
        return Err(PayrollError::DeductionExceedsGross {
            gross_salary,
            total_deduction,
        });
    }

    check_money("net_salary", net_salary, money_ceiling())?;

    let expected = gross_salary - total_deduction;
    if (net_salary - expected).abs() > net_salary_tolerance() {
        return Err(PayrollError::NetSalaryMismatch {
            expected,
            actual: net_salary,
        });
    }

    if !is_valid_month(month) {
        return Err(PayrollError::InvalidFormat {
            field: "month".to_string(),
            message: "expected YYYY-MM with year between 1900 and 2100".to_string(),
        });
    }

    Ok(())
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

    fn employees() -> BTreeSet<u32> {
        [1, 2, 3].into_iter().collect()
    }

    fn candidate(gross: &str, deduction: &str, net: &str) -> NewSalaryRecord {
        NewSalaryRecord {
            employee_number: 1,
            gross_salary: dec(gross),
            total_deduction: dec(deduction),
            net_salary: dec(net),
            month: "2025-01".to_string(),
        }
    }

    #[test]
    fn test_accepts_consistent_record() {
        let accepted =
            validate_salary_record(candidate("50000.00", "7500.00", "42500.00"), &employees())
                .unwrap();
        assert_eq!(accepted.gross_salary, dec("50000.00"));
        assert_eq!(accepted.net_salary, dec("42500.00"));
    }

    #[test]
    fn test_returns_candidate_unchanged() {
        // Net salary off by exactly the tolerance is accepted and NOT
        // corrected to the exact difference.
        let accepted =
            validate_salary_record(candidate("50000.00", "7500.00", "42500.01"), &employees())
                .unwrap();
        assert_eq!(accepted.net_salary, dec("42500.01"));
    }

    #[test]
    fn test_rejects_unknown_employee() {
        let mut record = candidate("50000.00", "7500.00", "42500.00");
        record.employee_number = 99;

        let error = validate_salary_record(record, &employees()).unwrap_err();
        assert_eq!(error, PayrollError::UnknownEmployee { employee_number: 99 });
    }

    #[test]
    fn test_rejects_zero_employee_number() {
        let mut record = candidate("50000.00", "7500.00", "42500.00");
        record.employee_number = 0;

        let error = validate_salary_record(record, &employees()).unwrap_err();
        assert!(matches!(error, PayrollError::UnknownEmployee { .. }));
    }

    #[test]
    fn test_rejects_gross_above_ceiling() {
        let error =
            validate_salary_record(candidate("1000000.01", "0", "1000000.01"), &employees())
                .unwrap_err();
        assert!(matches!(error, PayrollError::OutOfRange { ref field, .. } if field == "gross_salary"));
    }

    #[test]
    fn test_rejects_gross_with_excess_precision() {
        let error = validate_salary_record(candidate("50000.005", "0", "50000.00"), &employees())
            .unwrap_err();
        assert!(matches!(error, PayrollError::InvalidFormat { ref field, .. } if field == "gross_salary"));
    }

    #[test]
    fn test_rejects_deduction_exceeding_gross() {
        let error =
            validate_salary_record(candidate("50000.00", "60000.00", "42500.00"), &employees())
                .unwrap_err();
        assert_eq!(
            error,
            PayrollError::DeductionExceedsGross {
                gross_salary: dec("50000.00"),
                total_deduction: dec("60000.00"),
            }
        );
    }

    #[test]
    fn test_deduction_check_ignores_net_salary() {
        // Even a net salary consistent with the formula cannot save a
        // deduction above gross.
        let error =
            validate_salary_record(candidate("50000.00", "60000.00", "-10000.00"), &employees())
                .unwrap_err();
        assert!(matches!(error, PayrollError::DeductionExceedsGross { .. }));
    }

    #[test]
    fn test_rejects_negative_deduction() {
        let error =
            validate_salary_record(candidate("50000.00", "-1.00", "50001.00"), &employees())
                .unwrap_err();
        assert!(matches!(error, PayrollError::OutOfRange { ref field, .. } if field == "total_deduction"));
    }

    #[test]
    fn test_rejects_net_mismatch_beyond_tolerance() {
        let error =
            validate_salary_record(candidate("50000.00", "7500.00", "42500.02"), &employees())
                .unwrap_err();
        assert_eq!(
            error,
            PayrollError::NetSalaryMismatch {
                expected: dec("42500.00"),
                actual: dec("42500.02"),
            }
        );
    }

    #[test]
    fn test_accepts_net_within_tolerance() {
        assert!(
            validate_salary_record(candidate("50000.00", "7500.00", "42499.99"), &employees())
                .is_ok()
        );
        assert!(
            validate_salary_record(candidate("50000.00", "7500.00", "42500.01"), &employees())
                .is_ok()
        );
    }

    #[test]
    fn test_rejects_invalid_month() {
        let mut record = candidate("50000.00", "7500.00", "42500.00");
        record.month = "2025-13".to_string();

        let error = validate_salary_record(record, &employees()).unwrap_err();
        assert!(matches!(error, PayrollError::InvalidFormat { ref field, .. } if field == "month"));
    }

    #[test]
    fn test_check_order_reports_employee_before_amounts() {
        // Everything is wrong; the unknown employee wins.
        let record = NewSalaryRecord {
            employee_number: 99,
            gross_salary: dec("-1"),
            total_deduction: dec("5.005"),
            net_salary: dec("-1"),
            month: "bogus".to_string(),
        };

        let error = validate_salary_record(record, &employees()).unwrap_err();
        assert!(matches!(error, PayrollError::UnknownEmployee { .. }));
    }

    proptest! {
        #[test]
        fn prop_consistent_triples_are_accepted(
            gross_cents in 0i64..=100_000_000,
            deduction_seed in 0i64..=100_000_000,
        ) {
            let deduction_cents = deduction_seed % (gross_cents + 1);
            let record = NewSalaryRecord {
                employee_number: 1,
                gross_salary: Decimal::new(gross_cents, 2),
                total_deduction: Decimal::new(deduction_cents, 2),
                net_salary: Decimal::new(gross_cents - deduction_cents, 2),
                month: "2025-01".to_string(),
            };

            prop_assert!(validate_salary_record(record, &employees()).is_ok());
        }

        #[test]
        fn prop_perturbed_net_is_rejected_as_mismatch(
            gross_cents in 0i64..=99_000_000,
            deduction_seed in 0i64..=99_000_000,
            perturbation_cents in 2i64..=1_000,
        ) {
            let deduction_cents = deduction_seed % (gross_cents + 1);
            let record = NewSalaryRecord {
                employee_number: 1,
                gross_salary: Decimal::new(gross_cents, 2),
                total_deduction: Decimal::new(deduction_cents, 2),
                net_salary: Decimal::new(gross_cents - deduction_cents + perturbation_cents, 2),
                month: "2025-01".to_string(),
            };

            let error = validate_salary_record(record, &employees()).unwrap_err();
            let is_expected = matches!(error, PayrollError::NetSalaryMismatch { .. });
            prop_assert!(is_expected);
        }

        #[test]
        fn prop_excess_deduction_is_always_rejected(
            gross_cents in 0i64..=99_000_000,
            excess_cents in 1i64..=1_000_000,
            net_cents in 0i64..=100_000_000,
        ) {
            let record = NewSalaryRecord {
                employee_number: 1,
                gross_salary: Decimal::new(gross_cents, 2),
                total_deduction: Decimal::new(gross_cents + excess_cents, 2),
                net_salary: Decimal::new(net_cents, 2),
                month: "2025-01".to_string(),
            };

            let error = validate_salary_record(record, &employees()).unwrap_err();
            let is_expected = matches!(error, PayrollError::DeductionExceedsGross { .. });
            prop_assert!(is_expected);
        }
    }
}
