//! Department consistency checks.

use std::collections::BTreeSet;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Department;
use crate::validation::{is_valid_department_code, is_valid_string};

use super::money::{check_money, money_ceiling};

/// Validates a candidate department.
///
/// The code must match the short-code rule, the name must be 2 to 100
/// characters, the baseline gross salary must be a valid monetary amount,
/// and the code must not already be present in `existing_codes`.
///
/// On success the candidate is returned unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::engine::validate_department;
/// use payroll_engine::models::Department;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeSet;
/// use std::str::FromStr;
///
/// let candidate = Department {
///     department_code: "IT".to_string(),
///     department_name: "IT Dept".to_string(),
///     gross_salary: Decimal::from_str("50000.00").unwrap(),
/// };
/// assert!(validate_department(candidate, &BTreeSet::new()).is_ok());
/// ```
pub fn validate_department(
    candidate: Department,
    existing_codes: &BTreeSet<String>,
) -> PayrollResult<Department> {
    if !is_valid_department_code(&candidate.department_code) {
        return Err(PayrollError::InvalidFormat {
            field: "department_code".to_string(),
            message: "expected 2 to 10 letters, digits or underscores".to_string(),
        });
    }
    if !is_valid_string(&candidate.department_name, 2, 100) {
        return Err(PayrollError::InvalidFormat {
            field: "department_name".to_string(),
            message: "expected 2 to 100 characters".to_string(),
        });
    }
    check_money("gross_salary", candidate.gross_salary, money_ceiling())?;

    if existing_codes.contains(&candidate.department_code) {
        return Err(PayrollError::DuplicateKey {
            field: "department_code".to_string(),
            value: candidate.department_code.clone(),
        });
    }

    Ok(candidate)
}
