//! Employee consistency checks.

use std::collections::BTreeSet;

use crate::error::{PayrollError, PayrollResult};
use crate::models::NewEmployee;
use crate::validation::{
    is_valid_date, is_valid_department_code, is_valid_gender, is_valid_phone, is_valid_string,
};

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidFormat {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Validates a candidate employee.
///
/// First name, last name and position are required; address, telephone,
/// gender and hired date are validated only when present, absence is not
/// an error. When `existing_department_codes` is supplied, a present
/// department code must also resolve against it; pass `None` to validate
/// shape only (for example when the caller has already pinned the
/// reference).
///
/// On success the candidate is returned unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::engine::validate_employee;
/// use payroll_engine::models::NewEmployee;
///
/// let candidate = NewEmployee {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     position: "Engineer".to_string(),
///     address: None,
///     telephone: None,
///     gender: None,
///     hired_date: None,
///     department_code: None,
/// };
/// assert!(validate_employee(candidate, None).is_ok());
/// ```
pub fn validate_employee(
    candidate: NewEmployee,
    existing_department_codes: Option<&BTreeSet<String>>,
) -> PayrollResult<NewEmployee> {
    if !is_valid_string(&candidate.first_name, 1, 50) {
        return Err(invalid("first_name", "expected 1 to 50 characters"));
    }
    if !is_valid_string(&candidate.last_name, 1, 50) {
        return Err(invalid("last_name", "expected 1 to 50 characters"));
    }
    if !is_valid_string(&candidate.position, 1, 100) {
        return Err(invalid("position", "expected 1 to 100 characters"));
    }

    if let Some(address) = &candidate.address {
        if !is_valid_string(address, 1, 255) {
            return Err(invalid("address", "expected 1 to 255 characters"));
        }
    }
    if let Some(telephone) = &candidate.telephone {
        if !is_valid_phone(telephone) {
            return Err(invalid(
                "telephone",
                "expected at least 7 digits, spaces, dashes, parentheses or plus signs",
            ));
        }
    }
    if let Some(gender) = &candidate.gender {
        if !is_valid_gender(gender) {
            return Err(invalid("gender", "expected Male, Female or Other"));
        }
    }
    if let Some(hired_date) = &candidate.hired_date {
        if !is_valid_date(hired_date) {
            return Err(invalid("hired_date", "expected a calendar date as YYYY-MM-DD"));
        }
    }

    if let Some(code) = &candidate.department_code {
        if !is_valid_department_code(code) {
            return Err(invalid(
                "department_code",
                "expected 2 to 10 letters, digits or underscores",
            ));
        }
        if let Some(codes) = existing_department_codes {
            if !codes.contains(code) {
                return Err(PayrollError::UnknownDepartment { code: code.clone() });
            }
        }
    }

    Ok(candidate)
}
