//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the mutating
//! endpoints. Monetary amounts deserialize as decimal quantities; dates,
//! months and gender arrive as raw strings and are inspected by the
//! validation rules before any conversion.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Department, NewEmployee, NewSalaryRecord, SalaryUpdate};

/// Request body for `POST /api/register-admin`.
///
/// The credential hash is opaque: hashing is the transport collaborator's
/// concern and happens before the request reaches this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAdminRequest {
    /// The administrator's username.
    pub username: String,
    /// The pre-hashed credential.
    pub password_hash: String,
}

/// Request body for `POST /api/departments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRequest {
    /// Unique short code identifying the department.
    pub department_code: String,
    /// The department's display name.
    pub department_name: String,
    /// The baseline gross salary for the department.
    pub gross_salary: Decimal,
}

/// Request body for `POST /api/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's position title.
    pub position: String,
    /// Optional postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Optional telephone number.
    #[serde(default)]
    pub telephone: Option<String>,
    /// Optional gender, one of `Male` / `Female` / `Other`.
    #[serde(default)]
    pub gender: Option<String>,
    /// Optional hire date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub hired_date: Option<String>,
    /// Optional code of the department the employee belongs to.
    #[serde(default)]
    pub department_code: Option<String>,
}

/// Request body for `POST /api/salaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The number of the employee the record belongs to.
    pub employee_number: u32,
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction, as computed by the caller.
    pub net_salary: Decimal,
    /// The month the record covers, in `YYYY-MM` form.
    pub month: String,
}

/// Request body for `PUT /api/salaries/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpdateRequest {
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction, as computed by the caller.
    pub net_salary: Decimal,
    /// The month the record covers, in `YYYY-MM` form.
    pub month: String,
}

impl From<DepartmentRequest> for Department {
    fn from(req: DepartmentRequest) -> Self {
        Department {
            department_code: req.department_code,
            department_name: req.department_name,
            gross_salary: req.gross_salary,
        }
    }
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            address: req.address,
            telephone: req.telephone,
            gender: req.gender,
            hired_date: req.hired_date,
            department_code: req.department_code,
        }
    }
}

impl From<SalaryRequest> for NewSalaryRecord {
    fn from(req: SalaryRequest) -> Self {
        NewSalaryRecord {
            employee_number: req.employee_number,
            gross_salary: req.gross_salary,
            total_deduction: req.total_deduction,
            net_salary: req.net_salary,
            month: req.month,
        }
    }
}

impl From<SalaryUpdateRequest> for SalaryUpdate {
    fn from(req: SalaryUpdateRequest) -> Self {
        SalaryUpdate {
            gross_salary: req.gross_salary,
            total_deduction: req.total_deduction,
            net_salary: req.net_salary,
            month: req.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_salary_request_converts_to_candidate() {
        let request = SalaryRequest {
            employee_number: 1,
            gross_salary: Decimal::from_str("50000.00").unwrap(),
            total_deduction: Decimal::from_str("7500.00").unwrap(),
            net_salary: Decimal::from_str("42500.00").unwrap(),
            month: "2025-01".to_string(),
        };

        let candidate: NewSalaryRecord = request.into();
        assert_eq!(candidate.employee_number, 1);
        assert_eq!(candidate.month, "2025-01");
    }

    #[test]
    fn test_employee_request_defaults_optional_fields() {
        let json = r#"{
            "first_name": "Jane",
            "last_name": "Doe",
            "position": "Engineer"
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        let candidate: NewEmployee = request.into();
        assert!(candidate.gender.is_none());
        assert!(candidate.department_code.is_none());
    }

    #[test]
    fn test_money_accepts_string_form() {
        let json = r#"{
            "department_code": "IT",
            "department_name": "IT Dept",
            "gross_salary": "50000.00"
        }"#;

        let request: DepartmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.gross_salary,
            Decimal::from_str("50000.00").unwrap()
        );
    }
}
