//! Employee model and related types.
//!
//! This module defines the persisted [`Employee`] struct, the raw
//! [`NewEmployee`] candidate as received over the wire, and the
//! [`Gender`] enumeration.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// The fixed gender enumeration carried on employee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other gender identity.
    Other,
}

impl FromStr for Gender {
    type Err = PayrollError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(PayrollError::InvalidFormat {
                field: "gender".to_string(),
                message: format!("'{other}' is not one of Male, Female or Other"),
            }),
        }
    }
}

/// A candidate employee as received over the wire, before validation.
///
/// Optional fields carry their raw string form so the validation rules can
/// inspect them exactly as entered; the store converts them to typed
/// values after the consistency engine accepts the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
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

/// Represents a persisted employee.
///
/// The employee number is system-assigned and sequential. The department
/// reference is weak: it may be absent, and deleting the department clears
/// it without deleting the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// System-assigned sequential employee number.
    pub employee_number: u32,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's position title.
    pub position: String,
    /// Optional postal address.
    pub address: Option<String>,
    /// Optional telephone number.
    pub telephone: Option<String>,
    /// Optional gender.
    pub gender: Option<Gender>,
    /// Optional hire date.
    pub hired_date: Option<NaiveDate>,
    /// Optional code of the department the employee belongs to.
    pub department_code: Option<String>,
}

/// An employee joined with its department's display context for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWithDepartment {
    /// The employee record.
    #[serde(flatten)]
    pub employee: Employee,
    /// The referenced department's display name, when the reference is set.
    pub department_name: Option<String>,
}
