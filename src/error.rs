//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the validation rules, the consistency engine and the
//! storage collaborator can report. Storage-originated referential and
//! uniqueness failures use the same variants as the engine pre-checks, so
//! callers see a single error surface regardless of where a violation was
//! caught.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every error is local and recoverable: it carries the offending field or
/// key and a human-readable message so the caller can redisplay it. None of
/// these are fatal to the process.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::UnknownDepartment {
///     code: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown department code 'XX'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A field value has the wrong shape (string, number, date or month).
    #[error("Invalid {field}: {message}")]
    InvalidFormat {
        /// The field that failed validation.
        field: String,
        /// A description of the expected shape.
        message: String,
    },

    /// A numeric field value lies outside its permitted bounds.
    #[error("{field} out of range: {message}")]
    OutOfRange {
        /// The field that failed validation.
        field: String,
        /// A description of the permitted range.
        message: String,
    },

    /// A uniqueness constraint was violated.
    #[error("Duplicate {field}: '{value}' already exists")]
    DuplicateKey {
        /// The field or constraint that was violated.
        field: String,
        /// The duplicated value.
        value: String,
    },

    /// A salary record referenced an employee number that does not exist.
    #[error("Unknown employee number {employee_number}")]
    UnknownEmployee {
        /// The employee number that could not be resolved.
        employee_number: i64,
    },

    /// An employee referenced a department code that does not exist.
    #[error("Unknown department code '{code}'")]
    UnknownDepartment {
        /// The department code that could not be resolved.
        code: String,
    },

    /// Net salary does not equal gross salary minus total deduction.
    #[error("Net salary {actual} does not match gross minus deduction ({expected})")]
    NetSalaryMismatch {
        /// The net salary implied by the gross salary and deduction.
        expected: Decimal,
        /// The net salary supplied by the caller.
        actual: Decimal,
    },

    /// Total deduction is greater than gross salary.
    #[error("Total deduction {total_deduction} exceeds gross salary {gross_salary}")]
    DeductionExceedsGross {
        /// The gross salary of the candidate record.
        gross_salary: Decimal,
        /// The offending deduction.
        total_deduction: Decimal,
    },

    /// An update or delete targeted a record that does not exist.
    #[error("{entity} {id} not found")]
    RecordNotFound {
        /// The entity kind (e.g. "salary record", "employee").
        entity: String,
        /// The identifier that could not be resolved.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            PayrollError::InvalidFormat { .. } => "INVALID_FORMAT",
            PayrollError::OutOfRange { .. } => "OUT_OF_RANGE",
            PayrollError::DuplicateKey { .. } => "DUPLICATE_KEY",
            PayrollError::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
            PayrollError::UnknownDepartment { .. } => "UNKNOWN_DEPARTMENT",
            PayrollError::NetSalaryMismatch { .. } => "NET_SALARY_MISMATCH",
            PayrollError::DeductionExceedsGross { .. } => "DEDUCTION_EXCEEDS_GROSS",
            PayrollError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
        }
    }

    /// Returns the name of the field the error is attached to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            PayrollError::InvalidFormat { field, .. }
            | PayrollError::OutOfRange { field, .. }
            | PayrollError::DuplicateKey { field, .. } => Some(field),
            PayrollError::UnknownEmployee { .. } => Some("employee_number"),
            PayrollError::UnknownDepartment { .. } => Some("department_code"),
            PayrollError::NetSalaryMismatch { .. } => Some("net_salary"),
            PayrollError::DeductionExceedsGross { .. } => Some("total_deduction"),
            PayrollError::RecordNotFound { .. }
            | PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. } => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
