//! Salary record models.
//!
//! A salary record belongs to exactly one employee and carries the three
//! monetary amounts linked by the payroll arithmetic invariant, plus the
//! month token the record covers. Several records may exist for the same
//! employee and month; the store does not impose uniqueness per period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A candidate salary record as received over the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSalaryRecord {
    /// The number of the employee the record belongs to.
    pub employee_number: u32,
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction, as supplied by the caller.
    pub net_salary: Decimal,
    /// The month the record covers, in `YYYY-MM` form.
    pub month: String,
}

/// The amount and month fields of a salary update.
///
/// Updates never move a record to another employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryUpdate {
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction, as supplied by the caller.
    pub net_salary: Decimal,
    /// The month the record covers, in `YYYY-MM` form.
    pub month: String,
}

/// Represents a persisted salary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// System-assigned sequential record id.
    pub id: u32,
    /// The number of the employee the record belongs to.
    pub employee_number: u32,
    /// Pre-deduction compensation for the month.
    pub gross_salary: Decimal,
    /// Sum of all withholdings for the month.
    pub total_deduction: Decimal,
    /// Gross salary minus total deduction.
    pub net_salary: Decimal,
    /// The month the record covers, in `YYYY-MM` form.
    pub month: String,
}

/// A salary record joined with its employee and department context.
///
/// Mirrors the listing shape of the original service: records whose
/// employee has no department are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryWithContext {
    /// The salary record.
    #[serde(flatten)]
    pub record: SalaryRecord,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's position title.
    pub position: String,
    /// The display name of the employee's department.
    pub department_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_new_salary_record() {
        let json = r#"{
            "employee_number": 1,
            "gross_salary": "50000.00",
            "total_deduction": "7500.00",
            "net_salary": "42500.00",
            "month": "2025-01"
        }"#;

        let candidate: NewSalaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.employee_number, 1);
        assert_eq!(candidate.gross_salary, dec("50000.00"));
        assert_eq!(candidate.total_deduction, dec("7500.00"));
        assert_eq!(candidate.net_salary, dec("42500.00"));
        assert_eq!(candidate.month, "2025-01");
    }

    #[test]
    fn test_amounts_serialize_as_two_digit_strings() {
        let record = SalaryRecord {
            id: 1,
            employee_number: 1,
            gross_salary: dec("50000.00"),
            total_deduction: dec("7500.00"),
            net_salary: dec("42500.00"),
            month: "2025-01".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"gross_salary\":\"50000.00\""));
        assert!(json.contains("\"total_deduction\":\"7500.00\""));
        assert!(json.contains("\"net_salary\":\"42500.00\""));
        assert!(json.contains("\"month\":\"2025-01\""));
    }

    #[test]
    fn test_salary_with_context_flattens_record() {
        let joined = SalaryWithContext {
            record: SalaryRecord {
                id: 3,
                employee_number: 1,
                gross_salary: dec("50000.00"),
                total_deduction: dec("7500.00"),
                net_salary: dec("42500.00"),
                month: "2025-01".to_string(),
            },
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            position: "Engineer".to_string(),
            department_name: "IT Dept".to_string(),
        };

        let json = serde_json::to_string(&joined).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"first_name\":\"Jane\""));
        assert!(json.contains("\"department_name\":\"IT Dept\""));
    }

    #[test]
    fn test_update_deserializes_without_employee_number() {
        let json = r#"{
            "gross_salary": "51000.00",
            "total_deduction": "8000.00",
            "net_salary": "43000.00",
            "month": "2025-02"
        }"#;

        let update: SalaryUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.gross_salary, dec("51000.00"));
        assert_eq!(update.month, "2025-02");
    }
}
