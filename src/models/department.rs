//! Department model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a department with its baseline gross salary.
///
/// The department code is the natural key: short, unique, and referenced
/// by employees. Deleting a department detaches referencing employees
/// rather than cascading.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Department;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let department = Department {
///     department_code: "IT".to_string(),
///     department_name: "IT Dept".to_string(),
///     gross_salary: Decimal::from_str("50000.00").unwrap(),
/// };
/// assert_eq!(department.department_code, "IT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique short code identifying the department (2-10 word characters).
    pub department_code: String,
    /// The department's display name.
    pub department_name: String,
    /// The baseline gross salary for the department.
    pub gross_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_department() {
        let json = r#"{
            "department_code": "IT",
            "department_name": "IT Dept",
            "gross_salary": "50000.00"
        }"#;

        let department: Department = serde_json::from_str(json).unwrap();
        assert_eq!(department.department_code, "IT");
        assert_eq!(department.department_name, "IT Dept");
        assert_eq!(department.gross_salary, dec("50000.00"));
    }

    #[test]
    fn test_serialize_department_round_trip() {
        let department = Department {
            department_code: "HR_OPS".to_string(),
            department_name: "Human Resources".to_string(),
            gross_salary: dec("42000.00"),
        };

        let json = serde_json::to_string(&department).unwrap();
        let deserialized: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(department, deserialized);
    }

    #[test]
    fn test_gross_salary_serializes_as_string() {
        let department = Department {
            department_code: "IT".to_string(),
            department_name: "IT Dept".to_string(),
            gross_salary: dec("50000.00"),
        };

        let json = serde_json::to_string(&department).unwrap();
        assert!(json.contains("\"gross_salary\":\"50000.00\""));
    }
}
