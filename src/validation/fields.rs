//! Primitive field predicates.
//!
//! Each predicate is total (never panics) and pure: it inspects a single
//! raw value and answers whether the value is acceptable. Entity-level
//! validation in [`crate::engine`] combines these and attaches field names
//! and messages to failures.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Checks that a string's trimmed character count lies in `[min, max]`.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_string;
///
/// assert!(is_valid_string("  Jane  ", 1, 50));
/// assert!(!is_valid_string("   ", 1, 50));
/// ```
pub fn is_valid_string(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    len >= min && len <= max
}

/// Checks that a monetary amount lies in `[min, max]` with at most
/// `precision` fractional digits.
///
/// The fractional-digit count is judged on the decimal representation
/// (trailing zeros do not count against the limit), never by rounding a
/// binary float.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let max = Decimal::from_str("1000000").unwrap();
/// assert!(is_valid_money(Decimal::from_str("50000.00").unwrap(), Decimal::ZERO, max, 2));
/// assert!(!is_valid_money(Decimal::from_str("0.005").unwrap(), Decimal::ZERO, max, 2));
/// ```
pub fn is_valid_money(value: Decimal, min: Decimal, max: Decimal, precision: u32) -> bool {
    value >= min && value <= max && value.normalize().scale() <= precision
}

/// Checks that an integer lies in `[min, max]`.
pub fn is_valid_integer(value: i64, min: i64, max: i64) -> bool {
    value >= min && value <= max
}

/// Checks that a string is a calendar date in literal `YYYY-MM-DD` form.
///
/// The value must round-trip exactly through calendar normalization, so
/// `"2023-02-31"` and non-padded forms like `"2023-1-5"` are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_date;
///
/// assert!(is_valid_date("2023-01-31"));
/// assert!(!is_valid_date("2023-02-30"));
/// ```
pub fn is_valid_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string() == value,
        Err(_) => false,
    }
}

/// Checks that a string is a month token in literal 7-character `YYYY-MM`
/// form, with year in `[1900, 2100]` and month in `[1, 12]`.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_month;
///
/// assert!(is_valid_month("2023-01"));
/// assert!(!is_valid_month("2023-13"));
/// assert!(!is_valid_month("23-01"));
/// ```
pub fn is_valid_month(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || !bytes[5..].iter().all(u8::is_ascii_digit) {
        return false;
    }
    // The digit checks guarantee both parses succeed.
    let year: u32 = match value[..4].parse() {
        Ok(year) => year,
        Err(_) => return false,
    };
    let month: u32 = match value[5..].parse() {
        Ok(month) => month,
        Err(_) => return false,
    };
    (1900..=2100).contains(&year) && (1..=12).contains(&month)
}

/// Checks that a department code matches `[A-Za-z0-9_]{2,10}`.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_department_code;
///
/// assert!(is_valid_department_code("IT"));
/// assert!(!is_valid_department_code("I"));
/// assert!(!is_valid_department_code("IT_DEPARTMENT_LONG"));
/// ```
pub fn is_valid_department_code(value: &str) -> bool {
    let len = value.len();
    (2..=10).contains(&len)
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Checks that a gender value is one of the fixed enumeration
/// `Male` / `Female` / `Other`.
pub fn is_valid_gender(value: &str) -> bool {
    matches!(value, "Male" | "Female" | "Other")
}

/// Checks that a telephone number is composed only of digits, spaces,
/// dashes, parentheses and plus signs, with a trimmed length of at least 7.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::is_valid_phone;
///
/// assert!(is_valid_phone("+1 (555) 123-4567"));
/// assert!(!is_valid_phone("555-CALL"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+'))
        && value.trim().len() >= 7
}
