//! Monetary bounds shared across the consistency checks.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::validation::is_valid_money;

/// The maximum number of fractional digits a monetary amount may carry.
pub const MONEY_PRECISION: u32 = 2;

/// The upper bound accepted for any monetary amount.
pub fn money_ceiling() -> Decimal {
    Decimal::from(1_000_000u32)
}

/// The fixed tolerance absorbing client-side rounding when comparing net
/// salary against gross salary minus total deduction.
pub fn net_salary_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Checks a monetary amount against `[0, max]` with standard precision,
/// classifying the failure as a format or range error on `field`.
pub(super) fn check_money(field: &str, value: Decimal, max: Decimal) -> PayrollResult<()> {
    if is_valid_money(value, Decimal::ZERO, max, MONEY_PRECISION) {
        return Ok(());
    }
    if value.normalize().scale() > MONEY_PRECISION {
        return Err(PayrollError::InvalidFormat {
            field: field.to_string(),
            message: format!("at most {MONEY_PRECISION} fractional digits are allowed"),
        });
    }
    Err(PayrollError::OutOfRange {
        field: field.to_string(),
        message: format!("must lie between 0 and {max}"),
    })
}
