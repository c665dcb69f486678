//! Payroll consistency engine.
//!
//! This module contains the entity-level validation operations that keep
//! salary, employee and department records mutually consistent: the
//! arithmetic invariant linking gross salary, deductions and net salary,
//! and the referential invariants linking salary records to employees and
//! employees to departments. All operations are synchronous, pure and
//! report failures as structured [`crate::error::PayrollError`] values.

mod admin;
mod department;
mod employee;
mod money;
mod salary;

pub use admin::validate_admin;
pub use department::validate_department;
pub use employee::validate_employee;
pub use money::{MONEY_PRECISION, money_ceiling, net_salary_tolerance};
pub use salary::{validate_salary_amounts, validate_salary_record};
