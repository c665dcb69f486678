//! Field validation rules for the payroll engine.
//!
//! This module contains the pure, total predicates applied to raw field
//! values as they arrive over the wire. There is no entity-level schema
//! object: the consistency engine combines these field by field.

mod fields;

pub use fields::{
    is_valid_date, is_valid_department_code, is_valid_gender, is_valid_integer, is_valid_money,
    is_valid_month, is_valid_phone, is_valid_string,
};
