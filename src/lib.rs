//! Payroll validation, consistency and monthly reporting engine.
//!
//! This crate provides the data-consistency core of an employee payroll
//! management service: field validation rules, cross-field and referential
//! checks for departments, employees and salary records, and a monthly
//! report aggregator, together with an in-memory store and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
pub mod validation;
