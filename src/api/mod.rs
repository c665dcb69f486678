//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing departments,
//! employees, salary records and the administrator account, and for
//! requesting the monthly payroll report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DepartmentRequest, EmployeeRequest, RegisterAdminRequest, SalaryRequest, SalaryUpdateRequest,
};
pub use response::{ApiError, ApiMessage};
pub use state::AppState;
