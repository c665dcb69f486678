//! HTTP request handlers for the payroll API.
//!
//! Each mutating handler runs the consistency engine over the raw request
//! before touching the store; the store re-checks referential and
//! uniqueness constraints as a second line of defense, and both surfaces
//! report failures through the same error taxonomy.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{
    validate_admin, validate_department, validate_employee, validate_salary_amounts,
    validate_salary_record,
};
use crate::error::PayrollError;
use crate::models::{
    AdminUser, Department, Employee, EmployeeWithDepartment, MonthlyReport, SalaryRecord,
    SalaryWithContext,
};
use crate::report::build_monthly_report;
use crate::validation::is_valid_month;

use super::request::{
    DepartmentRequest, EmployeeRequest, RegisterAdminRequest, SalaryRequest, SalaryUpdateRequest,
};
use super::response::{ApiError, ApiErrorResponse, ApiMessage};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/api/register-admin", post(register_admin_handler))
        .route(
            "/api/departments",
            post(create_department_handler).get(list_departments_handler),
        )
        .route("/api/departments/:code", delete(delete_department_handler))
        .route(
            "/api/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/api/employees/:employee_number",
            get(get_employee_handler).delete(delete_employee_handler),
        )
        .route(
            "/api/salaries",
            post(create_salary_handler).get(list_salaries_handler),
        )
        .route(
            "/api/salaries/:id",
            put(update_salary_handler).delete(delete_salary_handler),
        )
        .route("/api/reports/monthly/:month", get(monthly_report_handler))
        .with_state(state)
}

/// Translates a JSON extraction failure into an API error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {err}"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Logs a rejected operation and converts the error for the wire.
fn reject(correlation_id: Uuid, error: PayrollError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, code = error.code(), error = %error, "Request rejected");
    error.into()
}

/// Handler for `GET /`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Employee Payroll Management System API is running"
    }))
}

/// Handler for `POST /api/register-admin`.
///
/// Registration is permanently disabled once an administrator exists; the
/// gate lives in the store so racing requests cannot both succeed.
async fn register_admin_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterAdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AdminUser>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(correlation_id, r))?;

    validate_admin(&request.username, &request.password_hash)
        .map_err(|e| reject(correlation_id, e))?;

    let mut store = state.store().write().await;
    let admin = store
        .register_admin(&request.username, &request.password_hash)
        .map_err(|e| reject(correlation_id, e))?;

    info!(correlation_id = %correlation_id, username = %admin.username, "Administrator registered");
    Ok((StatusCode::CREATED, Json(admin)))
}

/// Handler for `POST /api/departments`.
async fn create_department_handler(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Department>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(correlation_id, r))?;

    let mut store = state.store().write().await;
    let accepted = validate_department(request.into(), &store.department_codes())
        .map_err(|e| reject(correlation_id, e))?;
    let department = store
        .insert_department(accepted)
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        department_code = %department.department_code,
        "Department created"
    );
    Ok((StatusCode::CREATED, Json(department)))
}

/// Handler for `GET /api/departments`.
async fn list_departments_handler(State(state): State<AppState>) -> Json<Vec<Department>> {
    let store = state.store().read().await;
    Json(store.list_departments())
}

/// Handler for `DELETE /api/departments/{code}`.
async fn delete_department_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiMessage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let mut store = state.store().write().await;
    let detached = store
        .delete_department(&code)
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        department_code = %code,
        detached_employees = detached,
        "Department deleted"
    );
    Ok(Json(ApiMessage::new("Department deleted successfully")))
}

/// Handler for `POST /api/employees`.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(correlation_id, r))?;

    let mut store = state.store().write().await;
    let accepted = validate_employee(request.into(), Some(&store.department_codes()))
        .map_err(|e| reject(correlation_id, e))?;
    let employee = store
        .insert_employee(accepted)
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_number = employee.employee_number,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for `GET /api/employees`.
async fn list_employees_handler(
    State(state): State<AppState>,
) -> Json<Vec<EmployeeWithDepartment>> {
    let store = state.store().read().await;
    Json(store.list_employees())
}

/// Handler for `GET /api/employees/{employee_number}`.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_number): Path<u32>,
) -> Result<Json<EmployeeWithDepartment>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let store = state.store().read().await;
    let employee = store
        .get_employee(employee_number)
        .map_err(|e| reject(correlation_id, e))?;
    Ok(Json(employee))
}

/// Handler for `DELETE /api/employees/{employee_number}`.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(employee_number): Path<u32>,
) -> Result<Json<ApiMessage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let mut store = state.store().write().await;
    let cascaded = store
        .delete_employee(employee_number)
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_number,
        cascaded_salary_records = cascaded,
        "Employee deleted"
    );
    Ok(Json(ApiMessage::new("Employee deleted successfully")))
}

/// Handler for `POST /api/salaries`.
async fn create_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SalaryRecord>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(correlation_id, r))?;

    let mut store = state.store().write().await;
    let accepted = validate_salary_record(request.into(), &store.employee_numbers())
        .map_err(|e| reject(correlation_id, e))?;
    let record = store
        .insert_salary(accepted)
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        salary_id = record.id,
        employee_number = record.employee_number,
        month = %record.month,
        "Salary record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for `GET /api/salaries`.
async fn list_salaries_handler(State(state): State<AppState>) -> Json<Vec<SalaryWithContext>> {
    let store = state.store().read().await;
    Json(store.list_salaries())
}

/// Handler for `PUT /api/salaries/{id}`.
///
/// Updates never move a record to another employee, so only the amount
/// and month checks of the engine run here.
async fn update_salary_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    payload: Result<Json<SalaryUpdateRequest>, JsonRejection>,
) -> Result<Json<SalaryRecord>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| rejection_response(correlation_id, r))?;

    validate_salary_amounts(
        request.gross_salary,
        request.total_deduction,
        request.net_salary,
        &request.month,
    )
    .map_err(|e| reject(correlation_id, e))?;

    let mut store = state.store().write().await;
    let record = store
        .update_salary(id, request.into())
        .map_err(|e| reject(correlation_id, e))?;

    info!(correlation_id = %correlation_id, salary_id = id, "Salary record updated");
    Ok(Json(record))
}

/// Handler for `DELETE /api/salaries/{id}`.
async fn delete_salary_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiMessage>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let mut store = state.store().write().await;
    store
        .delete_salary(id)
        .map_err(|e| reject(correlation_id, e))?;

    info!(correlation_id = %correlation_id, salary_id = id, "Salary record deleted");
    Ok(Json(ApiMessage::new("Salary record deleted successfully")))
}

/// Handler for `GET /api/reports/monthly/{month}`.
async fn monthly_report_handler(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<MonthlyReport>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    if !is_valid_month(&month) {
        return Err(reject(
            correlation_id,
            PayrollError::InvalidFormat {
                field: "month".to_string(),
                message: "expected YYYY-MM with year between 1900 and 2100".to_string(),
            },
        ));
    }

    let store = state.store().read().await;
    let report = build_monthly_report(&month, store.report_rows(&month));

    info!(
        correlation_id = %correlation_id,
        month = %month,
        row_count = report.rows.len(),
        "Monthly report generated"
    );
    Ok(Json(report))
}
