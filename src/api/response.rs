//! Response types for the payroll API.
//!
//! This module defines the error response structures and the mapping from
//! [`PayrollError`] values to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The offending field, when the error is attached to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Creates a new API error attached to a field.
    pub fn with_field(
        code: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a generic validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// A plain confirmation message, returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable confirmation.
    pub message: String,
}

impl ApiMessage {
    /// Creates a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response from a bare error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let status = match &error {
            PayrollError::InvalidFormat { .. }
            | PayrollError::OutOfRange { .. }
            | PayrollError::UnknownEmployee { .. }
            | PayrollError::UnknownDepartment { .. }
            | PayrollError::NetSalaryMismatch { .. }
            | PayrollError::DeductionExceedsGross { .. } => StatusCode::BAD_REQUEST,
            PayrollError::DuplicateKey { .. } => StatusCode::CONFLICT,
            PayrollError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match error.field() {
            Some(field) => ApiError::with_field(error.code(), error.to_string(), field),
            None => ApiError::new(error.code(), error.to_string()),
        };

        ApiErrorResponse {
            status,
            error: body,
        }
    }
}
