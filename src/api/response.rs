//! Response types for the reconciliation API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP responses.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ReconcileError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed-JSON error response.
    pub fn malformed_json(details: impl Into<String>) -> Self {
        Self::with_details(
            "MALFORMED_JSON",
            "Request body is not valid JSON",
            details,
        )
    }
}

/// An API error paired with the HTTP status it should be returned with.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code for the response.
    pub status: StatusCode,
    /// The error payload.
    pub error: ApiError,
}

impl From<ReconcileError> for ApiErrorResponse {
    fn from(err: ReconcileError) -> Self {
        let (status, code) = match &err {
            ReconcileError::ConfigNotFound { .. } | ReconcileError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            ReconcileError::CalendarNotFound { .. } => (StatusCode::NOT_FOUND, "CALENDAR_NOT_FOUND"),
            ReconcileError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            ReconcileError::OvertimeRecompute { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "OVERTIME_ERROR")
            }
        };

        Self {
            status,
            error: ApiError::new(code, err.to_string()),
        }
    }
}
