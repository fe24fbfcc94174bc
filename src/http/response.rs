//! Response shaping and central error-to-status mapping.
//!
//! # Responsibilities
//! - Map service errors to HTTP status codes in exactly one place
//! - Shape the JSON error body
//! - Degrade uncaught failures (panics) to a generic 500
//!
//! # Design Decisions
//! - NotFound → 404, Service → 500; no handler carries its own mapping
//! - Error bodies never expose internal detail beyond the operational
//!   message the service chose to surface

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::EmployeeError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub timestamp: u128,
}

impl ErrorBody {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let status = match &self {
            EmployeeError::NotFound(_) => StatusCode::NOT_FOUND,
            EmployeeError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            EmployeeError::NotFound(msg) => tracing::warn!(message = %msg, "Resource not found"),
            EmployeeError::Service(msg) => tracing::error!(message = %msg, "Service error"),
        }

        (status, Json(ErrorBody::new(status, self.to_string()))).into_response()
    }
}

/// Convert a handler panic into a generic 500 without leaking detail.
pub fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Unexpected panic while handling request");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (status, Json(ErrorBody::new(status, "An unexpected error occurred"))).into_response()
}
