//! Wire types for the upstream employee API.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic response envelope the upstream wraps every payload in.
///
/// A 2xx response with `data` absent still counts as a failure; callers
/// must check the payload, not just the transport outcome.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub status: Option<String>,
}

/// Employee snapshot as listed by the upstream.
///
/// Ids are unique within a single listing but nothing here persists them,
/// so they are not guaranteed stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    pub id: String,

    #[serde(rename = "employee_name")]
    pub name: String,

    #[serde(rename = "employee_salary")]
    pub salary: i64,

    #[serde(rename = "employee_age")]
    pub age: u32,

    #[serde(rename = "employee_title")]
    pub title: String,

    #[serde(rename = "employee_email")]
    pub email: Option<String>,
}

/// Payload for creating an employee; forwarded to the upstream verbatim.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: i64,
    pub age: u32,
    pub title: String,
}

/// Payload for deleting an employee. The upstream identifies the deletion
/// target by name, not id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

/// Errors surfaced by the upstream client.
///
/// The client does not interpret business semantics; it only distinguishes
/// a non-2xx status from a transport-level failure so the service layer can
/// recognize rate limiting.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Connection failure, timeout, or malformed response body.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status(status) => Some(*status),
            ClientError::Transport(e) => {
                e.status().and_then(|s| StatusCode::from_u16(s.as_u16()).ok())
            }
        }
    }

    /// Whether the upstream rejected the call for exceeding its rate limit.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}
