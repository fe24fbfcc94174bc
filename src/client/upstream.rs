//! HTTP client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue one HTTP call per operation (no internal retry)
//! - Deserialize the upstream `{data, status}` envelope
//! - Enforce a bounded per-call timeout
//!
//! # Design Decisions
//! - Expressed as a trait so the service layer never binds to a transport;
//!   tests substitute a scripted double
//! - Non-2xx statuses become errors here so the service can see 429s
//! - Business semantics (not-found, empty data) are the service's job

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::client::types::{ClientError, CreateEmployeeInput, DeleteEmployeeInput, Employee, Envelope};
use crate::config::UpstreamConfig;

/// Capability contract for the upstream employee API.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Fetch the full employee listing.
    async fn list_all(&self) -> Result<Envelope<Vec<Employee>>, ClientError>;

    /// Create an employee from the given input.
    async fn create(&self, input: &CreateEmployeeInput) -> Result<Envelope<Employee>, ClientError>;

    /// Delete an employee by name (the upstream has no id-based delete).
    async fn delete_by_name(&self, name: &str) -> Result<StatusCode, ClientError>;
}

/// Reqwest-backed implementation of [`EmployeeApi`].
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client against the configured upstream base URL.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status(
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            ))
        }
    }
}

#[async_trait]
impl EmployeeApi for UpstreamClient {
    async fn list_all(&self) -> Result<Envelope<Vec<Employee>>, ClientError> {
        tracing::debug!(url = %self.base_url, "Fetching employee listing from upstream");

        let response = self.http.get(&self.base_url).send().await?;
        let envelope = Self::check_status(response)?.json().await?;
        Ok(envelope)
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Envelope<Employee>, ClientError> {
        tracing::debug!(name = %input.name, "Creating employee upstream");

        let response = self.http.post(&self.base_url).json(input).send().await?;
        let envelope = Self::check_status(response)?.json().await?;
        Ok(envelope)
    }

    async fn delete_by_name(&self, name: &str) -> Result<StatusCode, ClientError> {
        tracing::debug!(name = %name, "Deleting employee upstream");

        let body = DeleteEmployeeInput { name: name.to_string() };
        let response = self.http.delete(&self.base_url).json(&body).send().await?;
        let status = response.status();

        Ok(StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY))
    }
}
