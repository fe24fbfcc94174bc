//! Employee business logic.
//!
//! # Responsibilities
//! - Orchestrate retries around every upstream-touching call
//! - Translate missing envelope data into service errors
//! - Filter, aggregate, and sort listings for the query endpoints
//!
//! # Design Decisions
//! - Every query derives from the full listing; the upstream exposes no
//!   single-employee or filtered endpoint
//! - An empty filter result is a NotFound condition, not an empty success
//! - Deletes resolve id → name via the listing first; the upstream only
//!   deletes by name

use std::sync::Arc;

use axum::http::StatusCode;
use thiserror::Error;

use crate::client::{ClientError, CreateEmployeeInput, Employee, EmployeeApi};
use crate::config::RetryConfig;
use crate::resilience::retry;
use crate::service::error::EmployeeError;

/// Failure of a single upstream attempt, as seen by the retry loop.
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("no data returned in upstream envelope")]
    MissingData,

    #[error("upstream delete reported status {0}")]
    DeleteFailed(StatusCode),
}

/// Business logic over the upstream employee API.
#[derive(Clone)]
pub struct EmployeeService {
    client: Arc<dyn EmployeeApi>,
    retry: RetryConfig,
}

impl EmployeeService {
    pub fn new(client: Arc<dyn EmployeeApi>, retry: RetryConfig) -> Self {
        Self { client, retry }
    }

    /// Fetch the full employee listing, retrying rate-limited and failed
    /// calls under the shared policy.
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        retry(&self.retry, |attempt| async move {
            tracing::info!(attempt, "Fetching all employees");
            let envelope = self.client.list_all().await.map_err(AttemptError::Client)?;
            envelope.data.ok_or(AttemptError::MissingData)
        })
        .await
        .map_err(|e| EmployeeError::Service(format!("failed to fetch employees: {}", e)))
    }

    /// Employees whose name contains `fragment`, case-insensitively.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>, EmployeeError> {
        tracing::info!(fragment = %fragment, "Searching employees by name");

        let needle = fragment.to_lowercase();
        let matches: Vec<Employee> = self
            .get_all_employees()
            .await?
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            return Err(EmployeeError::NotFound(format!(
                "no employees found with name containing: {}",
                fragment
            )));
        }

        Ok(matches)
    }

    /// Look up a single employee by id with a linear scan of the listing.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, EmployeeError> {
        tracing::info!(id = %id, "Fetching employee by id");

        self.get_all_employees()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EmployeeError::NotFound(format!("no employee found with id: {}", id)))
    }

    /// Highest salary across all employees.
    pub async fn highest_salary(&self) -> Result<i64, EmployeeError> {
        tracing::info!("Fetching highest salary");

        self.get_all_employees()
            .await?
            .iter()
            .map(|e| e.salary)
            .max()
            .ok_or_else(|| {
                EmployeeError::NotFound("no employees found to determine highest salary".into())
            })
    }

    /// Names of the top ten earners, descending by salary. Equal salaries
    /// keep their upstream listing order (stable sort).
    pub async fn top_ten_earning_names(&self) -> Result<Vec<String>, EmployeeError> {
        tracing::info!("Fetching top ten earning employee names");

        let mut employees = self.get_all_employees().await?;
        employees.sort_by(|a, b| b.salary.cmp(&a.salary));

        Ok(employees.into_iter().take(10).map(|e| e.name).collect())
    }

    /// Create an employee upstream and return the created record.
    pub async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, EmployeeError> {
        retry(&self.retry, |attempt| async move {
            tracing::info!(attempt, name = %input.name, "Creating employee");
            let envelope = self.client.create(input).await.map_err(AttemptError::Client)?;
            envelope.data.ok_or(AttemptError::MissingData)
        })
        .await
        .map_err(|e| EmployeeError::Service(format!("failed to create employee: {}", e)))
    }

    /// Delete the employee with the given id.
    ///
    /// Resolves the id to a name via the listing (inheriting `NotFound`
    /// from [`Self::get_by_id`]), then issues the delete-by-name call under
    /// the retry policy. Returns the deleted employee on success.
    pub async fn delete_by_id(&self, id: &str) -> Result<Employee, EmployeeError> {
        let employee = self.get_by_id(id).await?;
        let name = employee.name.clone();

        retry(&self.retry, |attempt| {
            let name = name.clone();
            async move {
                tracing::info!(attempt, id = %id, name = %name, "Deleting employee");
                let status = self
                    .client
                    .delete_by_name(&name)
                    .await
                    .map_err(AttemptError::Client)?;

                if status.is_success() {
                    Ok(())
                } else {
                    Err(AttemptError::DeleteFailed(status))
                }
            }
        })
        .await
        .map_err(|e| EmployeeError::Service(format!("failed to delete employee: {}", e)))?;

        Ok(employee)
    }
}
