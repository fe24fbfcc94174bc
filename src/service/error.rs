//! Error taxonomy produced by the service layer.

use thiserror::Error;

/// Failures a service operation can surface to the HTTP layer.
///
/// `NotFound` is a business condition (zero matching results) and must
/// never be re-wrapped into `Service` further up the chain; the HTTP layer
/// relies on the distinction for status mapping.
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// A queried resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure, rate-limit exhaustion, or malformed upstream data.
    #[error("{0}")]
    Service(String),
}

impl EmployeeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EmployeeError::NotFound(_))
    }
}
