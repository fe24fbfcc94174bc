//! Upstream employee API client subsystem.
//!
//! # Data Flow
//! ```text
//! service layer call
//!     → upstream.rs (one HTTP request via reqwest)
//!     → types.rs (envelope + wire model deserialization)
//!     → Result<Envelope<T>, ClientError> back to the service
//! ```

pub mod types;
pub mod upstream;

pub use types::{ClientError, CreateEmployeeInput, DeleteEmployeeInput, Employee, Envelope};
pub use upstream::{EmployeeApi, UpstreamClient};
