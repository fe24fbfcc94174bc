//! Employee service subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler call
//!     → employees.rs (business logic, retry orchestration)
//!     → client (one upstream call per attempt)
//!     → error.rs taxonomy back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - NotFound is a business condition, never wrapped into Service
//! - The upstream client is held behind the EmployeeApi trait so tests
//!   can substitute a scripted double

pub mod employees;
pub mod error;

pub use employees::EmployeeService;
pub use error::EmployeeError;
