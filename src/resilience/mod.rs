//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to upstream:
//!     → retry.rs (run attempt, check outcome)
//!     → On failure: backoff.rs (compute delay), sleep, retry
//!     → After budget: surface last failure to the service layer
//! ```
//!
//! # Design Decisions
//! - Fixed attempt budget shared by every upstream operation
//! - Deterministic exponential curve, no jitter
//! - Policy is an injectable config value, overridable per test

pub mod backoff;
pub mod retry;

pub use retry::retry;
