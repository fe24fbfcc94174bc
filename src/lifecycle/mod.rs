//! Process lifecycle subsystem.
//!
//! # Design Decisions
//! - Shutdown is a broadcast channel so the server and tests share one
//!   trigger mechanism
//! - Ctrl+C is wired in main; tests trigger shutdown directly

pub mod shutdown;

pub use shutdown::Shutdown;
