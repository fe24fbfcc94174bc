//! Employee Gateway
//!
//! A stateless REST facade over a single upstream employee-management API,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌─────────────────────────────────────────────┐
//!                 │               EMPLOYEE GATEWAY               │
//!                 │                                             │
//!  Client ───────▶│  http (router, handlers, error mapping)     │
//!                 │        │                                    │
//!                 │        ▼                                    │
//!                 │  service (filters, aggregates, retries) ────┼──▶ Upstream
//!                 │        │                 ▲                  │    Employee
//!                 │        ▼                 │                  │    API
//!                 │  client (reqwest)   resilience (backoff)    │
//!                 │                                             │
//!                 │  cross-cutting: config, lifecycle, tracing  │
//!                 └─────────────────────────────────────────────┘
//! ```
//!
//! The gateway holds no data of its own; every response is a transient
//! mapping of upstream JSON, retried through a fixed exponential backoff
//! policy when the upstream rate-limits or fails.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod resilience;
pub mod service;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
