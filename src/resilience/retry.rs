//! Retry execution around upstream calls.
//!
//! # Responsibilities
//! - Run an operation up to the configured attempt budget
//! - Sleep the exponential backoff between attempts
//! - Surface the last failure once the budget is exhausted
//!
//! # Design Decisions
//! - One fixed policy for every failure kind; rate-limited (429) and plain
//!   transport errors retry identically
//! - Backoff sleeps suspend only the calling task (`tokio::time::sleep`),
//!   never the runtime
//! - Dropping the future cancels the in-flight attempt and any pending sleep

use std::future::Future;

use crate::config::RetryConfig;
use crate::resilience::backoff::calculate_backoff;

/// Execute `op` under the given retry policy.
///
/// `op` receives the 1-based attempt number for logging. Returns the first
/// success, or the error from the final attempt.
pub async fn retry<T, E, F, Fut>(policy: &RetryConfig, mut op: F) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                let backoff = calculate_backoff(attempt, policy.base_delay_ms, policy.max_delay_ms);
                tracing::warn!(
                    attempt = attempt,
                    max_attempts = max_attempts,
                    delay = ?backoff,
                    error = %e,
                    "Upstream call failed, retrying after backoff"
                );
                tokio::time::sleep(backoff).await;
            }
            Err(e) => {
                tracing::error!(
                    attempts = attempt,
                    error = %e,
                    "Upstream call failed, retry budget exhausted"
                );
                return Err(e);
            }
        }
    }
}
