//! Exponential backoff curve.

use std::time::Duration;

/// Calculate the delay before the next attempt.
///
/// `attempt` is the number of attempts already made. The curve is
/// `base * 2^(attempt-1)` capped at `max_ms`, with no jitter: callers of
/// this gateway are few and the upstream rate limit recovers on a fixed
/// window, so deterministic delays are preferred for predictable latency.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);

    Duration::from_millis(delay_ms.min(max_ms))
}
