//! Bounded retry with sleep backoff for transient git lock conflicts.
//!
//! Concurrent git invocations against the same repository occasionally
//! collide on `.git/index.lock` and friends. This helper re-runs an
//! operation a bounded number of times, sleeping between attempts with a
//! doubling delay. It is intended for harness code wrapping mutating git
//! calls under contention; the interrogation operations in [`crate::git`]
//! never retry on their own.

use crate::error::Result;
use std::time::Duration;

/// Retry configuration: attempt count and backoff shape
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: usize,
    /// Delay before the first retry; doubles on each subsequent one
    pub base_delay: Duration,
    /// Upper bound the doubling delay is capped at
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

/// Run `operation` with retries on transient lock errors.
///
/// Errors for which [`crate::Error::is_transient_lock`] returns `false`
/// propagate immediately; the last error is returned once the attempt
/// budget is exhausted.
pub fn retry_with_backoff<T, F>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut delay = policy.base_delay;

    for attempt in 0..=policy.max_retries {
        match operation() {
            Ok(value) => return Ok(value),
            Err(e) if attempt == policy.max_retries => return Err(e),
            Err(e) => {
                if !e.is_transient_lock() {
                    return Err(e);
                }

                log::warn!(
                    "attempt {} failed: {}. Retrying in {:.1}s...",
                    attempt + 1,
                    e,
                    delay.as_secs_f64()
                );

                std::thread::sleep(delay);
                delay = std::cmp::min(delay * 2, policy.max_delay);
            }
        }
    }

    unreachable!("loop returns on success, final error, or permanent error")
}
