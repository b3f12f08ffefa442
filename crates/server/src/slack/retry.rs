//! Bounded retry with exponential backoff for Slack Web API calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use super::error::SlackError;

/// Upper bound for a single wait, including `Retry-After` hints.
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// How often and how patiently to retry a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Wait before the second attempt; doubles after each failure.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
        }
    }

    /// Wait after the given failed attempt (zero-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32, error: &SlackError) -> Duration {
        let backoff = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt));
        let hinted = match error {
            SlackError::RateLimited(secs) => backoff.max(Duration::from_secs(*secs)),
            _ => backoff,
        };
        hinted.min(MAX_BACKOFF)
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of
/// attempts. Returns the last error in the latter two cases.
pub async fn retry_with_backoff<F, Fut, T>(
    policy: RetryPolicy,
    method: &str,
    mut operation: F,
) -> Result<T, SlackError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SlackError>>,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_retryable() || attempt + 1 >= policy.max_attempts {
                    return Err(err);
                }

                let delay = policy.delay_for(attempt, &err);
                warn!(
                    method,
                    attempt = attempt + 1,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "Slack call failed, retrying"
                );

                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_succeeds_immediately() {
        let result = retry_with_backoff(fast_policy(3), "test", || async {
            Ok::<_, SlackError>(42)
        })
        .await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result = retry_with_backoff(fast_policy(3), "test", move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(SlackError::Status(503))
                } else {
                    Ok("sent")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "sent");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry_with_backoff(fast_policy(3), "test", move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(SlackError::Request("connection refused".to_string()))
            }
        })
        .await;

        assert!(matches!(result, Err(SlackError::Request(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<(), _> = retry_with_backoff(fast_policy(3), "test", move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(SlackError::Api("invalid_auth".to_string()))
            }
        })
        .await;

        assert!(matches!(result, Err(SlackError::Api(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delay_doubles_and_is_capped() {
        let policy = RetryPolicy::default();
        let err = SlackError::Status(500);

        assert_eq!(policy.delay_for(0, &err), Duration::from_millis(250));
        assert_eq!(policy.delay_for(1, &err), Duration::from_millis(500));
        assert_eq!(policy.delay_for(10, &err), MAX_BACKOFF);
    }

    #[test]
    fn test_delay_honors_rate_limit_hint() {
        let policy = RetryPolicy::default();

        assert_eq!(
            policy.delay_for(0, &SlackError::RateLimited(2)),
            Duration::from_secs(2)
        );
        assert_eq!(policy.delay_for(0, &SlackError::RateLimited(600)), MAX_BACKOFF);
    }

    #[test]
    fn test_none_policy() {
        let policy = RetryPolicy::none();
        assert_eq!(policy.max_attempts, 1);
    }
}
