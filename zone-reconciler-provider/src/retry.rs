//! Transport-level retry with capped exponential backoff.
//!
//! Retry policy lives at this boundary, not in the reconciler core: the core
//! issues each remote call once and treats the outcome as final. Provider
//! implementations wrap their transport calls in [`with_retry`] so transient
//! failures (network errors, timeouts, rate limits) are absorbed before the
//! core ever sees them.

use std::time::Duration;

use crate::error::{ProviderError, Result};

/// Run `op`, retrying transient failures up to `max_retries` times.
///
/// Only errors for which [`ProviderError::is_retryable`] returns `true` are
/// retried. Business errors (zone missing, batch rejected) propagate
/// immediately — retrying them cannot succeed and, for batch submissions,
/// could double-apply side effects on an ambiguous failure.
///
/// # Backoff
///
/// Exponential: 100ms, 200ms, 400ms, ... capped at 10 seconds. A
/// [`RateLimited`](ProviderError::RateLimited) error carrying `retry_after`
/// waits that long instead (capped at 30 seconds).
pub async fn with_retry<T, F, Fut>(provider_name: &str, max_retries: u32, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 0..=max_retries {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries && e.is_retryable() => {
                let delay = retry_delay(&e, attempt);
                log::warn!(
                    "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                    provider_name,
                    attempt + 1,
                    max_retries,
                    delay.as_secs_f32(),
                    e
                );
                tokio::time::sleep(delay).await;
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
        provider: provider_name.to_string(),
        detail: "All retries exhausted with no error captured".to_string(),
    }))
}

/// Delay before the next attempt.
///
/// Uses the service-suggested `retry_after` (capped at 30s) when rate limited,
/// exponential backoff otherwise.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff delay: 100ms, 200ms, 400ms, 800ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
