//! Runs an [`AsyncOperation`] under a [`ConfigOptions`].
//!
//! Every attempt is bounded by `timeout` ms (`0` = unbounded). Failed or
//! timed-out attempts are retried up to `retries` times with exponential
//! backoff.

use std::fmt::Display;
use std::time::Duration;
use strictkit_core::{AsyncOperation, ConfigOptions, Outcome, StrictkitError, StrictkitResult};

/// Backoff before the first retry. Doubles on each further retry.
pub const BASE_BACKOFF_MS: u64 = 100;
/// Upper bound for a single backoff.
pub const MAX_BACKOFF_MS: u64 = 5_000;

/// Runs `operation` until it succeeds or the retry budget is spent.
///
/// The failure message is the last attempt's error text, or the timeout
/// message if the last attempt timed out.
pub async fn run_with_options<T, E, Op>(options: &ConfigOptions, operation: &Op) -> Outcome<T>
where
    Op: AsyncOperation<Result<T, E>> + ?Sized,
    E: Display,
{
    match try_run_with_options(options, operation).await {
        Ok(data) => Outcome::success(data),
        Err(e) => Outcome::failure(failure_message(e)),
    }
}

/// Same retry loop as [`run_with_options`], keeping the last error typed:
/// [`StrictkitError::Timeout`] or [`StrictkitError::Operation`].
pub async fn try_run_with_options<T, E, Op>(
    options: &ConfigOptions,
    operation: &Op,
) -> StrictkitResult<T>
where
    Op: AsyncOperation<Result<T, E>> + ?Sized,
    E: Display,
{
    let max_retries = options.retries();
    let mut attempt = 0u32;

    loop {
        if options.debug() {
            tracing::info!(attempt, timeout_ms = options.timeout(), "running operation");
        } else {
            tracing::debug!(attempt, timeout_ms = options.timeout(), "running operation");
        }

        match attempt_once(options, operation).await {
            Ok(data) => return Ok(data),
            Err(e) if attempt < max_retries => {
                attempt += 1;
                let backoff = backoff_for(attempt);
                tracing::warn!(
                    attempt,
                    max_retries,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %e,
                    "operation failed, retrying"
                );
                tokio::time::sleep(backoff).await;
            }
            Err(e) => {
                tracing::warn!(attempts = attempt + 1, error = %e, "operation failed");
                return Err(e);
            }
        }
    }
}

async fn attempt_once<T, E, Op>(options: &ConfigOptions, operation: &Op) -> StrictkitResult<T>
where
    Op: AsyncOperation<Result<T, E>> + ?Sized,
    E: Display,
{
    let fut = operation.run();
    let result = if options.timeout() == 0 {
        fut.await
    } else {
        tokio::time::timeout(options.timeout_duration(), fut)
            .await
            .map_err(|_| StrictkitError::Timeout(options.timeout()))?
    };
    result.map_err(|e| StrictkitError::Operation(e.to_string()))
}

/// Delay before retry number `attempt` (1-based).
fn backoff_for(attempt: u32) -> Duration {
    let factor = 1u64
        .checked_shl(attempt.saturating_sub(1))
        .unwrap_or(u64::MAX);
    Duration::from_millis(BASE_BACKOFF_MS.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

fn failure_message(error: StrictkitError) -> String {
    match error {
        StrictkitError::Operation(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_for(1), Duration::from_millis(100));
        assert_eq!(backoff_for(2), Duration::from_millis(200));
        assert_eq!(backoff_for(3), Duration::from_millis(400));
        assert_eq!(backoff_for(7), Duration::from_millis(MAX_BACKOFF_MS));
        assert_eq!(backoff_for(200), Duration::from_millis(MAX_BACKOFF_MS));
    }

    #[test]
    fn operation_errors_keep_their_text() {
        assert_eq!(
            failure_message(StrictkitError::Operation("boom".into())),
            "boom"
        );
        assert_eq!(
            failure_message(StrictkitError::Timeout(50)),
            "Timed out after 50 ms"
        );
    }
}
