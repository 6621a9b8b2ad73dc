//! Timer-based suspension.

use std::time::Duration;

/// Completes once at least `ms` milliseconds have elapsed.
///
/// Always yields to the scheduler at least once, so even `delay(0)` is
/// pending on its first poll.
pub async fn delay(ms: u64) {
    tracing::trace!(ms, "delay");
    tokio::task::yield_now().await;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::task::Poll;
    use tokio::time::Instant;

    #[tokio::test]
    async fn zero_delay_is_not_ready_on_first_poll() {
        let mut fut = Box::pin(delay(0));
        let first = std::future::poll_fn(|cx| Poll::Ready(fut.as_mut().poll(cx))).await;
        assert!(first.is_pending());
        fut.await;
    }

    #[tokio::test(start_paused = true)]
    async fn waits_at_least_requested_interval() {
        let start = Instant::now();
        delay(250).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
