//! Runtime-agnostic periodic loop
//!
//! The loop sleeps one period before each tick, so a loop dropped before
//! its first period elapses never ticks. Hosts supply their own sleep
//! future (tokio on native, browser timers on the web) and cancel by
//! dropping the future.

use std::future::Future;
use std::time::Duration;

/// Refresh period of the countdown views
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Call `on_tick` once per `period` until the returned future is dropped
pub async fn run_periodic<S, Fut, F>(period: Duration, mut sleep: S, mut on_tick: F)
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(),
{
    loop {
        sleep(period).await;
        on_tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        let task = tokio::spawn(run_periodic(TICK_PERIOD, tokio::time::sleep, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);

        task.abort();
        let _ = task.await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_before_first_period_never_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        let task = tokio::spawn(run_periodic(TICK_PERIOD, tokio::time::sleep, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        let task = tokio::spawn(run_periodic(
            Duration::from_millis(250),
            tokio::time::sleep,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        ));

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 4);

        task.abort();
        let _ = task.await;
    }
}
