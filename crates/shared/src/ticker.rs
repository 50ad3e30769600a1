//! Cancellable periodic task on tokio
//!
//! `Ticker::start` is the activation and `cancel` (or drop) is the matching
//! cancellation. Cancelling more than once is a no-op.

use std::time::Duration;

use rocktober_core::ticker::run_periodic;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a running periodic task
#[derive(Debug)]
pub struct Ticker {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a task calling `on_tick` every `period`, first call one period from now
    pub fn start<F>(period: Duration, on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                () = run_periodic(period, tokio::time::sleep, on_tick) => {}
                () = cancelled.cancelled() => {
                    debug!("Ticker cancelled");
                }
            }
        });

        debug!("Ticker started: period={}ms", period.as_millis());

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Stop ticking; the callback is not invoked again
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel and wait for the task to finish
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
