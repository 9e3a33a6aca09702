//! Periodic background refresh.
//!
//! Responsibilities:
//! - Run a tick closure on a spawned task, immediately and then every period.
//! - Stop the task through a cancellation token.
//!
//! Invariants:
//! - `cancel` is idempotent; cancelling an idle poller is a no-op.
//! - Dropping a poller cancels it.
//! - A tick in progress finishes before the task observes cancellation.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a periodic background task.
#[derive(Debug)]
pub struct Poller {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// A poller that was never started.
    pub fn idle() -> Self {
        Self {
            token: CancellationToken::new(),
            handle: None,
        }
    }

    /// Spawns `tick` to run now and then every `period` until cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = child.cancelled() => break,
                    _ = interval.tick() => tick().await,
                }
            }
            debug!(poller = name, "Poller stopped");
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Stops the poller.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True while the background task is alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels and waits for the background task to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.await
        {
            debug!(error = %e, "Poller task ended abnormally");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
