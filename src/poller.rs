//! Periodic background refresh bound to a screen's lifetime.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// Runs a task immediately and then once per `period` until cancelled or
/// dropped. A tick never starts while the previous task is still running.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn spawn<F, Fut>(period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                task().await;
            }
        });

        debug!(period_secs = period.as_secs(), "poller started");
        Self { handle }
    }

    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("poller cancelled");
        }
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel();
    }
}
