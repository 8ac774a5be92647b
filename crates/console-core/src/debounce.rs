use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

/// Sleep on whichever timer the target provides.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Sleep on whichever timer the target provides.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// A single-slot cancellable delay.
///
/// Scheduling a task aborts the previous one if its delay has not elapsed.
/// Only the delay is abortable: once a task has started running it is left
/// to finish.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel whatever is pending and return a future that waits out the
    /// delay, then runs `task`. The caller spawns it.
    pub fn schedule<F>(&mut self, task: F) -> impl Future<Output = ()> + 'static
    where
        F: Future<Output = ()> + 'static,
    {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);
        let delay = self.delay;

        async move {
            if Abortable::new(sleep(delay), registration).await.is_ok() {
                task.await;
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether the most recent schedule has not been cancelled.
    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_aborted())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
