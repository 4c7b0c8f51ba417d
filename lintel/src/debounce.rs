//! Trailing-edge debounce on the tokio timer.

use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Coalesces bursts of calls into one action run `delay` after the last call.
///
/// Every [`call`](Debouncer::call) aborts the pending action and schedules the
/// new one. [`cancel`](Debouncer::cancel) drops the pending action without
/// running it; owners call it on unmount.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action`, replacing any pending one.
    ///
    /// Outside a tokio runtime there is no timer to wait on; the action runs
    /// immediately and a warning is logged.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            log::warn!("Debouncer used outside a tokio runtime; running action immediately");
            action();
            return;
        };

        // Deadline is fixed now, not when the task is first polled.
        let deadline = Instant::now() + self.delay;
        let task = handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action();
        });

        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Drop the pending action. Returns true if one was waiting.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
        match pending.take() {
            Some(task) => {
                let was_waiting = !task.is_finished();
                task.abort();
                was_waiting
            }
            None => false,
        }
    }

    /// True while an action is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
