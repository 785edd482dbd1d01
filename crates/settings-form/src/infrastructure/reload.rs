//! Reload timer on the tokio runtime.
//!
//! [`TokioReloadScheduler::new`] returns the scheduler together with the
//! receiving end of its event channel.  When the timer fires, one
//! [`ReloadRequested`] is sent; the host reacts by discarding all in-memory
//! state and mounting a fresh form.
//!
//! Arming the timer again replaces the previous one.  Dropping the scheduler
//! cancels a pending timer.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::form_controller::ReloadScheduler;

/// Emitted when the reload delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadRequested;

/// [`ReloadScheduler`] backed by `tokio::time::sleep` on a spawned task.
///
/// `schedule_reload` must be called from within a tokio runtime.
pub struct TokioReloadScheduler {
    events: mpsc::UnboundedSender<ReloadRequested>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TokioReloadScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ReloadRequested>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            events: tx,
            pending: Mutex::new(None),
        };
        (scheduler, rx)
    }

    /// Returns `true` while a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending_slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn pending_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReloadScheduler for TokioReloadScheduler {
    fn schedule_reload(&self, delay: Duration) {
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(ReloadRequested).is_err() {
                debug!("reload fired but nobody is listening");
            }
        });

        if let Some(previous) = self.pending_slot().replace(handle) {
            previous.abort();
        }
        debug!(?delay, "reload scheduled");
    }

    fn cancel(&self) {
        if let Some(handle) = self.pending_slot().take() {
            handle.abort();
            debug!("pending reload cancelled");
        }
    }
}

impl Drop for TokioReloadScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
