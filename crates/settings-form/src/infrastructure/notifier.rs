//! Notifier that reports through `tracing`.
//!
//! Headless hosts (and the integration tests) have no toast widget, so
//! notifications are logged and the most recent ones are kept for the host
//! to render or inspect.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::application::form_controller::{Notification, NotificationKind, Notifier};

/// How many notifications [`TracingNotifier`] keeps.  Older ones are dropped.
pub const NOTIFICATION_HISTORY_LIMIT: usize = 16;

/// Logs each notification (success at `info`, error at `warn`) and keeps the
/// last [`NOTIFICATION_HISTORY_LIMIT`] of them.
#[derive(Default)]
pub struct TracingNotifier {
    history: Mutex<VecDeque<Notification>>,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent notification, if any.
    pub fn latest(&self) -> Option<Notification> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .back()
            .cloned()
    }

    /// The retained notifications, oldest first.
    pub fn history(&self) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let text = &notification.message;
        match notification.kind {
            NotificationKind::Success => info!(%text, "user notified"),
            NotificationKind::Error => warn!(%text, "user notified of failure"),
        }
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() == NOTIFICATION_HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(notification);
    }
}
