//! SettingsFormController: drives one editing session of the settings screen.
//!
//! # State machine
//!
//! ```text
//!            load() ok                 save(): valid        write ok
//! Loading ─────────────► Ready ───────────────────► Saving ───────────► Reloading
//!    │                    ▲  │                         │
//!    │ load() failed      │  │ save(): invalid         │ write failed
//!    ▼                    │  └──► Ready (notified)     │
//! Unavailable             └────────────────────────────┘
//! ```
//!
//! - `Loading` is the initial state and is never revisited.
//! - `Ready` is the only state in which fields may be edited or a save started.
//! - `Reloading` is terminal for this controller: the host performs a full
//!   reload once the [`ReloadScheduler`] fires, and a fresh controller starts
//!   over in `Loading`.
//! - `Unavailable` is entered when the initial read fails.  Editing and saving
//!   are blocked; the user was notified and has to reopen the screen.
//! - `Saving` only lasts while the write is awaited.  If the `save` future is
//!   dropped early (a host-side timeout, say), the form is `Ready` again.
//!
//! Both async operations take `&mut self`, so at most one gateway call is in
//! flight per controller.  No call is retried automatically.
//!
//! # Collaborators
//!
//! The controller depends only on traits injected at construction time:
//! [`SettingsGateway`] for I/O, [`Notifier`] for toast-style feedback and
//! [`ReloadScheduler`] for the delayed full reload.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use settings_core::{apply_defaults, validate, ValidationError, ValidationResult};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::editable::EditableSettings;
use super::gateway::SettingsGateway;

/// Delay between a successful save and the full reload.
pub const RELOAD_DELAY: Duration = Duration::from_secs(3);

pub const STORE_SUCCESS_MESSAGE: &str =
    "Settings stored successfully. We will reload your browser in 3 seconds.";

/// Shown when a write fails and the backend did not supply a message.
pub const STORE_FAILURE_MESSAGE: &str = "Error while trying to store settings.";

/// Shown when the initial read fails and the backend did not supply a message.
pub const LOAD_FAILURE_MESSAGE: &str = "Error while trying to load settings.";

// ── Ports ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing message (a toast, in a browser UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Delivers notifications to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Performs the delayed full reload after a successful save.
///
/// Implementations must not block: `schedule_reload` arms a timer and
/// returns.  `cancel` disarms a pending timer and is a no-op otherwise.
#[cfg_attr(test, mockall::automock)]
pub trait ReloadScheduler: Send + Sync {
    fn schedule_reload(&self, delay: Duration);

    fn cancel(&self);
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Current phase of the editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready,
    Saving,
    Reloading,
    Unavailable,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormState::Loading => "loading",
            FormState::Ready => "ready",
            FormState::Saving => "saving",
            FormState::Reloading => "reloading",
            FormState::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

/// Misuse of the controller.  User-facing failures are never reported this
/// way; they go through the [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("cannot {operation} while the settings form is {state}")]
    InvalidState {
        operation: &'static str,
        state: FormState,
    },
}

/// What a call to [`SettingsFormController::save`] ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The backend accepted the record; a reload is scheduled.
    Stored,
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The backend call failed; the message shown to the user is included.
    Failed(String),
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Holds the form in `Saving` for the duration of a write.
///
/// If the `save` future is dropped before the write completes, the form falls
/// back to `Ready` with the edits intact.
struct SavingGuard<'a> {
    state: &'a mut FormState,
    settled: bool,
}

impl<'a> SavingGuard<'a> {
    fn enter(state: &'a mut FormState) -> Self {
        *state = FormState::Saving;
        Self {
            state,
            settled: false,
        }
    }

    fn finish(mut self, next: FormState) {
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("save abandoned before the write completed, form is editable again");
            *self.state = FormState::Ready;
        }
    }
}

/// Orchestrates load → edit → validate → submit → notify → reload.
pub struct SettingsFormController {
    gateway: Arc<dyn SettingsGateway>,
    notifier: Arc<dyn Notifier>,
    reload: Arc<dyn ReloadScheduler>,
    state: FormState,
    fields: Option<EditableSettings>,
}

impl SettingsFormController {
    /// Creates a controller in [`FormState::Loading`].  Call [`load`] next.
    ///
    /// [`load`]: SettingsFormController::load
    pub fn new(
        gateway: Arc<dyn SettingsGateway>,
        notifier: Arc<dyn Notifier>,
        reload: Arc<dyn ReloadScheduler>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            reload,
            state: FormState::Loading,
            fields: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// The editable copy, once loaded.
    pub fn fields(&self) -> Option<&EditableSettings> {
        self.fields.as_ref()
    }

    fn require(&self, operation: &'static str, expected: FormState) -> Result<(), FormError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(FormError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    /// Reads the record, applies defaults and seeds the editable copy.
    ///
    /// On a read failure the user is notified and the form becomes
    /// [`FormState::Unavailable`]; this is not an `Err`.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidState`] unless the form is still `Loading`.
    pub async fn load(&mut self) -> Result<(), FormError> {
        self.require("load settings", FormState::Loading)?;

        match self.gateway.read().await {
            Ok(partial) => {
                let record = apply_defaults(partial);
                debug!(interval = ?record.interval_minutes, port = ?record.port, "settings loaded");
                self.fields = Some(EditableSettings::from_record(record));
                self.state = FormState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "failed to load settings");
                self.notifier
                    .notify(Notification::error(err.user_message(LOAD_FAILURE_MESSAGE)));
                self.state = FormState::Unavailable;
            }
        }
        Ok(())
    }

    /// Applies one or more field changes to the editable copy.
    ///
    /// ```rust,ignore
    /// controller.edit(|f| f.set_port(Some(9998)))?;
    /// ```
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidState`] unless the form is `Ready`.
    pub fn edit<R>(
        &mut self,
        change: impl FnOnce(&mut EditableSettings) -> R,
    ) -> Result<R, FormError> {
        self.require("edit settings", FormState::Ready)?;
        match self.fields.as_mut() {
            Some(fields) => Ok(change(fields)),
            None => Err(FormError::InvalidState {
                operation: "edit settings",
                state: self.state,
            }),
        }
    }

    /// Validates the editable copy and, if valid, writes it to the backend.
    ///
    /// Every outcome is reported through the [`Notifier`] exactly once.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidState`] unless the form is `Ready`.  No
    /// notification is sent and no call is made in that case.
    pub async fn save(&mut self) -> Result<SaveOutcome, FormError> {
        self.require("save settings", FormState::Ready)?;
        let record = match self.fields.as_ref() {
            Some(fields) => fields.to_record(),
            None => {
                return Err(FormError::InvalidState {
                    operation: "save settings",
                    state: self.state,
                })
            }
        };

        if let ValidationResult::Invalid { reason } = validate(&record) {
            debug!(%reason, "settings rejected by validation");
            self.notifier.notify(Notification::error(reason.to_string()));
            return Ok(SaveOutcome::Rejected(reason));
        }

        let saving = SavingGuard::enter(&mut self.state);
        let written = self.gateway.write(&record).await;

        match written {
            Ok(()) => {
                saving.finish(FormState::Reloading);
                info!("settings stored, reloading in {:?}", RELOAD_DELAY);
                self.notifier.notify(Notification::success(STORE_SUCCESS_MESSAGE));
                self.reload.schedule_reload(RELOAD_DELAY);
                Ok(SaveOutcome::Stored)
            }
            Err(err) => {
                saving.finish(FormState::Ready);
                warn!(error = %err, "failed to store settings");
                let message = err.user_message(STORE_FAILURE_MESSAGE).to_string();
                self.notifier.notify(Notification::error(message.clone()));
                Ok(SaveOutcome::Failed(message))
            }
        }
    }

    /// Tears the session down: a pending reload is cancelled and the editable
    /// copy is discarded.
    pub fn unmount(self) {
        if self.state == FormState::Reloading {
            debug!("unmounted with a pending reload, cancelling it");
            self.reload.cancel();
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
