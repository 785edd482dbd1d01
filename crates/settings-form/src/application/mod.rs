//! Application layer for the settings form.
//!
//! Use cases here orchestrate the `settings-core` types and talk to the
//! outside world only through traits, so they run unchanged against a real
//! backend or a test double.
//!
//! # Sub-modules
//!
//! - **`editable`**        – The transient, locally mutable copy of the record
//!   with one setter per field.
//! - **`gateway`**         – The `SettingsGateway` port and its error type.
//! - **`form_controller`** – The `Loading → Ready → Saving → Reloading` state
//!   machine and the `Notifier` / `ReloadScheduler` ports it drives.

pub mod editable;
pub mod form_controller;
pub mod gateway;

pub use editable::EditableSettings;
pub use form_controller::{
    FormError, FormState, Notification, NotificationKind, Notifier, ReloadScheduler,
    SaveOutcome, SettingsFormController, LOAD_FAILURE_MESSAGE, RELOAD_DELAY,
    STORE_FAILURE_MESSAGE, STORE_SUCCESS_MESSAGE,
};
pub use gateway::{GatewayError, SettingsGateway};
