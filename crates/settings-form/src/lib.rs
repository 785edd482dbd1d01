//! settings-form library crate.
//!
//! The form side of the general settings screen: a controller that loads the
//! settings record, exposes an editable copy, validates and submits it, and
//! schedules a full reload once the backend accepted the new record.
//!
//! # Architecture
//!
//! ```text
//! Host UI (widgets, toasts, page reload)
//!         ↕
//! [settings-form]
//!   ├── application/      EditableSettings, SettingsFormController,
//!   │                     SettingsGateway / Notifier / ReloadScheduler ports
//!   └── infrastructure/
//!         ├── gateway/    reqwest HTTP gateway, in-memory gateway
//!         ├── notifier    tracing-backed notifier
//!         ├── reload      tokio reload timer
//!         └── config      client configuration (TOML)
//!         ↕
//! Settings backend  (JSON over HTTP, /api/admin/generalSettings)
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `settings-core` and its own port traits only.
//! - `infrastructure` implements the ports and may depend on everything.

pub mod application;
pub mod infrastructure;
