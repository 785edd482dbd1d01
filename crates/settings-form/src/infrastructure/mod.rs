//! Infrastructure layer for the settings form.
//!
//! Contains the adapters behind the application ports: backend gateways,
//! the notifier, the reload timer, and the client configuration they share.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `settings_core`, but MUST NOT be imported by the `application` layer.

pub mod config;
pub mod gateway;
pub mod notifier;
pub mod reload;

pub use config::{ConfigError, FormClientConfig};
pub use gateway::{HttpSettingsGateway, InMemorySettingsGateway};
pub use notifier::{TracingNotifier, NOTIFICATION_HISTORY_LIMIT};
pub use reload::{ReloadRequested, TokioReloadScheduler};
