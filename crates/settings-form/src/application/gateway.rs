//! SettingsGateway: the port through which the form reaches the backend.
//!
//! The application layer only knows this trait.  Infrastructure provides an
//! HTTP implementation and an in-memory one; tests use mocks.

use async_trait::async_trait;
use settings_core::{PartialSettings, SettingsRecord};
use thiserror::Error;

/// Error type for gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The call did not succeed: network failure or an error response.
    ///
    /// `message` is the human-readable text the backend put in its error
    /// payload, if any.  `detail` is for logs only.
    #[error("settings backend call failed: {detail}")]
    Transport {
        message: Option<String>,
        detail: String,
    },

    /// The payload could not be encoded or decoded.
    #[error("settings payload could not be processed: {0}")]
    Payload(String),
}

impl GatewayError {
    /// A transport failure without a backend message.
    pub fn transport(detail: impl Into<String>) -> Self {
        GatewayError::Transport {
            message: None,
            detail: detail.into(),
        }
    }

    /// A transport failure carrying the backend's message.
    pub fn with_message(message: impl Into<String>, detail: impl Into<String>) -> Self {
        GatewayError::Transport {
            message: Some(message.into()),
            detail: detail.into(),
        }
    }

    /// The backend-supplied message, if there is one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            GatewayError::Transport { message, .. } => message.as_deref(),
            GatewayError::Payload(_) => None,
        }
    }

    /// Text to show the user: the backend message, else `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.backend_message().unwrap_or(fallback)
    }
}

/// Reads and writes the settings record.
///
/// `read` may return a partial record; missing fields mean "use defaults".
/// `write` replaces the stored record in full.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    async fn read(&self) -> Result<PartialSettings, GatewayError>;

    async fn write(&self, record: &SettingsRecord) -> Result<(), GatewayError>;
}
