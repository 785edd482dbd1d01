//! Client-side configuration for reaching the settings backend.
//!
//! The host hands the configuration over as TOML text; nothing here reads
//! files or environment variables.  Every field has a default so an empty
//! document is a valid configuration:
//!
//! ```toml
//! base_url = "http://localhost:9998"
//! settings_path = "/api/admin/generalSettings"
//! request_timeout_secs = 10
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML content could not be parsed.
    #[error("failed to parse form client config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `base_url` is not an http(s) URL.
    #[error("base_url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Where the settings endpoint lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormClientConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the settings endpoint; used for both read and write.
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// Per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "http://localhost:9998".to_string()
}
fn default_settings_path() -> String {
    "/api/admin/generalSettings".to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for FormClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            settings_path: default_settings_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FormClientConfig {
    /// Parses and checks a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, [`ConfigError::InvalidBaseUrl`]
    /// when `base_url` is not http(s).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FormClientConfig = toml::from_str(content)?;
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(config.base_url));
        }
        Ok(config)
    }

    /// Full URL of the settings endpoint.  Slashes at the join are normalised.
    pub fn settings_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.settings_path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
