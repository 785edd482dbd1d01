//! HTTP gateway to the settings backend.
//!
//! - read:  `GET  {base_url}{settings_path}` → JSON record (possibly partial)
//! - write: `POST {base_url}{settings_path}` with the full JSON record
//!
//! Any non-2xx response becomes [`GatewayError::Transport`].  If the body is a
//! JSON object with a `message`, that text is kept for the user.

use async_trait::async_trait;
use settings_core::protocol::wire::{decode_partial_str, encode_record, extract_error_message};
use settings_core::{PartialSettings, SettingsRecord};
use tracing::{debug, warn};

use crate::application::gateway::{GatewayError, SettingsGateway};
use crate::infrastructure::config::FormClientConfig;

/// [`SettingsGateway`] backed by a `reqwest` client.
pub struct HttpSettingsGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpSettingsGateway {
    /// Builds the HTTP client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the client cannot be built.
    pub fn new(config: &FormClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GatewayError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.settings_url(),
        })
    }

    pub fn settings_url(&self) -> &str {
        &self.url
    }

    /// Passes 2xx responses through and maps everything else to an error,
    /// keeping the backend's message when there is one.
    async fn check_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_else(|e| {
            warn!("failed to read error response body: {e}");
            String::new()
        });
        let detail = format!("{} {status}", self.url);
        Err(match extract_error_message(&body) {
            Some(message) => GatewayError::with_message(message, detail),
            None => GatewayError::transport(detail),
        })
    }
}

fn send_error(err: reqwest::Error) -> GatewayError {
    GatewayError::transport(format!("request failed: {err}"))
}

#[async_trait]
impl SettingsGateway for HttpSettingsGateway {
    async fn read(&self) -> Result<PartialSettings, GatewayError> {
        debug!(url = %self.url, "reading settings");
        let resp = self.client.get(&self.url).send().await.map_err(send_error)?;
        let resp = self.check_response(resp).await?;

        let body = resp.text().await.map_err(send_error)?;
        decode_partial_str(&body).map_err(|e| GatewayError::Payload(e.to_string()))
    }

    async fn write(&self, record: &SettingsRecord) -> Result<(), GatewayError> {
        let body = encode_record(record).map_err(|e| GatewayError::Payload(e.to_string()))?;

        debug!(url = %self.url, "writing settings");
        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;
        self.check_response(resp).await?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
