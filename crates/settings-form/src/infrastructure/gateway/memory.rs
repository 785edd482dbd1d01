//! In-process gateway for development and tests.
//!
//! Holds the stored record behind a mutex and replaces it in full on every
//! successful write, like the real backend.  Reads and writes can be primed
//! to fail until the failure is cleared.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use settings_core::{PartialSettings, SettingsRecord};
use tracing::debug;

use crate::application::gateway::{GatewayError, SettingsGateway};

/// A [`SettingsGateway`] that never leaves the process.
#[derive(Default)]
pub struct InMemorySettingsGateway {
    stored: Mutex<PartialSettings>,
    writes: Mutex<Vec<SettingsRecord>>,
    read_failure: Mutex<Option<GatewayError>>,
    write_failure: Mutex<Option<GatewayError>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemorySettingsGateway {
    /// Creates a gateway whose backend currently stores `initial`.
    pub fn new(initial: PartialSettings) -> Self {
        Self {
            stored: Mutex::new(initial),
            ..Self::default()
        }
    }

    /// Makes every following read fail with `error`.
    pub fn fail_reads_with(&self, error: GatewayError) {
        *lock(&self.read_failure) = Some(error);
    }

    /// Makes every following write fail with `error`.
    pub fn fail_writes_with(&self, error: GatewayError) {
        *lock(&self.write_failure) = Some(error);
    }

    pub fn clear_failures(&self) {
        *lock(&self.read_failure) = None;
        *lock(&self.write_failure) = None;
    }

    /// What a read would currently return.
    pub fn stored(&self) -> PartialSettings {
        lock(&self.stored).clone()
    }

    /// Every record accepted by `write`, oldest first.
    pub fn writes(&self) -> Vec<SettingsRecord> {
        lock(&self.writes).clone()
    }
}

#[async_trait]
impl SettingsGateway for InMemorySettingsGateway {
    async fn read(&self) -> Result<PartialSettings, GatewayError> {
        if let Some(err) = lock(&self.read_failure).clone() {
            return Err(err);
        }
        Ok(self.stored())
    }

    async fn write(&self, record: &SettingsRecord) -> Result<(), GatewayError> {
        if let Some(err) = lock(&self.write_failure).clone() {
            return Err(err);
        }
        debug!("in-memory settings replaced");
        *lock(&self.stored) = PartialSettings::from(record.clone());
        lock(&self.writes).push(record.clone());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
