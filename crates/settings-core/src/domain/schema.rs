//! Shape of the general settings record.
//!
//! There is exactly one settings record per installation.  The backend owns
//! the durable copy; it is read in full when the settings screen opens and
//! replaced in full (never merged) on every save.
//!
//! Two shapes exist:
//!
//! - [`PartialSettings`] – what a read may return.  Any field can be missing.
//! - [`SettingsRecord`] – the full record after [`apply_defaults`].  Only
//!   `interval_minutes`, `port`, the API key and the working-hours window can
//!   still be absent; the validator decides whether that is acceptable.
//!
//! # Defaults
//!
//! | Field               | Default        |
//! |---------------------|----------------|
//! | `proxy_mode`        | `datacenter`   |
//! | `demo_mode`         | `false`        |
//! | `analytics_enabled` | `false`        |

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::clock_time::TimeOfDay;

/// Allowed values for the polling interval, in minutes (one day at most).
pub const INTERVAL_MINUTES_RANGE: RangeInclusive<u32> = 0..=1440;

/// Allowed values for the port the service listens on.
pub const PORT_RANGE: RangeInclusive<u32> = 0..=99_999;

/// Proxy pool used by the scraping service.
///
/// Datacenter proxies are cheaper but slower and fail more often; residential
/// proxies are faster and more reliable but cost more credits per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    #[default]
    Datacenter,
    Residential,
}

impl ProxyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyMode::Datacenter => "datacenter",
            ProxyMode::Residential => "residential",
        }
    }
}

impl fmt::Display for ProxyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "datacenter" => Ok(ProxyMode::Datacenter),
            "residential" => Ok(ProxyMode::Residential),
            other => Err(format!("unknown proxy mode: {other:?}")),
        }
    }
}

/// Scraping-service credentials and proxy selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapingService {
    /// Free-text API key.  Absent until the user enters one.
    pub api_key: Option<String>,
    pub proxy_mode: ProxyMode,
}

/// Daily window during which the service is active.
///
/// Both ends set means "only inside this window"; both absent means "around
/// the clock".  Exactly one end set is a partial window, which the validator
/// rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingHours {
    pub from: Option<TimeOfDay>,
    pub to: Option<TimeOfDay>,
}

impl WorkingHours {
    /// Returns `true` when exactly one of `from` / `to` is set.
    pub fn is_partial(&self) -> bool {
        self.from.is_some() != self.to.is_some()
    }

    /// Returns `true` when both ends are set.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// The full general settings record.
///
/// `Default` is the record a fresh installation starts with: no interval, no
/// port, datacenter proxies, no working hours, demo mode and analytics off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRecord {
    /// Minutes between two query runs.  Required before saving.
    pub interval_minutes: Option<u32>,
    /// Port the service listens on.  Required before saving.
    pub port: Option<u32>,
    pub scraping_service: ScrapingService,
    pub working_hours: WorkingHours,
    pub demo_mode: bool,
    pub analytics_enabled: bool,
}

/// Scraping-service section as returned by a read; the proxy may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialScrapingService {
    pub api_key: Option<String>,
    pub proxy_mode: Option<ProxyMode>,
}

/// A settings record in which any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSettings {
    pub interval_minutes: Option<u32>,
    pub port: Option<u32>,
    pub scraping_service: PartialScrapingService,
    pub working_hours: WorkingHours,
    pub demo_mode: Option<bool>,
    pub analytics_enabled: Option<bool>,
}

/// Fills in `proxy_mode`, `demo_mode` and `analytics_enabled` when they are
/// missing.  Every other field is carried over exactly as given, absent
/// optional fields included.
pub fn apply_defaults(partial: PartialSettings) -> SettingsRecord {
    SettingsRecord {
        interval_minutes: partial.interval_minutes,
        port: partial.port,
        scraping_service: ScrapingService {
            api_key: partial.scraping_service.api_key,
            proxy_mode: partial.scraping_service.proxy_mode.unwrap_or_default(),
        },
        working_hours: partial.working_hours,
        demo_mode: partial.demo_mode.unwrap_or(false),
        analytics_enabled: partial.analytics_enabled.unwrap_or(false),
    }
}

impl From<PartialSettings> for SettingsRecord {
    fn from(partial: PartialSettings) -> Self {
        apply_defaults(partial)
    }
}

impl From<SettingsRecord> for PartialSettings {
    fn from(record: SettingsRecord) -> Self {
        Self {
            interval_minutes: record.interval_minutes,
            port: record.port,
            scraping_service: PartialScrapingService {
                api_key: record.scraping_service.api_key,
                proxy_mode: Some(record.scraping_service.proxy_mode),
            },
            working_hours: record.working_hours,
            demo_mode: Some(record.demo_mode),
            analytics_enabled: Some(record.analytics_enabled),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
