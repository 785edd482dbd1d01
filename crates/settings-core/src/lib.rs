//! # settings-core
//!
//! Shared library describing the installation-wide *general settings* record:
//! what fields it has, which defaults apply, which constraints are checked
//! before a save, and how the record travels to and from the backend.
//!
//! This crate has no dependencies on UI frameworks, HTTP clients or async
//! runtimes.  The form controller in `settings-form` builds on top of it.
//!
//! # Architecture overview
//!
//! - **`domain`** – The record itself ([`SettingsRecord`]), the partial shape
//!   returned by the backend ([`PartialSettings`]), [`apply_defaults`], and the
//!   [`TimeOfDay`] value type with its same-day timestamp mapping.
//!
//! - **`validation`** – The pure [`validate`] function and its ordered rules.
//!
//! - **`protocol`** – The JSON wire format spoken by the backend
//!   (`interval`, `scrapingAnt.proxy`, `workingHours.from`, ...) and the
//!   error-payload convention used to surface backend messages.

pub mod domain;
pub mod protocol;
pub mod validation;

// Re-export the most-used types at the crate root so callers can write
// `settings_core::SettingsRecord` instead of the full module path.
pub use domain::clock_time::{ClockTimeError, TimeOfDay};
pub use domain::schema::{
    apply_defaults, PartialScrapingService, PartialSettings, ProxyMode, ScrapingService,
    SettingsRecord, WorkingHours, INTERVAL_MINUTES_RANGE, PORT_RANGE,
};
pub use protocol::wire::{decode_partial, decode_partial_str, encode_record, WireError};
pub use validation::{validate, ValidationError, ValidationResult};
