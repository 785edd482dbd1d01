//! The editable copy of the settings record.
//!
//! [`EditableSettings`] is seeded from the loaded record and then mutated one
//! field at a time, the way form widgets report changes.  Nothing is validated
//! while editing; the controller validates on save.
//!
//! Number inputs behave like the widgets they back: text is stripped to its
//! digits before parsing, and values are clamped into the field's range.
//! Time pickers hand over same-day timestamps, which are reduced to clock time.

use chrono::{NaiveDate, NaiveDateTime};
use settings_core::{ProxyMode, SettingsRecord, TimeOfDay, INTERVAL_MINUTES_RANGE, PORT_RANGE};
use std::ops::RangeInclusive;

/// Locally mutable snapshot of the settings record for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableSettings {
    record: SettingsRecord,
}

fn clamp_into(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Keeps only the digits of `text`.  Returns `None` when nothing is left.
fn digits_of(text: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // Overlong input saturates at the upper bound.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    Some(clamp_into(value, range))
}

impl EditableSettings {
    /// Seeds the editable copy from a full record.
    pub fn from_record(record: SettingsRecord) -> Self {
        Self { record }
    }

    /// Snapshot of the current values, ready for validation and submission.
    pub fn to_record(&self) -> SettingsRecord {
        self.record.clone()
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    // ── Interval ──────────────────────────────────────────────────────────────

    pub fn interval_minutes(&self) -> Option<u32> {
        self.record.interval_minutes
    }

    /// Sets the interval, clamped into 0..=1440.  `None` clears the field.
    pub fn set_interval_minutes(&mut self, minutes: Option<u32>) {
        self.record.interval_minutes = minutes.map(|m| clamp_into(m, &INTERVAL_MINUTES_RANGE));
    }

    /// Sets the interval from raw input text.
    pub fn set_interval_input(&mut self, text: &str) {
        self.record.interval_minutes = digits_of(text, &INTERVAL_MINUTES_RANGE);
    }

    // ── Port ──────────────────────────────────────────────────────────────────

    pub fn port(&self) -> Option<u32> {
        self.record.port
    }

    /// Sets the port, clamped into 0..=99999.  `None` clears the field.
    pub fn set_port(&mut self, port: Option<u32>) {
        self.record.port = port.map(|p| clamp_into(p, &PORT_RANGE));
    }

    /// Sets the port from raw input text.
    pub fn set_port_input(&mut self, text: &str) {
        self.record.port = digits_of(text, &PORT_RANGE);
    }

    // ── Scraping service ──────────────────────────────────────────────────────

    pub fn api_key(&self) -> Option<&str> {
        self.record.scraping_service.api_key.as_deref()
    }

    /// Free text, stored as given.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.record.scraping_service.api_key = api_key;
    }

    pub fn proxy_mode(&self) -> ProxyMode {
        self.record.scraping_service.proxy_mode
    }

    pub fn set_proxy_mode(&mut self, mode: ProxyMode) {
        self.record.scraping_service.proxy_mode = mode;
    }

    // ── Working hours ─────────────────────────────────────────────────────────

    pub fn working_hours_from(&self) -> Option<TimeOfDay> {
        self.record.working_hours.from
    }

    pub fn set_working_hours_from(&mut self, from: Option<TimeOfDay>) {
        self.record.working_hours.from = from;
    }

    pub fn working_hours_to(&self) -> Option<TimeOfDay> {
        self.record.working_hours.to
    }

    pub fn set_working_hours_to(&mut self, to: Option<TimeOfDay>) {
        self.record.working_hours.to = to;
    }

    /// Time-picker change handler for the start of the window.
    pub fn set_working_hours_from_timestamp(&mut self, picked: Option<NaiveDateTime>) {
        self.set_working_hours_from(picked.map(TimeOfDay::from_timestamp));
    }

    /// Time-picker change handler for the end of the window.
    pub fn set_working_hours_to_timestamp(&mut self, picked: Option<NaiveDateTime>) {
        self.set_working_hours_to(picked.map(TimeOfDay::from_timestamp));
    }

    /// Value for the "from" time picker, placed on `day`.
    pub fn working_hours_from_on(&self, day: NaiveDate) -> Option<NaiveDateTime> {
        self.record.working_hours.from.map(|t| t.on_day(day))
    }

    /// Value for the "to" time picker, placed on `day`.
    pub fn working_hours_to_on(&self, day: NaiveDate) -> Option<NaiveDateTime> {
        self.record.working_hours.to.map(|t| t.on_day(day))
    }

    // ── Flags ─────────────────────────────────────────────────────────────────

    pub fn demo_mode(&self) -> bool {
        self.record.demo_mode
    }

    pub fn set_demo_mode(&mut self, enabled: bool) {
        self.record.demo_mode = enabled;
    }

    pub fn analytics_enabled(&self) -> bool {
        self.record.analytics_enabled
    }

    pub fn set_analytics_enabled(&mut self, enabled: bool) {
        self.record.analytics_enabled = enabled;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
