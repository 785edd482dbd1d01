//! Clock time for the working-hours window.
//!
//! The durable record stores times as `"H:MM"` strings (`"9:05"`, `"18:30"`),
//! while time-picker widgets work with full timestamps.  [`TimeOfDay`] is the
//! lossless middle ground: an hour and a minute, nothing else.
//!
//! # Timestamp mapping
//!
//! [`TimeOfDay::on_day`] places the time on a given calendar day and
//! [`TimeOfDay::from_timestamp`] reads it back, ignoring the date and any
//! seconds.  For every valid `(hour, minute)` the round trip is the identity.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Errors produced when building or parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    /// Hour outside 0..=23 or minute outside 0..=59.
    #[error("time {hour}:{minute:02} is out of range")]
    OutOfRange { hour: u32, minute: u32 },

    /// The text is not of the form `H:MM` / `HH:MM`.
    #[error("malformed time of day: {0:?}")]
    Malformed(String),
}

/// An hour and minute on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ClockTimeError::OutOfRange`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ClockTimeError::OutOfRange { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minute)
    }

    /// Places this time on `day`, at second zero.
    pub fn on_day(self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.as_naive_time())
    }

    /// Reads the clock time of a timestamp.  The date and seconds are dropped.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self {
            hour: timestamp.hour() as u8,
            minute: timestamp.minute() as u8,
        }
    }

    fn as_naive_time(self) -> NaiveTime {
        // hour and minute are range-checked on construction
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Formats as `H:MM`: the hour is not padded, the minute always is.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ClockTimeError;

    /// Parses `H:MM` or `HH:MM`.  Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockTimeError::Malformed(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;

        let digits_only = |part: &str| {
            !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits_only(hour) || !digits_only(minute) {
            return Err(malformed());
        }

        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
