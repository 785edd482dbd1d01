//! Pre-save validation of the settings record.
//!
//! Rules are evaluated in order and the first failure wins:
//!
//! 1. the interval must be present,
//! 2. the port must be present,
//! 3. the working-hours window must not be half set.
//!
//! [`validate`] is a pure function: no I/O, no logging, same input same answer.

use thiserror::Error;

use crate::domain::schema::SettingsRecord;

/// Why a record was rejected.  The `Display` text is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Interval may not be empty.")]
    IntervalMissing,

    #[error("Port may not be empty.")]
    PortMissing,

    #[error("Working hours to and from must be set if either to or from has been set before.")]
    WorkingHoursIncomplete,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: ValidationError },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Converts into a `Result` for callers that want to use `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { reason } => Err(reason),
        }
    }
}

/// Checks the record against the ordered rules listed in the module docs.
pub fn validate(record: &SettingsRecord) -> ValidationResult {
    let reason = if record.interval_minutes.is_none() {
        ValidationError::IntervalMissing
    } else if record.port.is_none() {
        ValidationError::PortMissing
    } else if record.working_hours.is_partial() {
        ValidationError::WorkingHoursIncomplete
    } else {
        return ValidationResult::Valid;
    };
    ValidationResult::Invalid { reason }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
