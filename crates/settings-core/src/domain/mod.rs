//! Domain entities for the general settings record.
//!
//! Pure types with no I/O.  Everything here can be constructed and tested
//! without a backend, a runtime or a UI.

/// Field shapes, value ranges and default values.
pub mod schema;

/// Time-of-day values used by the working-hours window.
pub mod clock_time;
