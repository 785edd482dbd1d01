//! Integration tests for the settings contract.
//!
//! These tests go through the crate's public API only and check the
//! properties the form controller relies on: ordered validation, default
//! application, the clock-time mapping, and the backend wire format.

use chrono::NaiveDate;
use settings_core::{
    apply_defaults, decode_partial_str, encode_record, validate, PartialSettings, ProxyMode,
    SettingsRecord, TimeOfDay, ValidationError, ValidationResult, WorkingHours,
};

fn record(interval: Option<u32>, port: Option<u32>, hours: WorkingHours) -> SettingsRecord {
    SettingsRecord {
        interval_minutes: interval,
        port,
        working_hours: hours,
        ..SettingsRecord::default()
    }
}

fn nine() -> Option<TimeOfDay> {
    Some(TimeOfDay::new(9, 0).unwrap())
}

#[test]
fn test_validation_is_invalid_exactly_when_one_working_hour_end_is_set() {
    let presence = [None, nine()];
    for from in presence {
        for to in presence {
            let result = validate(&record(Some(15), Some(8080), WorkingHours { from, to }));
            let exactly_one = from.is_some() ^ to.is_some();
            if exactly_one {
                assert_eq!(
                    result,
                    ValidationResult::Invalid {
                        reason: ValidationError::WorkingHoursIncomplete
                    }
                );
            } else {
                assert_eq!(result, ValidationResult::Valid);
            }
        }
    }
}

#[test]
fn test_missing_interval_is_reported_first_regardless_of_other_fields() {
    let presence = [None, nine()];
    for port in [None, Some(8080)] {
        for from in presence {
            for to in presence {
                let result = validate(&record(None, port, WorkingHours { from, to }));
                assert_eq!(
                    result.into_result().map_err(|e| e.to_string()),
                    Err("Interval may not be empty.".to_string())
                );
            }
        }
    }
}

#[test]
fn test_defaults_are_idempotent_for_records_read_from_the_wire() {
    let bodies = [
        "{}",
        r#"{"interval": 10}"#,
        r#"{"scrapingAnt": {"proxy": "residential"}, "demoMode": true}"#,
        r#"{"workingHours": {"from": "7:00", "to": "19:00"}, "analyticsEnabled": true}"#,
    ];

    for body in bodies {
        let partial = decode_partial_str(body).unwrap();
        let once = apply_defaults(partial);
        let twice = apply_defaults(PartialSettings::from(once.clone()));
        assert_eq!(once, twice, "body: {body}");
    }
}

#[test]
fn test_clock_time_survives_same_day_timestamp_round_trip() {
    let day = NaiveDate::from_ymd_opt(2023, 3, 26).unwrap();
    for hour in 0..=23 {
        for minute in 0..=59 {
            let time = TimeOfDay::new(hour, minute).unwrap();
            let back = TimeOfDay::from_timestamp(time.on_day(day));
            assert_eq!((back.hour(), back.minute()), (hour, minute));
        }
    }
}

#[test]
fn test_record_read_with_missing_fields_is_written_back_with_defaults() {
    // Arrange: backend only knows interval and port
    let partial = decode_partial_str(r#"{"interval": 15, "port": 8080}"#).unwrap();

    // Act
    let record = apply_defaults(partial);
    let body = encode_record(&record).unwrap();

    // Assert
    assert_eq!(record.scraping_service.proxy_mode, ProxyMode::Datacenter);
    assert_eq!(body["scrapingAnt"]["proxy"], "datacenter");
    assert_eq!(body["demoMode"], false);
    assert_eq!(body["analyticsEnabled"], false);
    assert!(body["workingHours"]["from"].is_null());
}
