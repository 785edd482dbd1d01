//! JSON codec for the settings endpoint.
//!
//! Wire format (full record, as sent on write):
//! ```json
//! {
//!   "interval": 15,
//!   "port": 8080,
//!   "scrapingAnt": { "apiKey": "abc", "proxy": "datacenter" },
//!   "workingHours": { "from": "9:00", "to": "17:30" },
//!   "demoMode": false,
//!   "analyticsEnabled": false
//! }
//! ```
//!
//! On write, absent working-hour times are sent as `null` and an absent API
//! key is omitted.  On read the decoder is tolerant: any key may be missing,
//! `interval` / `port` may be numbers or numeric strings, and `null` or `""`
//! mean "absent" for every scalar, including `proxy`.  A `null` body decodes to an empty [`PartialSettings`].
//!
//! Errors returned by the backend are JSON objects that may carry a
//! `message`; [`extract_error_message`] pulls it out.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::clock_time::{ClockTimeError, TimeOfDay};
use crate::domain::schema::{
    PartialScrapingService, PartialSettings, ProxyMode, SettingsRecord, WorkingHours,
};

/// Errors that can occur while encoding or decoding the wire format.
#[derive(Debug, Error)]
pub enum WireError {
    /// The payload is not valid JSON or does not have the expected shape.
    #[error("malformed settings payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A working-hours entry is not a valid `H:MM` time.
    #[error("invalid working hours `{field}`: {source}")]
    InvalidTime {
        field: &'static str,
        #[source]
        source: ClockTimeError,
    },
}

// ── Wire DTOs ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSettings {
    #[serde(default, deserialize_with = "lenient_u32")]
    interval: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    port: Option<u32>,
    #[serde(default)]
    scraping_ant: Option<WireScrapingAnt>,
    #[serde(default)]
    working_hours: Option<WireWorkingHours>,
    #[serde(default)]
    demo_mode: Option<bool>,
    #[serde(default)]
    analytics_enabled: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireScrapingAnt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_proxy")]
    proxy: Option<ProxyMode>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireWorkingHours {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("number {n} does not fit in u32"))),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

fn lenient_proxy<'de, D>(deserializer: D) -> Result<Option<ProxyMode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

fn parse_time(field: &'static str, raw: Option<String>) -> Result<Option<TimeOfDay>, WireError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|source| WireError::InvalidTime { field, source }),
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a full record into the JSON body of a write request.
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_record(record: &SettingsRecord) -> Result<Value, WireError> {
    let wire = WireSettings {
        interval: record.interval_minutes,
        port: record.port,
        scraping_ant: Some(WireScrapingAnt {
            api_key: record.scraping_service.api_key.clone(),
            proxy: Some(record.scraping_service.proxy_mode),
        }),
        working_hours: Some(WireWorkingHours {
            from: record.working_hours.from.map(|t| t.to_string()),
            to: record.working_hours.to.map(|t| t.to_string()),
        }),
        demo_mode: Some(record.demo_mode),
        analytics_enabled: Some(record.analytics_enabled),
    };
    Ok(serde_json::to_value(wire)?)
}

/// Decodes a (possibly partial) record returned by a read.
///
/// # Errors
///
/// Returns [`WireError::Json`] for a payload of the wrong shape and
/// [`WireError::InvalidTime`] for an unparseable working-hours entry.
pub fn decode_partial(value: Value) -> Result<PartialSettings, WireError> {
    if value.is_null() {
        debug!("settings payload is null, treating every field as absent");
        return Ok(PartialSettings::default());
    }

    let wire: WireSettings = serde_json::from_value(value)?;
    let scraping = wire.scraping_ant.unwrap_or_default();
    let hours = wire.working_hours.unwrap_or_default();

    Ok(PartialSettings {
        interval_minutes: wire.interval,
        port: wire.port,
        scraping_service: PartialScrapingService {
            api_key: scraping.api_key,
            proxy_mode: scraping.proxy,
        },
        working_hours: WorkingHours {
            from: parse_time("from", hours.from)?,
            to: parse_time("to", hours.to)?,
        },
        demo_mode: wire.demo_mode,
        analytics_enabled: wire.analytics_enabled,
    })
}

/// Same as [`decode_partial`] for a raw response body.  A blank body counts
/// as `null`.
pub fn decode_partial_str(body: &str) -> Result<PartialSettings, WireError> {
    if body.trim().is_empty() {
        return Ok(PartialSettings::default());
    }
    decode_partial(serde_json::from_str(body)?)
}

/// Returns the `message` carried by a backend error body, if any.
///
/// Non-JSON bodies, non-string messages and blank messages yield `None`, in
/// which case the caller shows its generic failure text.  A non-blank message
/// is returned exactly as sent.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ScrapingService;
    use serde_json::json;

    fn time(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn test_encode_uses_backend_field_names() {
        // Arrange
        let record = SettingsRecord {
            interval_minutes: Some(15),
            port: Some(8080),
            scraping_service: ScrapingService {
                api_key: Some("secret".into()),
                proxy_mode: ProxyMode::Residential,
            },
            working_hours: WorkingHours {
                from: Some(time(9, 5)),
                to: Some(time(17, 30)),
            },
            demo_mode: true,
            analytics_enabled: false,
        };

        // Act
        let value = encode_record(&record).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "interval": 15,
                "port": 8080,
                "scrapingAnt": { "apiKey": "secret", "proxy": "residential" },
                "workingHours": { "from": "9:05", "to": "17:30" },
                "demoMode": true,
                "analyticsEnabled": false
            })
        );
    }

    #[test]
    fn test_encode_sends_null_times_and_omits_missing_api_key() {
        let record = SettingsRecord {
            interval_minutes: Some(15),
            port: Some(8080),
            ..SettingsRecord::default()
        };

        let value = encode_record(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "interval": 15,
                "port": 8080,
                "scrapingAnt": { "proxy": "datacenter" },
                "workingHours": { "from": null, "to": null },
                "demoMode": false,
                "analyticsEnabled": false
            })
        );
    }

    #[test]
    fn test_decode_empty_object_yields_all_absent() {
        assert_eq!(decode_partial(json!({})).unwrap(), PartialSettings::default());
        assert_eq!(decode_partial(Value::Null).unwrap(), PartialSettings::default());
        assert_eq!(decode_partial_str("  ").unwrap(), PartialSettings::default());
    }

    #[test]
    fn test_decode_accepts_numeric_strings_and_blank_values() {
        // Arrange
        let value = json!({
            "interval": "30",
            "port": "",
            "workingHours": { "from": "", "to": null },
            "scrapingAnt": { "apiKey": null }
        });

        // Act
        let partial = decode_partial(value).unwrap();

        // Assert
        assert_eq!(partial.interval_minutes, Some(30));
        assert_eq!(partial.port, None);
        assert_eq!(partial.working_hours, WorkingHours::default());
        assert_eq!(partial.scraping_service.api_key, None);
        assert_eq!(partial.scraping_service.proxy_mode, None);
    }

    #[test]
    fn test_decode_full_payload() {
        let body = r#"{
            "interval": 60,
            "port": 9998,
            "scrapingAnt": { "apiKey": "k", "proxy": "residential" },
            "workingHours": { "from": "08:00", "to": "20:15" },
            "demoMode": true,
            "analyticsEnabled": true
        }"#;

        let partial = decode_partial_str(body).unwrap();

        assert_eq!(partial.interval_minutes, Some(60));
        assert_eq!(partial.port, Some(9998));
        assert_eq!(partial.scraping_service.api_key.as_deref(), Some("k"));
        assert_eq!(partial.scraping_service.proxy_mode, Some(ProxyMode::Residential));
        assert_eq!(partial.working_hours.from, Some(time(8, 0)));
        assert_eq!(partial.working_hours.to, Some(time(20, 15)));
        assert_eq!(partial.demo_mode, Some(true));
        assert_eq!(partial.analytics_enabled, Some(true));
    }

    #[test]
    fn test_decode_treats_blank_or_null_proxy_as_absent() {
        for proxy in [json!(""), json!("  "), Value::Null] {
            let partial = decode_partial(json!({
                "interval": 15,
                "port": 8080,
                "scrapingAnt": { "proxy": proxy }
            }))
            .unwrap();

            assert_eq!(partial.scraping_service.proxy_mode, None);
            assert_eq!(
                SettingsRecord::from(partial).scraping_service.proxy_mode,
                ProxyMode::Datacenter
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_proxy() {
        let result = decode_partial(json!({ "scrapingAnt": { "proxy": "mobile" } }));
        assert!(matches!(result, Err(WireError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_bad_time_with_field_name() {
        let result = decode_partial(json!({ "workingHours": { "from": "9:00", "to": "25:00" } }));
        match result {
            Err(WireError::InvalidTime { field, .. }) => assert_eq!(field, "to"),
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_numeric_interval() {
        assert!(decode_partial(json!({ "interval": "soon" })).is_err());
        assert!(decode_partial(json!({ "port": 5_000_000_000u64 })).is_err());
    }

    #[test]
    fn test_decode_of_encoded_record_restores_it() {
        let record = SettingsRecord {
            interval_minutes: Some(5),
            port: Some(1234),
            working_hours: WorkingHours {
                from: Some(time(0, 0)),
                to: Some(time(23, 59)),
            },
            ..SettingsRecord::default()
        };

        let decoded = decode_partial(encode_record(&record).unwrap()).unwrap();

        assert_eq!(SettingsRecord::from(decoded), record);
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Port already in use"}"#).as_deref(),
            Some("Port already in use")
        );
        assert_eq!(extract_error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"message":42}"#), None);
        assert_eq!(extract_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(
            extract_error_message(r#"{"message":"  Port already in use\n"}"#).as_deref(),
            Some("  Port already in use\n")
        );
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }
}
