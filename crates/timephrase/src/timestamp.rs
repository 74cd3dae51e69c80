//! Normalization of temporal values to epoch seconds.
//!
//! Every formatter in this crate works on `i64` seconds since the Unix epoch
//! (UTC). [`IntoEpochSeconds`] is the single conversion seam: integers pass
//! through, ISO-8601 text is parsed, and native date/time values are floored
//! from their millisecond representation.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

use crate::error::{PhraseError, Result};

/// Offset-less date-time layouts, tried in order and read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A value that can be expressed as whole seconds since the Unix epoch.
pub trait IntoEpochSeconds {
    /// Convert to epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseError::InvalidTimestamp`] if the value is text that is
    /// not a recognizable date/time, or a dynamic value of an unsupported type.
    fn epoch_seconds(&self) -> Result<i64>;
}

/// Normalize any accepted temporal representation to epoch seconds.
///
/// # Errors
///
/// Returns [`PhraseError::InvalidTimestamp`] for unparseable text or
/// unsupported dynamic values. Integer and native date/time inputs never fail.
///
/// # Examples
///
/// ```
/// use timephrase::normalize_timestamp;
///
/// assert_eq!(normalize_timestamp(&1_700_000_000_i64).unwrap(), 1_700_000_000);
/// assert_eq!(normalize_timestamp("2024-03-06T12:00:00Z").unwrap(), 1_709_726_400);
/// assert!(normalize_timestamp("next tuesday-ish").is_err());
/// ```
pub fn normalize_timestamp<T: IntoEpochSeconds + ?Sized>(value: &T) -> Result<i64> {
    value.epoch_seconds()
}

impl<T: IntoEpochSeconds + ?Sized> IntoEpochSeconds for &T {
    fn epoch_seconds(&self) -> Result<i64> {
        (**self).epoch_seconds()
    }
}

impl IntoEpochSeconds for i64 {
    fn epoch_seconds(&self) -> Result<i64> {
        Ok(*self)
    }
}

impl IntoEpochSeconds for i32 {
    fn epoch_seconds(&self) -> Result<i64> {
        Ok(i64::from(*self))
    }
}

impl IntoEpochSeconds for u32 {
    fn epoch_seconds(&self) -> Result<i64> {
        Ok(i64::from(*self))
    }
}

impl IntoEpochSeconds for str {
    fn epoch_seconds(&self) -> Result<i64> {
        parse_iso8601(self)
    }
}

impl IntoEpochSeconds for String {
    fn epoch_seconds(&self) -> Result<i64> {
        parse_iso8601(self)
    }
}

impl<Tz: TimeZone> IntoEpochSeconds for DateTime<Tz> {
    fn epoch_seconds(&self) -> Result<i64> {
        Ok(floor_millis(self.timestamp_millis()))
    }
}

impl IntoEpochSeconds for NaiveDateTime {
    fn epoch_seconds(&self) -> Result<i64> {
        Ok(floor_millis(self.and_utc().timestamp_millis()))
    }
}

impl IntoEpochSeconds for SystemTime {
    fn epoch_seconds(&self) -> Result<i64> {
        let millis = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis())
                .map(|m| -m)
                .unwrap_or(i64::MIN),
        };
        Ok(floor_millis(millis))
    }
}

impl IntoEpochSeconds for Value {
    fn epoch_seconds(&self) -> Result<i64> {
        match self {
            Value::Number(n) => {
                if let Some(secs) = n.as_i64() {
                    return Ok(secs);
                }
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.floor() as i64)
                    .ok_or_else(|| PhraseError::InvalidTimestamp(n.to_string()))
            }
            Value::String(s) => parse_iso8601(s),
            other => Err(PhraseError::InvalidTimestamp(format!("unsupported value: {other}"))),
        }
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn floor_millis(millis: i64) -> i64 {
    millis.div_euclid(1000)
}

/// Parse ISO-8601 text: RFC 3339 first, then offset-less forms as UTC.
fn parse_iso8601(text: &str) -> Result<i64> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp());
    }

    let naive = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            tracing::trace!(input = trimmed, layout = *format, "read offset-less timestamp as UTC");
            return Ok(dt.and_utc().timestamp());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().timestamp());
    }

    Err(PhraseError::InvalidTimestamp(format!("'{trimmed}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_integer_passes_through() {
        assert_eq!(normalize_timestamp(&0_i64).unwrap(), 0);
        assert_eq!(normalize_timestamp(&-86_400_i64).unwrap(), -86_400);
        assert_eq!(normalize_timestamp(&1_700_000_000_u32).unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_rfc3339_utc() {
        assert_eq!(normalize_timestamp("2024-03-06T12:00:00Z").unwrap(), 1_709_726_400);
    }

    #[test]
    fn test_rfc3339_with_offset() {
        // 07:00 at UTC-5 is 12:00 UTC
        assert_eq!(normalize_timestamp("2024-03-06T07:00:00-05:00").unwrap(), 1_709_726_400);
    }

    #[test]
    fn test_fractional_seconds_floor() {
        assert_eq!(normalize_timestamp("2024-03-06T12:00:00.999Z").unwrap(), 1_709_726_400);
        assert_eq!(normalize_timestamp("1969-12-31T23:59:59.500Z").unwrap(), -1);
    }

    #[test]
    fn test_offsetless_forms_read_as_utc() {
        assert_eq!(normalize_timestamp("2024-03-06T12:00:00").unwrap(), 1_709_726_400);
        assert_eq!(normalize_timestamp("2024-03-06 12:00:00").unwrap(), 1_709_726_400);
        assert_eq!(normalize_timestamp("2024-03-06T12:00").unwrap(), 1_709_726_400);
        assert_eq!(normalize_timestamp("2024-03-06T12:00Z").unwrap(), 1_709_726_400);
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        assert_eq!(normalize_timestamp("2024-03-06").unwrap(), 1_709_683_200);
        assert_eq!(normalize_timestamp(" 1970-01-01 ").unwrap(), 0);
    }

    #[test]
    fn test_invalid_text_carries_input() {
        let err = normalize_timestamp("not a date").unwrap_err();
        assert_eq!(err.kind(), "InvalidTimestamp");
        assert!(err.to_string().contains("not a date"), "got: {err}");
    }

    #[test]
    fn test_impossible_calendar_date_rejected() {
        assert!(normalize_timestamp("2023-02-30").is_err());
    }

    #[test]
    fn test_chrono_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap();
        assert_eq!(normalize_timestamp(&dt).unwrap(), 1_709_726_400);

        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = dt.with_timezone(&offset);
        assert_eq!(normalize_timestamp(&local).unwrap(), 1_709_726_400);
    }

    #[test]
    fn test_pre_epoch_millis_floor() {
        let dt = DateTime::from_timestamp_millis(-1).unwrap();
        assert_eq!(normalize_timestamp(&dt).unwrap(), -1);
    }

    #[test]
    fn test_system_time() {
        let after = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(normalize_timestamp(&after).unwrap(), 1);

        let before = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(normalize_timestamp(&before).unwrap(), -2);
    }

    #[test]
    fn test_json_values() {
        assert_eq!(normalize_timestamp(&json!(42)).unwrap(), 42);
        assert_eq!(normalize_timestamp(&json!(42.9)).unwrap(), 42);
        assert_eq!(normalize_timestamp(&json!("1970-01-01T00:01:00Z")).unwrap(), 60);
    }

    #[test]
    fn test_json_unsupported_types() {
        for value in [json!(null), json!(true), json!([1]), json!({"t": 1})] {
            let err = normalize_timestamp(&value).unwrap_err();
            assert_eq!(err.kind(), "InvalidTimestamp", "value: {value}");
        }
    }

    #[test]
    fn test_idempotent_once_numeric() {
        let once = normalize_timestamp("2024-03-06T12:00:00Z").unwrap();
        assert_eq!(normalize_timestamp(&once).unwrap(), once);
    }
}
