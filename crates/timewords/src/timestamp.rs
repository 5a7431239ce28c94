//! Timestamp input forms and normalization to epoch seconds.
//!
//! Every public operation accepts any [`Timestamp`] form and works on the
//! normalized [`Instant`] internally. Normalization never consults the
//! system clock: callers construct the variant explicitly (usually via
//! `From`), and [`Timestamp::normalize`] eliminates the union into a single
//! canonical representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, TimewordsError};

/// Numeric inputs with magnitude above this are epoch milliseconds.
const MILLIS_CUTOFF: f64 = 1e12;

/// A timestamp in one of the accepted input forms.
///
/// The untagged `Deserialize` lets JSON numbers and strings map onto the
/// same union, so payloads may carry either `1704067200` or
/// `"2024-01-01T00:00:00Z"` in the same field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Epoch seconds, possibly fractional. Values with magnitude above
    /// 1×10¹² are interpreted as epoch milliseconds and divided by 1000.
    Seconds(f64),
    /// Epoch milliseconds, explicit (no magnitude heuristic).
    #[serde(skip)]
    Millis(f64),
    /// A native UTC datetime.
    DateTime(DateTime<Utc>),
    /// ISO 8601 / RFC 3339 / SQL-date-like text; UTC is assumed when the
    /// text carries no offset.
    Text(String),
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Seconds(secs as f64)
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Timestamp::Seconds(secs)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::DateTime(dt)
    }
}

impl Timestamp {
    /// Normalize to canonical epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimewordsError::InvalidTimestamp`] for non-finite numbers
    /// or text that matches none of the accepted formats.
    pub fn normalize(&self) -> Result<Instant> {
        match self {
            Timestamp::Seconds(v) => {
                let v = check_finite(*v)?;
                if v.abs() > MILLIS_CUTOFF {
                    Ok(Instant(v / 1000.0))
                } else {
                    Ok(Instant(v))
                }
            }
            Timestamp::Millis(v) => Ok(Instant(check_finite(*v)? / 1000.0)),
            Timestamp::Text(s) => parse_text(s),
            Timestamp::DateTime(dt) => Ok(Instant::from_datetime(dt)),
        }
    }
}

fn check_finite(v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TimewordsError::InvalidTimestamp(format!(
            "non-finite value: {v}"
        )))
    }
}

/// Parse timestamp text: RFC 3339 first, then the naive fallbacks with UTC
/// assumed.
fn parse_text(s: &str) -> Result<Instant> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimewordsError::InvalidTimestamp(
            "empty string".to_string(),
        ));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Instant::from_datetime(&dt.with_timezone(&Utc)));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Instant::from_datetime(&naive.and_utc()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Instant::from_datetime(&naive.and_utc()));
        }
    }

    Err(TimewordsError::InvalidTimestamp(format!("'{s}'")))
}

/// A normalized instant: epoch seconds, possibly fractional, always finite.
///
/// Produced only by [`Timestamp::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant(f64);

impl Instant {
    /// Epoch seconds.
    pub fn as_seconds(self) -> f64 {
        self.0
    }

    fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Instant(dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9)
    }

    /// The instant as a UTC datetime.
    ///
    /// Whole seconds are floored, so negative fractional instants land in
    /// the correct UTC day.
    ///
    /// # Errors
    ///
    /// Returns [`TimewordsError::InvalidTimestamp`] when the value is
    /// outside the representable datetime range.
    pub fn to_datetime(self) -> Result<DateTime<Utc>> {
        let whole = self.0.floor();
        let nanos = ((self.0 - whole) * 1e9).round() as u32;
        DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)).ok_or_else(|| {
            TimewordsError::InvalidTimestamp(format!("epoch seconds out of range: {}", self.0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_normalize_epoch_seconds() {
        let instant = Timestamp::from(1_704_067_200_i64).normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_704_067_200.0);
    }

    #[test]
    fn test_normalize_fractional_seconds() {
        let instant = Timestamp::from(1_704_067_200.25_f64).normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_704_067_200.25);
    }

    #[test]
    fn test_normalize_millis_heuristic() {
        // Larger than 1e12, so read as milliseconds
        let instant = Timestamp::from(1_704_067_200_000.0_f64).normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_704_067_200.0);
    }

    #[test]
    fn test_normalize_millis_heuristic_negative() {
        let instant = Timestamp::from(-1_500_000_000_000.0_f64).normalize().unwrap();
        assert_eq!(instant.as_seconds(), -1_500_000_000.0);
    }

    #[test]
    fn test_normalize_explicit_millis() {
        let instant = Timestamp::Millis(1_500.0).normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1.5);
    }

    #[test]
    fn test_normalize_rfc3339_with_offset() {
        // 10:00 at +02:00 is 08:00 UTC
        let instant = Timestamp::from("2024-01-15T10:00:00+02:00").normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_305_600.0);
    }

    #[test]
    fn test_normalize_rfc3339_zulu() {
        let instant = Timestamp::from("2024-01-15T00:00:00Z").normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_276_800.0);
    }

    #[test]
    fn test_normalize_naive_datetime_assumes_utc() {
        let instant = Timestamp::from("2024-01-15T00:00:00").normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_276_800.0);
    }

    #[test]
    fn test_normalize_sql_style_datetime() {
        let instant = Timestamp::from("2024-01-15 00:00:00").normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_276_800.0);
    }

    #[test]
    fn test_normalize_bare_date() {
        let instant = Timestamp::from("2024-01-15").normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_276_800.0);
    }

    #[test]
    fn test_normalize_native_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let instant = Timestamp::from(dt).normalize().unwrap();
        assert_eq!(instant.as_seconds(), 1_705_276_800.0);
    }

    #[test]
    fn test_normalize_nan_is_error() {
        let result = Timestamp::from(f64::NAN).normalize();
        assert!(matches!(result, Err(TimewordsError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_normalize_infinity_is_error() {
        let result = Timestamp::from(f64::INFINITY).normalize();
        assert!(matches!(result, Err(TimewordsError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_normalize_garbage_text_is_error() {
        let result = Timestamp::from("not-a-timestamp").normalize();
        assert!(matches!(result, Err(TimewordsError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_normalize_empty_text_is_error() {
        assert!(Timestamp::from("").normalize().is_err());
    }

    #[test]
    fn test_to_datetime_round_trips() {
        let instant = Timestamp::from(1_705_276_800_i64).normalize().unwrap();
        let dt = instant.to_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_to_datetime_floors_negative_fractions() {
        let dt = Instant(-0.5).to_datetime().unwrap();
        assert_eq!(dt.timestamp(), -1);
        assert_eq!(dt.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn test_deserialize_number_as_seconds() {
        let ts: Timestamp = serde_json::from_str("1704067200").unwrap();
        assert_eq!(ts, Timestamp::Seconds(1_704_067_200.0));
    }

    #[test]
    fn test_deserialize_rfc3339_string_as_datetime() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T00:00:00Z\"").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(ts, Timestamp::DateTime(expected));
    }

    #[test]
    fn test_deserialize_bare_date_as_text() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15\"").unwrap();
        assert_eq!(ts, Timestamp::Text("2024-01-15".to_string()));
        assert_eq!(ts.normalize().unwrap().as_seconds(), 1_705_276_800.0);
    }
}
