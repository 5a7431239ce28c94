//! Relative-time classification ("3 hours ago", "in 2 days", "just now").

use crate::error::Result;
use crate::timestamp::Timestamp;
use crate::units::{count_with_unit, BANDS, JUST_NOW_UPPER, UNITS};

/// Describe `timestamp` relative to `reference`.
///
/// The reference is an explicit argument: nothing here reads a clock, so a
/// caller wanting "relative to now" passes its own notion of now.
///
/// The magnitude of the difference is classified against a fixed band
/// ladder. Singular bands ("1 minute", "1 hour", "1 day", "1 month",
/// "1 year") hard-code their count, so a 70-minute difference reads as
/// "1 hour ago" rather than a rounded ratio near the unit boundary:
///
/// | magnitude | phrase |
/// |---|---|
/// | under 45 seconds | "just now" |
/// | 45–90 seconds | "1 minute" |
/// | to 45 minutes | rounded minutes |
/// | 45–90 minutes | "1 hour" |
/// | to 22 hours | rounded hours |
/// | 22–36 hours | "1 day" |
/// | to 26 days | rounded days |
/// | 26–46 days | "1 month" |
/// | to 320 days | rounded months, capped at 10 |
/// | 320–548 days | "1 year" |
/// | beyond | rounded years |
///
/// # Arguments
///
/// * `timestamp` — the instant to describe
/// * `reference` — the anchor it is measured against
///
/// # Returns
///
/// `"{n} {unit(s)} ago"` for the past, `"in {n} {unit(s)}"` for the
/// future, or `"just now"` within 45 seconds in either direction.
///
/// # Errors
///
/// Returns [`TimewordsError::InvalidTimestamp`](crate::TimewordsError::InvalidTimestamp)
/// if either input fails normalization.
///
/// # Examples
///
/// ```
/// use timewords::timeago;
///
/// assert_eq!(timeago(1_704_056_400_i64, 1_704_067_200_i64).unwrap(), "3 hours ago");
/// assert_eq!(timeago(1_704_240_000_i64, 1_704_067_200_i64).unwrap(), "in 2 days");
/// assert_eq!(timeago(1_704_067_200_i64, 1_704_067_200_i64).unwrap(), "just now");
/// ```
pub fn timeago(
    timestamp: impl Into<Timestamp>,
    reference: impl Into<Timestamp>,
) -> Result<String> {
    let ts = timestamp.into().normalize()?;
    let anchor = reference.into().normalize()?;

    let diff = anchor.as_seconds() - ts.as_seconds();
    let is_past = diff >= 0.0;
    let magnitude = diff.abs();

    if magnitude < JUST_NOW_UPPER {
        return Ok("just now".to_string());
    }

    // First band whose upper bound exceeds the magnitude; the last band is
    // unbounded, so the walk always lands.
    let band = BANDS
        .iter()
        .find(|b| magnitude < b.upper)
        .unwrap_or(&BANDS[BANDS.len() - 1]);

    let unit = &UNITS[band.unit];
    let count = if band.singular {
        1
    } else {
        let n = (magnitude / unit.seconds as f64).round() as i64;
        band.cap.map_or(n, |cap| n.min(cap))
    };

    let phrase = count_with_unit(count, unit);
    Ok(if is_past {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Monday 2024-01-01 00:00:00 UTC
    const REF: i64 = 1_704_067_200;

    fn ago(offset_secs: i64) -> String {
        timeago(REF - offset_secs, REF).unwrap()
    }

    fn ahead(offset_secs: i64) -> String {
        timeago(REF + offset_secs, REF).unwrap()
    }

    #[test]
    fn test_identical_timestamps_are_just_now() {
        assert_eq!(timeago(REF, REF).unwrap(), "just now");
    }

    #[test]
    fn test_just_now_band_boundaries() {
        assert_eq!(ago(30), "just now");
        assert_eq!(ago(44), "just now");
        assert_eq!(ago(45), "1 minute ago");
    }

    #[test]
    fn test_one_minute_band() {
        assert_eq!(ago(89), "1 minute ago");
        assert_eq!(ago(90), "2 minutes ago");
    }

    #[test]
    fn test_minutes_band() {
        assert_eq!(ago(1_800), "30 minutes ago");
        assert_eq!(ago(2_640), "44 minutes ago");
    }

    #[test]
    fn test_one_hour_band() {
        assert_eq!(ago(2_700), "1 hour ago");
        assert_eq!(ago(5_340), "1 hour ago");
        assert_eq!(ago(5_400), "2 hours ago");
    }

    #[test]
    fn test_hours_band() {
        assert_eq!(ago(18_000), "5 hours ago");
        assert_eq!(ago(75_600), "21 hours ago");
    }

    #[test]
    fn test_one_day_band() {
        assert_eq!(ago(79_200), "1 day ago");
        assert_eq!(ago(126_000), "1 day ago");
        assert_eq!(ago(129_600), "2 days ago");
    }

    #[test]
    fn test_days_band() {
        assert_eq!(ago(604_800), "7 days ago");
        assert_eq!(ago(2_160_000), "25 days ago");
    }

    #[test]
    fn test_one_month_band() {
        assert_eq!(ago(2_246_400), "1 month ago");
        assert_eq!(ago(3_888_000), "1 month ago");
        assert_eq!(ago(3_974_400), "2 months ago");
    }

    #[test]
    fn test_months_band() {
        assert_eq!(ago(15_552_000), "6 months ago");
    }

    #[test]
    fn test_months_band_caps_at_ten() {
        // 319 days: the raw ratio rounds to 11, the cap keeps it at 10
        assert_eq!(ago(27_561_600), "10 months ago");
    }

    #[test]
    fn test_one_year_band() {
        assert_eq!(ago(27_648_000), "1 year ago");
        assert_eq!(ago(47_260_800), "1 year ago");
        assert_eq!(ago(47_347_200), "2 years ago");
    }

    #[test]
    fn test_years_band() {
        assert_eq!(ago(157_766_400), "5 years ago");
    }

    #[test]
    fn test_future_phrases() {
        assert_eq!(ahead(30), "just now");
        assert_eq!(ahead(60), "in 1 minute");
        assert_eq!(ahead(300), "in 5 minutes");
        assert_eq!(ahead(3_000), "in 1 hour");
        assert_eq!(ahead(10_800), "in 3 hours");
        assert_eq!(ahead(82_800), "in 1 day");
        assert_eq!(ahead(172_800), "in 2 days");
        assert_eq!(ahead(2_678_400), "in 1 month");
        assert_eq!(ahead(31_622_400), "in 1 year");
    }

    #[test]
    fn test_text_timestamps() {
        let result = timeago("2024-01-01T00:00:00Z", "2024-01-01T03:00:00Z").unwrap();
        assert_eq!(result, "3 hours ago");
    }

    #[test]
    fn test_millisecond_input_is_detected() {
        let result = timeago(1_704_056_400_000.0_f64, REF).unwrap();
        assert_eq!(result, "3 hours ago");
    }

    #[test]
    fn test_non_finite_timestamp_is_error() {
        assert!(timeago(f64::NAN, REF).is_err());
    }

    proptest! {
        #[test]
        fn prop_identical_instants_are_just_now(t in -4_000_000_000_i64..4_000_000_000_i64) {
            prop_assert_eq!(timeago(t, t).unwrap(), "just now");
        }

        #[test]
        fn prop_direction_is_antisymmetric(
            t in -4_000_000_000_i64..4_000_000_000_i64,
            gap in 45_i64..200_000_000_i64,
        ) {
            let past = timeago(t, t + gap).unwrap();
            let future = timeago(t + gap, t).unwrap();
            prop_assert!(past.ends_with(" ago"), "got: {}", past);
            prop_assert!(future.starts_with("in "), "got: {}", future);
            prop_assert_eq!(past.trim_end_matches(" ago"), future.trim_start_matches("in "));
        }
    }
}
