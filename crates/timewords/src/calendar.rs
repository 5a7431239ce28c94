//! Calendar-relative date phrasing and date-range abbreviation.
//!
//! All calendar reasoning is UTC: a "day" is the span between UTC
//! midnights, independent of wall-clock time, and day differences come from
//! UTC calendar dates rather than raw 86400-second spans.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::error::Result;
use crate::timestamp::Timestamp;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(dt: &DateTime<Utc>) -> &'static str {
    MONTH_NAMES[dt.month0() as usize]
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Classify a date against a reference date.
///
/// # Arguments
///
/// * `timestamp` — the date to describe
/// * `reference` — the date it is measured against
///
/// # Returns
///
/// "Today", "Yesterday", or "Tomorrow" for adjacent days;
/// "Last `<Weekday>`" two to six days back; "This `<Weekday>`" two to six
/// days ahead; otherwise "`<Month> <Day>`", with the year appended when it
/// differs from the reference year.
///
/// # Errors
///
/// Returns [`TimewordsError::InvalidTimestamp`](crate::TimewordsError::InvalidTimestamp)
/// if either input fails normalization.
///
/// # Examples
///
/// ```
/// use timewords::human_date;
///
/// // Monday 2024-01-15, relative to itself and to nearby days
/// assert_eq!(human_date(1_705_276_800_i64, 1_705_276_800_i64).unwrap(), "Today");
/// assert_eq!(human_date(1_705_104_000_i64, 1_705_276_800_i64).unwrap(), "Last Saturday");
/// ```
pub fn human_date(
    timestamp: impl Into<Timestamp>,
    reference: impl Into<Timestamp>,
) -> Result<String> {
    let ts = timestamp.into().normalize()?.to_datetime()?;
    let anchor = reference.into().normalize()?.to_datetime()?;

    let day_diff = (ts.date_naive() - anchor.date_naive()).num_days();

    Ok(match day_diff {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        -6..=-2 => format!("Last {}", weekday_name(ts.weekday())),
        2..=6 => format!("This {}", weekday_name(ts.weekday())),
        _ => {
            if ts.year() == anchor.year() {
                format!("{} {}", month_name(&ts), ts.day())
            } else {
                format!("{} {}, {}", month_name(&ts), ts.day(), ts.year())
            }
        }
    })
}

/// Render two dates as an abbreviated chronological range.
///
/// Arguments may come in either order; the output always runs earliest to
/// latest. En dashes separate the endpoints: closed up within a single
/// month, spaced once months or years differ.
///
/// # Errors
///
/// Returns [`TimewordsError::InvalidTimestamp`](crate::TimewordsError::InvalidTimestamp)
/// if either input fails normalization.
///
/// # Examples
///
/// ```
/// use timewords::date_range;
///
/// assert_eq!(
///     date_range(1_705_276_800_i64, 1_705_881_600_i64).unwrap(),
///     "January 15\u{2013}22, 2024"
/// );
/// ```
pub fn date_range(start: impl Into<Timestamp>, end: impl Into<Timestamp>) -> Result<String> {
    let mut a = start.into().normalize()?.to_datetime()?;
    let mut b = end.into().normalize()?.to_datetime()?;
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    if a.date_naive() == b.date_naive() {
        return Ok(format!("{} {}, {}", month_name(&a), a.day(), a.year()));
    }

    if a.year() == b.year() && a.month() == b.month() {
        return Ok(format!(
            "{} {}\u{2013}{}, {}",
            month_name(&a),
            a.day(),
            b.day(),
            a.year()
        ));
    }

    if a.year() == b.year() {
        return Ok(format!(
            "{} {} \u{2013} {} {}, {}",
            month_name(&a),
            a.day(),
            month_name(&b),
            b.day(),
            a.year()
        ));
    }

    Ok(format!(
        "{} {}, {} \u{2013} {} {}, {}",
        month_name(&a),
        a.day(),
        a.year(),
        month_name(&b),
        b.day(),
        b.year()
    ))
}
