//! Duration decomposition and formatting.
//!
//! The formatter makes an exact floor decomposition down the unit ladder,
//! then re-derives the smallest retained unit from the remainder the coarser
//! retained units do not cover. That second phase is what keeps a truncated
//! rendering honest: no seconds are lost or double-counted when `max_units`
//! drops the tail.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimewordsError};
use crate::units::{count_with_unit, UnitSpec, HOUR, SECOND, UNITS};

/// Options for [`duration_with_options`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationOptions {
    /// Use symbol suffixes ("2h 30m") instead of full unit words.
    pub compact: bool,
    /// Maximum number of ladder units shown, largest first. Values below 1
    /// are treated as 1.
    pub max_units: usize,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: 2,
        }
    }
}

impl DurationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compact rendering.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set the unit cap.
    pub fn max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}

/// Format `seconds` with the default options (verbose, at most two units).
///
/// # Errors
///
/// Returns [`TimewordsError::InvalidDuration`] if `seconds` is negative,
/// NaN, or infinite.
///
/// # Examples
///
/// ```
/// use timewords::duration;
///
/// assert_eq!(duration(0.0).unwrap(), "0 seconds");
/// assert_eq!(duration(9_000.0).unwrap(), "2 hours, 30 minutes");
/// assert_eq!(duration(93_600.0).unwrap(), "1 day, 2 hours");
/// ```
pub fn duration(seconds: f64) -> Result<String> {
    duration_with_options(seconds, &DurationOptions::default())
}

/// Format `seconds` under explicit [`DurationOptions`].
///
/// Seconds are suppressed whenever any unit coarser than a minute is
/// present. When `max_units` truncates the breakdown and the smallest
/// retained unit is an hour or coarser, that unit is floored rather than
/// rounded, so dropped detail never inflates the magnitude.
///
/// # Errors
///
/// Returns [`TimewordsError::InvalidDuration`] if `seconds` is negative,
/// NaN, or infinite.
///
/// # Examples
///
/// ```
/// use timewords::{duration_with_options, DurationOptions};
///
/// let compact = DurationOptions::new().compact(true);
/// assert_eq!(duration_with_options(9_000.0, &compact).unwrap(), "2h 30m");
///
/// let single = DurationOptions::new().max_units(1);
/// assert_eq!(duration_with_options(3_661.0, &single).unwrap(), "1 hour");
/// ```
pub fn duration_with_options(seconds: f64, options: &DurationOptions) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(TimewordsError::InvalidDuration(format!("{seconds}")));
    }
    let max_units = options.max_units.max(1);

    if seconds == 0.0 {
        return Ok(zero_string(options.compact));
    }

    // Exact floor decomposition, one integer count per rung.
    let mut counts = [0_i64; UNITS.len()];
    let mut remaining = seconds;
    for (i, unit) in UNITS.iter().enumerate() {
        let count = (remaining / unit.seconds as f64).floor();
        counts[i] = count as i64;
        remaining -= count * unit.seconds as f64;
    }

    // Seconds are noise once hours or larger are on the table.
    let has_coarser_than_minute = counts[..=HOUR].iter().any(|&c| c > 0);

    let mut retained: Vec<usize> = Vec::new();
    for (i, &count) in counts.iter().enumerate() {
        if i == SECOND && has_coarser_than_minute {
            continue;
        }
        if count > 0 {
            retained.push(i);
        }
    }

    let truncated = retained.len() > max_units;
    retained.truncate(max_units);

    let Some(&smallest) = retained.last() else {
        // Fractional input below one second decomposes to nothing.
        return Ok(zero_string(options.compact));
    };

    // Phase two: re-derive the smallest retained unit from everything the
    // coarser retained units do not cover.
    let covered: f64 = retained[..retained.len() - 1]
        .iter()
        .map(|&i| counts[i] as f64 * UNITS[i].seconds as f64)
        .sum();
    let raw = (seconds - covered) / UNITS[smallest].seconds as f64;
    counts[smallest] = if truncated && smallest <= HOUR {
        (raw + 1e-9).floor() as i64
    } else {
        raw.round() as i64
    };

    let parts: Vec<String> = retained
        .iter()
        .filter(|&&i| counts[i] > 0)
        .map(|&i| render_part(counts[i], &UNITS[i], options.compact))
        .collect();

    if parts.is_empty() {
        return Ok(zero_string(options.compact));
    }

    Ok(parts.join(if options.compact { " " } else { ", " }))
}

fn zero_string(compact: bool) -> String {
    if compact {
        "0s".to_string()
    } else {
        "0 seconds".to_string()
    }
}

fn render_part(count: i64, unit: &UnitSpec, compact: bool) -> String {
    if compact {
        format!("{}{}", count, unit.symbol)
    } else {
        count_with_unit(count, unit)
    }
}
