//! The shared unit ladder and the relative-time band table.
//!
//! Month and year lengths are flat approximations (30 and 365 days). The
//! phrases built from this table are approximations by contract, not
//! calendar computations, so the ladder is never adjusted for leap years.

/// One rung of the unit ladder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitSpec {
    pub name: &'static str,
    pub plural: &'static str,
    pub symbol: &'static str,
    pub seconds: u64,
}

pub(crate) const YEAR: usize = 0;
pub(crate) const MONTH: usize = 1;
pub(crate) const DAY: usize = 2;
pub(crate) const HOUR: usize = 3;
pub(crate) const MINUTE: usize = 4;
pub(crate) const SECOND: usize = 5;

/// Canonical ladder, largest to smallest.
pub(crate) const UNITS: [UnitSpec; 6] = [
    UnitSpec { name: "year", plural: "years", symbol: "y", seconds: 31_536_000 },
    UnitSpec { name: "month", plural: "months", symbol: "mo", seconds: 2_592_000 },
    UnitSpec { name: "day", plural: "days", symbol: "d", seconds: 86_400 },
    UnitSpec { name: "hour", plural: "hours", symbol: "h", seconds: 3_600 },
    UnitSpec { name: "minute", plural: "minutes", symbol: "m", seconds: 60 },
    UnitSpec { name: "second", plural: "seconds", symbol: "s", seconds: 1 },
];

/// Magnitudes below this many seconds read as "just now".
pub(crate) const JUST_NOW_UPPER: f64 = 45.0;

/// One band of the relative-time ladder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Band {
    /// Exclusive upper bound in seconds.
    pub upper: f64,
    /// Index into [`UNITS`].
    pub unit: usize,
    /// Singular bands always report a count of 1.
    pub singular: bool,
    /// Upper cap on the rounded count.
    pub cap: Option<i64>,
}

/// Band table for magnitudes at or above [`JUST_NOW_UPPER`], in order.
///
/// The month band caps at 10: the year band takes over at 320 days, before
/// the month ratio could round to 11.
pub(crate) const BANDS: [Band; 10] = [
    Band { upper: 90.0, unit: MINUTE, singular: true, cap: None },
    Band { upper: 2_700.0, unit: MINUTE, singular: false, cap: None },
    Band { upper: 5_400.0, unit: HOUR, singular: true, cap: None },
    Band { upper: 79_200.0, unit: HOUR, singular: false, cap: None },
    Band { upper: 129_600.0, unit: DAY, singular: true, cap: None },
    Band { upper: 2_246_400.0, unit: DAY, singular: false, cap: None },
    Band { upper: 3_974_400.0, unit: MONTH, singular: true, cap: None },
    Band { upper: 27_648_000.0, unit: MONTH, singular: false, cap: Some(10) },
    Band { upper: 47_347_200.0, unit: YEAR, singular: true, cap: None },
    Band { upper: f64::INFINITY, unit: YEAR, singular: false, cap: None },
];

/// "1 minute" / "3 minutes".
pub(crate) fn count_with_unit(n: i64, unit: &UnitSpec) -> String {
    if n == 1 {
        format!("{} {}", n, unit.name)
    } else {
        format!("{} {}", n, unit.plural)
    }
}
