//! # timewords
//!
//! Clock-free human time phrasing.
//!
//! Converts machine timestamps and durations into human-phrased English
//! ("3 hours ago", "2 hours, 30 minutes", "Last Saturday") and parses
//! human-written duration text back into seconds. Every function is pure:
//! the reference instant is always an explicit argument, never the system
//! clock, so results are deterministic, trivially thread-safe, and the same
//! on every machine.
//!
//! ## Operations
//!
//! - [`timeago`] — relative-time phrase for a timestamp against a reference
//! - [`duration()`] / [`duration_with_options()`] — seconds to "2 hours, 30 minutes"
//! - [`parse_duration`] — "2h30m" / "2:30" / "2 hours and 30 minutes" to seconds
//! - [`human_date`] — "Today", "Yesterday", "Last Friday", "March 5"
//! - [`date_range`] — "January 15–22, 2024"
//!
//! ## Modules
//!
//! - [`timestamp`] — input forms and normalization to epoch seconds
//! - [`relative`] — the relative-time band classifier
//! - [`duration`](mod@duration) — duration decomposition and formatting
//! - [`parse`] — the duration text parser
//! - [`calendar`] — calendar-relative dates and ranges
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use timewords::{duration, parse_duration, timeago};
//!
//! let reference: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z
//! assert_eq!(timeago(1_704_056_400_i64, reference).unwrap(), "3 hours ago");
//! assert_eq!(duration(9_000.0).unwrap(), "2 hours, 30 minutes");
//! assert_eq!(parse_duration("2 hours and 30 minutes").unwrap(), 9_000);
//! ```

pub mod calendar;
pub mod duration;
pub mod error;
pub mod parse;
pub mod relative;
pub mod timestamp;

mod units;

pub use calendar::{date_range, human_date};
pub use duration::{duration, duration_with_options, DurationOptions};
pub use error::{Result, TimewordsError};
pub use parse::parse_duration;
pub use relative::timeago;
pub use timestamp::{Instant, Timestamp};
