//! Parsing human-written duration text into seconds.
//!
//! Two disjoint grammars, tried in order: colon notation ("2:30",
//! "1:30:00") is recognized structurally first, then a scan over
//! number/unit-word tokens ("2h 30m", "2 hours and 30 minutes",
//! "1.5 hours"). Checking the colon shape before the token scan means
//! "2:30" is never misread as a number followed by a unit word.

use crate::error::{Result, TimewordsError};

/// Seconds per unit for a duration unit word. The alias table carries the
/// full ladder, so compact formatter output ("1y 2mo") parses back.
fn unit_seconds(word: &str) -> Option<f64> {
    match word {
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1.0),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(60.0),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(3_600.0),
        "d" | "day" | "days" => Some(86_400.0),
        "w" | "wk" | "wks" | "week" | "weeks" => Some(604_800.0),
        "mo" | "mos" | "month" | "months" => Some(2_592_000.0),
        "y" | "yr" | "yrs" | "year" | "years" => Some(31_536_000.0),
        _ => None,
    }
}

/// Parse duration text into whole seconds.
///
/// # Accepted forms
///
/// - Colon notation: `"2:30"` (H:MM), `"1:30:00"` (H:MM:SS)
/// - Compact tokens: `"2h30m"`, `"2h 30m"`, `"1.5h"`
/// - Verbose tokens: `"2 hours and 30 minutes"`, `"1 day, 2 hours"`
///
/// Commas and the word "and" are separators. Words that are not recognized
/// unit names are skipped, provided at least one valid token is found. The
/// summed value is rounded to the nearest whole second.
///
/// # Errors
///
/// - [`TimewordsError::EmptyInput`] — blank or whitespace-only text
/// - [`TimewordsError::NegativeNotAllowed`] — leading '-' or a negative magnitude
/// - [`TimewordsError::Unparseable`] — no valid duration token found
///
/// # Examples
///
/// ```
/// use timewords::parse_duration;
///
/// assert_eq!(parse_duration("2h30m").unwrap(), 9_000);
/// assert_eq!(parse_duration("2 hours and 30 minutes").unwrap(), 9_000);
/// assert_eq!(parse_duration("2:30").unwrap(), 9_000);
/// ```
pub fn parse_duration(text: &str) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimewordsError::EmptyInput);
    }
    if text.starts_with('-') {
        return Err(TimewordsError::NegativeNotAllowed);
    }

    if let Some(result) = parse_colon_notation(text) {
        return result;
    }

    scan_unit_tokens(text)
}

/// Colon notation: `H:MM` or `H:MM:SS`, all-digit fields. Returns `None`
/// when the text is not colon-shaped at all, so the token grammar gets its
/// turn; a colon-shaped string with an out-of-range minute or second field
/// is a hard error.
fn parse_colon_notation(text: &str) -> Option<Result<i64>> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 2 && fields.len() != 3 {
        return None;
    }
    if fields
        .iter()
        .any(|f| f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    Some(parse_colon_fields(&fields, text))
}

fn parse_colon_fields(fields: &[&str], text: &str) -> Result<i64> {
    let parse_field =
        |f: &str| f.parse::<i64>().map_err(|_| TimewordsError::Unparseable(text.to_string()));

    let hours = parse_field(fields[0])?;
    let minutes = parse_field(fields[1])?;
    let seconds = if fields.len() == 3 {
        parse_field(fields[2])?
    } else {
        0
    };
    if minutes >= 60 || seconds >= 60 {
        return Err(TimewordsError::Unparseable(text.to_string()));
    }
    Ok(hours * 3_600 + minutes * 60 + seconds)
}

/// Scan `<number><optional space><unit word>` pairs and sum them.
fn scan_unit_tokens(text: &str) -> Result<i64> {
    let cleaned = text.to_lowercase().replace(',', " ");
    let cleaned = cleaned
        .split_whitespace()
        .filter(|word| *word != "and")
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = cleaned.chars().peekable();
    let mut total: f64 = 0.0;
    let mut found_any = false;

    while chars.peek().is_some() {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        // An explicit sign belongs to the next number; a negative magnitude
        // anywhere in the text is rejected outright.
        let mut negative = false;
        match chars.peek() {
            Some('+') => {
                chars.next();
            }
            Some('-') => {
                negative = true;
                chars.next();
            }
            _ => {}
        }

        let mut number = String::new();
        while chars
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || *c == '.')
        {
            if let Some(c) = chars.next() {
                number.push(c);
            }
        }

        if number.is_empty() {
            // Not a token start; skip one character and rescan.
            chars.next();
            continue;
        }

        if negative {
            return Err(TimewordsError::NegativeNotAllowed);
        }

        let Ok(value) = number.parse::<f64>() else {
            // A bare run of dots; nothing usable.
            continue;
        };

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let mut word = String::new();
        while chars.peek().is_some_and(|c| c.is_alphabetic()) {
            if let Some(c) = chars.next() {
                word.push(c);
            }
        }

        if word.is_empty() {
            // A bare number; a later token may still parse.
            continue;
        }

        if let Some(seconds_per) = unit_seconds(&word) {
            total += value * seconds_per;
            found_any = true;
        }
        // unrecognized unit words are skipped on purpose
    }

    if !found_any {
        return Err(TimewordsError::Unparseable(text.to_string()));
    }

    Ok(total.round() as i64)
}
