//! Text formatting: date patterns, truncation, thousands separators,
//! random identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

const MONTHS: [&str; 12] = [
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

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Error building a [`DateParts`] from out-of-range components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePartsError {
    field: &'static str,
}

impl fmt::Display for DatePartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date component out of range: {}", self.field)
    }
}

impl std::error::Error for DatePartsError {}

/// A calendar date and time broken into components.
///
/// Always in range by construction: build with [`DateParts::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    year: i32,
    month: u8,
    day: u8,
    weekday: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateParts {
    /// Create date parts. `month` is 1-12, `day` 1-31, `weekday` 0-6 with
    /// Sunday as 0, `hour` 0-23, `minute`/`second` 0-59.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DatePartsError> {
        let check = |ok: bool, field: &'static str| {
            if ok {
                Ok(())
            } else {
                Err(DatePartsError { field })
            }
        };
        check((1..=12).contains(&month), "month")?;
        check((1..=31).contains(&day), "day")?;
        check(weekday <= 6, "weekday")?;
        check(hour <= 23, "hour")?;
        check(minute <= 59, "minute")?;
        check(second <= 59, "second")?;
        Ok(Self {
            year,
            month,
            day,
            weekday,
            hour,
            minute,
            second,
        })
    }

    fn hour12(self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    fn token(self, token: &str) -> String {
        let month = usize::from(self.month - 1);
        let weekday = usize::from(self.weekday);
        match token {
            "YYYY" => self.year.to_string(),
            "YY" => format!("{:02}", self.year.rem_euclid(100)),
            "MMMM" => MONTHS[month].to_string(),
            "MMM" => SHORT_MONTHS[month].to_string(),
            "MM" => format!("{:02}", self.month),
            "M" => self.month.to_string(),
            "DDDD" => DAYS[weekday].to_string(),
            "DDD" => SHORT_DAYS[weekday].to_string(),
            "DD" => format!("{:02}", self.day),
            "D" => self.day.to_string(),
            "HH" => format!("{:02}", self.hour),
            "H" => self.hour.to_string(),
            "hh" => format!("{:02}", self.hour12()),
            "h" => self.hour12().to_string(),
            "mm" => format!("{:02}", self.minute),
            "m" => self.minute.to_string(),
            "ss" => format!("{:02}", self.second),
            "s" => self.second.to_string(),
            "A" => if self.hour >= 12 { "PM" } else { "AM" }.to_string(),
            "a" => if self.hour >= 12 { "pm" } else { "am" }.to_string(),
            other => other.to_string(),
        }
    }
}

// Longest-match-first so "MMMM" is not consumed as four "M" tokens, and
// substituted month/day names are never rescanned for tokens.
const TOKENS: [&str; 20] = [
    "YYYY", "DDDD", "MMMM", "DDD", "MMM", "YY", "MM", "DD", "HH", "hh", "mm", "ss", "M", "D", "H",
    "h", "m", "s", "A", "a",
];

/// Format a date according to a pattern, e.g. `"MMMM D, YYYY"`.
///
/// Unrecognized characters pass through unchanged.
#[must_use]
pub fn format_date(date: &DateParts, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for token in TOKENS {
            if rest.starts_with(token) {
                out.push_str(&date.token(token));
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }
        let ch = rest.chars().next().expect("rest is non-empty");
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Truncate text to `length` characters, trimming trailing whitespace before
/// appending `suffix`. Text already within the limit is returned unchanged.
#[must_use]
pub fn truncate_text(text: &str, length: usize, suffix: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{}{}", cut.trim_end(), suffix)
}

/// Format an integer with comma thousands separators.
#[must_use]
pub fn number_with_commas(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first_group = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    out.push_str(&digits[..first_group]);
    for chunk in digits[first_group..].as_bytes().chunks(3) {
        out.push(',');
        out.push_str(std::str::from_utf8(chunk).expect("ascii digits"));
    }
    out
}

const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric string of the given length.
///
/// Falls back to an empty string if the platform RNG is unavailable.
#[must_use]
pub fn random_string(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    if getrandom::getrandom(&mut bytes).is_err() {
        return String::new();
    }
    bytes
        .iter()
        .map(|b| char::from(ID_CHARS[usize::from(*b) % ID_CHARS.len()]))
        .collect()
}
