//! Codec for the `document.cookie` string format.
//!
//! The browser crate reads and writes the raw cookie strings; everything
//! here is pure string work so it stays natively testable.

use crate::query::{percent_decode, percent_encode};

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Parse a `document.cookie` value (`"a=1; b=2"`) into name/value pairs,
/// percent-decoding values.
#[must_use]
pub fn parse_cookies(cookie_header: &str) -> Vec<(String, String)> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), percent_decode(value)))
        })
        .collect()
}

/// Look up a single cookie by name.
#[must_use]
pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    parse_cookies(cookie_header)
        .into_iter()
        .find_map(|(n, v)| (n == name).then_some(v))
}

/// Build the assignment string for setting a cookie, with an optional expiry
/// `days` from `now_ms` (milliseconds since the Unix epoch). Negative days
/// produce an already-expired cookie, which deletes it.
#[must_use]
pub fn set_cookie_string(name: &str, value: &str, days: Option<f64>, now_ms: f64) -> String {
    let expires = days.map_or_else(String::new, |d| {
        format!("; expires={}", utc_date_string(d.mul_add(MS_PER_DAY, now_ms)))
    });
    format!("{}={}{}; path=/", name, percent_encode(value), expires)
}

/// Build the assignment string that deletes a cookie.
#[must_use]
pub fn delete_cookie_string(name: &str, now_ms: f64) -> String {
    set_cookie_string(name, "", Some(-1.0), now_ms)
}

/// Format milliseconds since the Unix epoch as a UTC cookie date,
/// e.g. `"Tue, 09 Dec 2025 14:05:07 GMT"`.
#[must_use]
pub fn utc_date_string(epoch_ms: f64) -> String {
    let total_seconds = (epoch_ms / 1000.0).floor() as i64;
    let seconds_of_day = total_seconds.rem_euclid(86_400);
    let days = (total_seconds - seconds_of_day) / 86_400;

    let (year, month, day) = civil_from_days(days);
    // 1970-01-01 was a Thursday.
    let weekday = (days + 4).rem_euclid(7) as usize;

    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    format!(
        "{}, {:02} {} {} {:02}:{:02}:{:02} GMT",
        WEEKDAYS[weekday],
        day,
        MONTHS[(month - 1) as usize],
        year,
        seconds_of_day / 3600,
        (seconds_of_day / 60) % 60,
        seconds_of_day % 60,
    )
}

// Days-since-epoch to (year, month, day), proleptic Gregorian.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookies() {
        let pairs = parse_cookies("session=abc123; theme=dark; consent=yes%20please");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("session".into(), "abc123".into()));
        assert_eq!(pairs[2], ("consent".into(), "yes please".into()));
    }

    #[test]
    fn test_get_cookie() {
        let header = "a=1; b=2";
        assert_eq!(get_cookie(header, "b"), Some("2".into()));
        assert_eq!(get_cookie(header, "c"), None);
        assert_eq!(get_cookie("", "a"), None);
    }

    #[test]
    fn test_set_cookie_string_session() {
        assert_eq!(
            set_cookie_string("theme", "dark", None, 0.0),
            "theme=dark; path=/"
        );
    }

    #[test]
    fn test_set_cookie_string_encodes_value() {
        let s = set_cookie_string("note", "a b;c", None, 0.0);
        assert_eq!(s, "note=a%20b%3Bc; path=/");
    }

    #[test]
    fn test_set_cookie_string_with_expiry() {
        // 2025-12-09 14:05:07 UTC plus one day.
        let now_ms = 1_765_289_107_000.0;
        let s = set_cookie_string("session", "x", Some(1.0), now_ms);
        assert_eq!(s, "session=x; expires=Wed, 10 Dec 2025 14:05:07 GMT; path=/");
    }

    #[test]
    fn test_delete_cookie_string_is_in_the_past() {
        let now_ms = 1_765_289_107_000.0;
        let s = delete_cookie_string("session", now_ms);
        assert!(s.starts_with("session=; expires=Mon, 08 Dec 2025"));
    }

    #[test]
    fn test_utc_date_string_epoch() {
        assert_eq!(utc_date_string(0.0), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_utc_date_string_leap_day() {
        // 2024-02-29 12:00:00 UTC.
        assert_eq!(
            utc_date_string(1_709_208_000_000.0),
            "Thu, 29 Feb 2024 12:00:00 GMT"
        );
    }

    #[test]
    fn test_cookie_roundtrip() {
        let set = set_cookie_string("q", "hello world", None, 0.0);
        let header = set.split(';').next().expect("assignment part");
        assert_eq!(get_cookie(header, "q"), Some("hello world".into()));
    }
}
