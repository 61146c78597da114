//! Strict readers for the textual fields of a receipt.
//!
//! Each reader accepts one fixed format and returns `None` for anything
//! else. The validator uses them to decide whether a field is well-formed;
//! the scoring rules use them to get at the value.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

static AMOUNT_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("invalid amount regex"));

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("invalid date regex"));

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("invalid time regex"));

/// Returns `true` for a currency amount: digits, a dot, exactly two digits.
pub fn is_amount(s: &str) -> bool {
    AMOUNT_SHAPE.is_match(s)
}

/// Reads a currency amount as a whole number of cents.
///
/// Returns `None` if the text is not an amount. Amounts too large for a
/// `u128` saturate at `u128::MAX`.
pub fn parse_cents(s: &str) -> Option<u128> {
    if !is_amount(s) {
        return None;
    }
    let (dollars, cents) = s.split_once('.')?;
    let cents: u128 = cents.parse().ok()?;
    let total = dollars
        .parse::<u128>()
        .ok()
        .and_then(|d| d.checked_mul(100))
        .and_then(|d| d.checked_add(cents))
        .unwrap_or(u128::MAX);
    Some(total)
}

/// Reads the two digits after the dot of a currency amount.
pub fn parse_fraction(s: &str) -> Option<u8> {
    if !is_amount(s) {
        return None;
    }
    s[s.len() - 2..].parse().ok()
}

/// Reads a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reads a 24-hour `H:MM` or `HH:MM` time of day.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE.is_match(s) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}
