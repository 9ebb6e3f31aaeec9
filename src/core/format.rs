//! Currency and date formatting in the en-IN style.
//!
//! Floats are never passed through `format!`: amounts are rounded into an
//! integer first and grouped by hand, which keeps the output identical on
//! wasm and native.

use std::fmt;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
///
/// Rounds half away from zero and keeps the sign of negative zero. NaN and
/// infinities are rendered the way browsers render them.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "₹NaN".to_string();
    }
    let negative = amount.is_sign_negative();
    let rounded = amount.abs().round();
    if !rounded.is_finite() || rounded > (i64::MAX as f64) {
        return if negative { "-₹∞" } else { "₹∞" }.to_string();
    }

    let grouped = group_indian(rounded as u64);
    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Last three digits, then groups of two: `1234567` -> `12,34,567`.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: {0:?}")]
    Unparseable(String),
    #[error("date out of range: {0:?}")]
    OutOfRange(String),
}

/// A calendar date rendered as a long en-IN date: `19 October 2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LongDate(NaiveDate);

impl LongDate {
    /// `month` and `day` are 1-based.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateError::OutOfRange(format!("{year}-{month:02}-{day:02}")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for LongDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-d %B %Y"))
    }
}

/// Parses `YYYY-MM-DD`, ignoring any time part after `T` or a space.
pub fn parse_date(input: &str) -> Result<LongDate, DateError> {
    let date_part = input.trim().split(['T', ' ']).next().unwrap_or_default();
    let bytes = date_part.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::Unparseable(input.to_string()));
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(LongDate)
        .map_err(|e| match e.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                DateError::OutOfRange(input.to_string())
            }
            _ => DateError::Unparseable(input.to_string()),
        })
}

/// Convenience wrapper: parse then render.
pub fn format_date(input: &str) -> Result<String, DateError> {
    parse_date(input).map(|d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(1000.0), "₹1,000");
        assert_eq!(format_currency(500000.0), "₹5,00,000");
        assert_eq!(format_currency(1234567.0), "₹12,34,567");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn currency_rounds_to_whole_rupees() {
        assert_eq!(format_currency(1499.5), "₹1,500");
        assert_eq!(format_currency(1499.49), "₹1,499");
        assert_eq!(format_currency(-2500.5), "-₹2,501");
        assert_eq!(format_currency(-0.0), "-₹0");
        assert_eq!(format_currency(-0.4), "-₹0");
    }

    #[test]
    fn currency_handles_non_finite() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn long_date_rendering() {
        assert_eq!(format_date("2026-10-19").as_deref(), Ok("19 October 2026"));
        assert_eq!(format_date("2024-02-29T10:00:00Z").as_deref(), Ok("29 February 2024"));
        assert_eq!(LongDate::new(2025, 1, 5).map(|d| d.to_string()).as_deref(), Ok("5 January 2025"));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(matches!(parse_date("2023-02-29"), Err(DateError::OutOfRange(_))));
        assert!(matches!(parse_date("2023-13-01"), Err(DateError::OutOfRange(_))));
        assert!(matches!(LongDate::new(2023, 4, 31), Err(DateError::OutOfRange(_))));
        assert!(matches!(parse_date("yesterday"), Err(DateError::Unparseable(_))));
        assert!(matches!(parse_date("2023-1-01"), Err(DateError::Unparseable(_))));
        assert!(matches!(parse_date("2023-01-0x"), Err(DateError::Unparseable(_))));
    }
}
