//! Local-date helpers shared by the holiday table and deadline engine.
//!
//! Everything works on `NaiveDate`, so there is no time-of-day or time
//! zone to skew a day count near midnight.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};

/// Errors raised while reading user-supplied dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
}

/// Parse a `YYYY-MM-DD` string into a local calendar date.
///
/// The string must have exactly three numeric components that form a real
/// calendar date; `2024-02-30` is rejected rather than rolled into March.
pub fn parse_local_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDateFormat(s.to_string());
    let trimmed = s.trim();

    let mut parts = trimmed.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(y) && all_digits(m) && all_digits(d)) {
        return Err(invalid());
    }

    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an optional form value; blank or absent means "not entered yet".
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, CalendarError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_local_date(value).map(Some),
    }
}

/// `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// e.g. `Monday, 03/15/2025`.
pub fn format_date_with_weekday(date: NaiveDate) -> String {
    date.format("%A, %m/%d/%Y").to_string()
}

/// e.g. `Mon`.
pub fn format_short_weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Whole calendar days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Days elapsed since `start`, never negative.
pub fn elapsed_days(start: NaiveDate, today: NaiveDate) -> i64 {
    days_between(start, today).max(0)
}

/// Add (or subtract) whole days, saturating at the representable range.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(n))
        .unwrap_or(if n < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Add calendar months keeping the day of month; a day past the end of the
/// target month clamps to its last day (Jan 31 + 1 month = Feb 28/29).
pub fn add_months_same_day(date: NaiveDate, n: i32) -> NaiveDate {
    let months = Months::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(if n < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Today on the local clock. Only the outer edges (REST handlers, binaries)
/// call this; the engine always takes the reference date as a parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
