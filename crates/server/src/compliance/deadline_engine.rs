//! CPL § 30.30 readiness deadline computation.
//!
//! Excludable time extends the deadline outward: the prosecution is timely
//! while `elapsed - excluded <= cap`, which is the same as comparing the
//! reference date against `start + cap + excluded`.

use chrono::NaiveDate;
use shared_types::{ChargeLevel, CourtDateProximity, DeadlineResult, DeadlineUrgency, StatutoryCap};

use super::adjustment::adjust_with;
use super::calendar::{add_days, add_months_same_day, days_between, elapsed_days};
use super::holidays::{HolidayCalendar, NyCourtCalendar};

/// Calendar days in the cap for a case starting on `start`. Felony caps are
/// counted in months, so the day count depends on the start date.
pub fn cap_days(level: ChargeLevel, start: NaiveDate) -> i64 {
    match level.statutory_cap() {
        StatutoryCap::Months(months) => {
            let months = i32::try_from(months).unwrap_or(i32::MAX);
            days_between(start, add_months_same_day(start, months))
        }
        StatutoryCap::Days(days) => days,
    }
}

/// Cap and adjusted deadline with no excluded time.
pub fn compute_cap_and_deadline(level: ChargeLevel, start: NaiveDate) -> DeadlineResult {
    compute_deadline_with_exclusions(level, start, 0)
}

/// Raw deadline is `start + cap + excluded_days`, then moved off weekends
/// and court holidays. Negative exclusions are treated as zero.
pub fn compute_deadline_with_exclusions(
    level: ChargeLevel,
    start: NaiveDate,
    excluded_days: i64,
) -> DeadlineResult {
    compute_deadline_with_calendar(level, start, excluded_days, &NyCourtCalendar::new())
}

pub fn compute_deadline_with_calendar<C: HolidayCalendar + ?Sized>(
    level: ChargeLevel,
    start: NaiveDate,
    excluded_days: i64,
    calendar: &C,
) -> DeadlineResult {
    let cap = cap_days(level, start);
    let excluded = excluded_days.max(0);
    let raw = add_days(add_days(start, cap), excluded);
    let adjustment = adjust_with(raw, calendar);

    DeadlineResult {
        cap_days: cap,
        excluded_days: excluded,
        raw_deadline_date: raw,
        deadline_date: adjustment.adjusted_date,
        was_adjusted: adjustment.was_adjusted(),
        adjustment_reason: adjustment.reason_text(),
    }
}

/// `None` until both a charge level and a start date are known.
pub fn deadline_for(
    level: Option<ChargeLevel>,
    start: Option<NaiveDate>,
    excluded_days: i64,
) -> Option<DeadlineResult> {
    deadline_for_with_calendar(level, start, excluded_days, &NyCourtCalendar::new())
}

pub fn deadline_for_with_calendar<C: HolidayCalendar + ?Sized>(
    level: Option<ChargeLevel>,
    start: Option<NaiveDate>,
    excluded_days: i64,
    calendar: &C,
) -> Option<DeadlineResult> {
    Some(compute_deadline_with_calendar(level?, start?, excluded_days, calendar))
}

/// Positive while time remains, zero on the day, negative once overdue.
pub fn days_until_deadline(deadline: NaiveDate, reference: NaiveDate) -> i64 {
    days_between(reference, deadline)
}

/// Chargeable days so far.
///
/// A frozen snapshot replaces the elapsed count and `today` is ignored.
/// Exclusions are subtracted either way and the result never goes negative.
pub fn elapsed_chargeable_days(
    start: NaiveDate,
    total_excluded: i64,
    frozen_total: Option<i64>,
    today: NaiveDate,
) -> i64 {
    let elapsed = frozen_total.unwrap_or_else(|| elapsed_days(start, today));
    (elapsed - total_excluded.max(0)).max(0)
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

pub fn format_days_until_deadline(days: i64) -> String {
    match days {
        0 => "30.30 deadline today".to_string(),
        d if d > 0 => format!("{d} day{} until 30.30 deadline", plural(d)),
        d => {
            let n = d.unsigned_abs() as i64;
            format!("{n} day{} past 30.30 deadline", plural(n))
        }
    }
}

/// Same offset text, measured from the next court date.
pub fn format_days_from_court_date(days: i64) -> String {
    match days {
        0 => "30.30 deadline today".to_string(),
        d if d > 0 => format!("{d} day{} until from court date 30.30 deadline", plural(d)),
        d => {
            let n = d.unsigned_abs() as i64;
            format!("{n} day{} past as of court date 30.30 deadline", plural(n))
        }
    }
}

pub fn deadline_urgency(days_until: i64, warning_days: i64) -> DeadlineUrgency {
    if days_until <= 0 {
        DeadlineUrgency::Overdue
    } else if days_until <= warning_days {
        DeadlineUrgency::Approaching
    } else {
        DeadlineUrgency::Comfortable
    }
}

/// `days_until` is measured from the reference date to the court date.
pub fn court_date_proximity(days_until: i64, warning_days: i64) -> CourtDateProximity {
    if days_until < 0 {
        CourtDateProximity::Past
    } else if days_until <= warning_days {
        CourtDateProximity::Soon
    } else {
        CourtDateProximity::Later
    }
}
