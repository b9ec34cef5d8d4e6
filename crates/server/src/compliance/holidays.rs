//! NY State court holiday table.
//!
//! Eleven holidays, computed per year on demand. Fixed-date holidays that
//! fall on a Sunday are observed the following Monday; a Saturday holiday is
//! not moved because the courts are already closed.

use chrono::{Datelike, NaiveDate, Weekday};
use shared_types::{CourtClosure, CourtHoliday};

/// Which occurrence of a weekday within its month.
#[derive(Debug, Clone, Copy)]
enum Occurrence {
    Nth(u32),
    Last,
}

/// (month, day, name), checked before the floating holidays.
const FIXED_HOLIDAYS: [(u32, u32, &str); 5] = [
    (1, 1, "New Year's Day"),
    (6, 19, "Juneteenth"),
    (7, 4, "Independence Day"),
    (11, 11, "Veterans Day"),
    (12, 25, "Christmas Day"),
];

const FLOATING_HOLIDAYS: [(u32, Weekday, Occurrence, &str); 6] = [
    (1, Weekday::Mon, Occurrence::Nth(3), "Martin Luther King Jr. Day"),
    (2, Weekday::Mon, Occurrence::Nth(3), "Presidents' Day"),
    (5, Weekday::Mon, Occurrence::Last, "Memorial Day"),
    (9, Weekday::Mon, Occurrence::Nth(1), "Labor Day"),
    (10, Weekday::Mon, Occurrence::Nth(2), "Columbus Day"),
    (11, Weekday::Thu, Occurrence::Nth(4), "Thanksgiving Day"),
];

/// Compute the nth occurrence of a given weekday in a month.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, u8::try_from(n).ok()?)
}

/// Compute the last occurrence of a given weekday in a month.
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last_of_month = first_of_next.pred_opt()?;
    let days_back = (last_of_month.weekday().num_days_from_monday() + 7
        - weekday.num_days_from_monday())
        % 7;
    NaiveDate::from_ymd_opt(year, month, last_of_month.day() - days_back)
}

/// Sunday holidays move to Monday; nothing else moves.
fn observed_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    }
}

fn floating_date(year: i32, month: u32, weekday: Weekday, occurrence: Occurrence) -> Option<NaiveDate> {
    match occurrence {
        Occurrence::Nth(n) => nth_weekday_of_month(year, month, weekday, n),
        Occurrence::Last => last_weekday_of_month(year, month, weekday),
    }
}

/// Name of the court holiday observed on `date`, if any.
///
/// A pure function of the date: the year's table is recomputed per call.
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    let year = date.year();

    let fixed = FIXED_HOLIDAYS.iter().find(|(month, day, _)| {
        NaiveDate::from_ymd_opt(year, *month, *day)
            .and_then(observed_date)
            .is_some_and(|observed| observed == date)
    });
    if let Some((_, _, name)) = fixed {
        return Some(name);
    }

    FLOATING_HOLIDAYS
        .iter()
        .find(|(month, weekday, occurrence, _)| {
            floating_date(year, *month, *weekday, *occurrence) == Some(date)
        })
        .map(|(_, _, _, name)| *name)
}

pub fn is_court_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}

/// All eleven court holidays for `year`, on their observed dates, sorted.
pub fn court_holidays(year: i32) -> Vec<CourtHoliday> {
    let fixed = FIXED_HOLIDAYS.iter().filter_map(|(month, day, name)| {
        let date = NaiveDate::from_ymd_opt(year, *month, *day).and_then(observed_date)?;
        Some(CourtHoliday {
            date,
            name: name.to_string(),
        })
    });
    let floating = FLOATING_HOLIDAYS
        .iter()
        .filter_map(|(month, weekday, occurrence, name)| {
            Some(CourtHoliday {
                date: floating_date(year, *month, *weekday, *occurrence)?,
                name: name.to_string(),
            })
        });

    let mut holidays: Vec<CourtHoliday> = fixed.chain(floating).collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Source of "is the court closed on this day" answers for deadline
/// adjustment.
pub trait HolidayCalendar {
    fn holiday_name(&self, date: NaiveDate) -> Option<String>;
}

/// The statutory NY court holidays plus any configured one-off closures.
#[derive(Debug, Clone, Default)]
pub struct NyCourtCalendar {
    closures: Vec<CourtClosure>,
}

impl NyCourtCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closures(closures: Vec<CourtClosure>) -> Self {
        Self { closures }
    }

    pub fn closures(&self) -> &[CourtClosure] {
        &self.closures
    }
}

impl HolidayCalendar for NyCourtCalendar {
    fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        holiday_name(date).map(str::to_string).or_else(|| {
            self.closures
                .iter()
                .find(|c| c.date == date)
                .map(|c| c.name.clone())
        })
    }
}
