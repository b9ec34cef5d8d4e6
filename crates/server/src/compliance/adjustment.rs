//! Moves a deadline that lands on a day the courts are closed.

use chrono::{Datelike, NaiveDate, Weekday};
use shared_types::AdjustmentReason;

use super::calendar::add_days;
use super::holidays::{HolidayCalendar, NyCourtCalendar};

/// Upper bound on consecutive holiday days skipped. No real calendar comes
/// close; a misconfigured closure list could.
pub const MAX_HOLIDAY_ADVANCE: u32 = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub adjusted_date: NaiveDate,
    pub reason: Option<AdjustmentReason>,
}

impl Adjustment {
    pub fn was_adjusted(&self) -> bool {
        self.reason.is_some()
    }

    /// Display text; empty when the date did not move.
    pub fn reason_text(&self) -> String {
        self.reason
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Adjust against the built-in NY court holiday table only.
pub fn adjust_for_weekend_or_holiday(date: NaiveDate) -> Adjustment {
    adjust_with(date, &NyCourtCalendar::new())
}

/// Saturday moves to Monday and Sunday moves to Monday. A weekday holiday
/// run is skipped one day at a time, reporting the last holiday passed.
///
/// The two branches are exclusive: the Monday reached from a weekend is not
/// checked for a holiday, and a holiday run may end on a Saturday.
pub fn adjust_with<C: HolidayCalendar + ?Sized>(date: NaiveDate, calendar: &C) -> Adjustment {
    match date.weekday() {
        Weekday::Sat => {
            return Adjustment {
                adjusted_date: add_days(date, 2),
                reason: Some(AdjustmentReason::Saturday),
            };
        }
        Weekday::Sun => {
            return Adjustment {
                adjusted_date: add_days(date, 1),
                reason: Some(AdjustmentReason::Sunday),
            };
        }
        _ => {}
    }

    let mut current = date;
    let mut last_holiday = None;
    let mut advanced = 0;
    while let Some(name) = calendar.holiday_name(current) {
        if advanced == MAX_HOLIDAY_ADVANCE {
            tracing::warn!(
                start = %date,
                stopped_at = %current,
                "holiday adjustment hit the {MAX_HOLIDAY_ADVANCE}-day bound"
            );
            break;
        }
        last_holiday = Some(name);
        current = add_days(current, 1);
        advanced += 1;
    }

    Adjustment {
        adjusted_date: current,
        reason: last_holiday.map(AdjustmentReason::Holiday),
    }
}
