use pretty_assertions::assert_eq;
use server::compliance::adjustment::*;
use server::compliance::calendar::{add_days, is_weekend};
use server::compliance::holidays::NyCourtCalendar;
use shared_types::{AdjustmentReason, CourtClosure};

use crate::common::date;

#[test]
fn saturday_moves_to_monday() {
    let adj = adjust_for_weekend_or_holiday(date(2024, 7, 13));
    assert_eq!(adj.adjusted_date, date(2024, 7, 15));
    assert_eq!(adj.reason, Some(AdjustmentReason::Saturday));
    assert_eq!(adj.reason_text(), "Adjusted for deadline falling on Saturday");
}

#[test]
fn sunday_moves_to_monday() {
    let adj = adjust_for_weekend_or_holiday(date(2026, 1, 25));
    assert_eq!(adj.adjusted_date, date(2026, 1, 26));
    assert_eq!(adj.reason_text(), "Adjusted for deadline falling on Sunday");
}

#[test]
fn weekday_holiday_moves_one_day() {
    let adj = adjust_for_weekend_or_holiday(date(2025, 5, 26));
    assert_eq!(adj.adjusted_date, date(2025, 5, 27));
    assert_eq!(adj.reason_text(), "Adjusted for Memorial Day");
}

#[test]
fn weekend_shift_does_not_recheck_holidays() {
    // Saturday 2024-01-13 lands on MLK Day and stays there.
    let adj = adjust_for_weekend_or_holiday(date(2024, 1, 13));
    assert_eq!(adj.adjusted_date, date(2024, 1, 15));
    assert_eq!(adj.reason, Some(AdjustmentReason::Saturday));

    // Sunday 2025-05-25 lands on Memorial Day.
    let adj = adjust_for_weekend_or_holiday(date(2025, 5, 25));
    assert_eq!(adj.adjusted_date, date(2025, 5, 26));
    assert_eq!(adj.reason, Some(AdjustmentReason::Sunday));
}

#[test]
fn friday_holiday_can_end_on_saturday() {
    // Christmas 2026 is a Friday; the holiday branch stops on Saturday.
    let adj = adjust_for_weekend_or_holiday(date(2026, 12, 25));
    assert_eq!(adj.adjusted_date, date(2026, 12, 26));
    assert_eq!(adj.reason_text(), "Adjusted for Christmas Day");
}

#[test]
fn consecutive_closures_report_the_last_one() {
    let calendar = NyCourtCalendar::with_closures(vec![CourtClosure {
        date: date(2025, 11, 28),
        name: "Court closure".into(),
    }]);
    let adj = adjust_with(date(2025, 11, 27), &calendar);
    assert_eq!(adj.adjusted_date, date(2025, 11, 29));
    assert_eq!(adj.reason, Some(AdjustmentReason::Holiday("Court closure".into())));
}

#[test]
fn adjusted_date_is_never_a_weekend() {
    let start = date(2024, 1, 1);
    for n in 0..(366 * 3) {
        let d = add_days(start, n);
        let adj = adjust_for_weekend_or_holiday(d);
        if adj.reason.as_ref().is_some_and(|r| !matches!(r, AdjustmentReason::Holiday(_))) {
            assert!(!is_weekend(adj.adjusted_date), "{d}");
        }
        assert!(adj.adjusted_date >= d);
    }
}

#[test]
fn adjusting_twice_is_a_no_op_on_weekday_results() {
    let start = date(2024, 1, 1);
    for n in 0..(366 * 3) {
        let d = add_days(start, n);
        let once = adjust_for_weekend_or_holiday(d);
        if is_weekend(once.adjusted_date) || server::compliance::holidays::is_court_holiday(once.adjusted_date) {
            continue;
        }
        let twice = adjust_for_weekend_or_holiday(once.adjusted_date);
        assert_eq!(twice.adjusted_date, once.adjusted_date, "{d}");
        assert!(!twice.was_adjusted());
    }
}
