use pretty_assertions::assert_eq;
use server::compliance::calendar::*;

use crate::common::date;

#[test]
fn add_days_round_trips_through_days_between() {
    let start = date(2024, 1, 31);
    for n in 0..800 {
        assert_eq!(days_between(start, add_days(start, n)), n, "n = {n}");
    }
}

#[test]
fn leap_year_month_clamp() {
    assert_eq!(add_months_same_day(date(2024, 1, 31), 1), date(2024, 2, 29));
}

#[test]
fn month_addition_keeps_day_when_it_exists() {
    for day in 1..=28 {
        let start = date(2025, 1, day);
        assert_eq!(add_months_same_day(start, 6), date(2025, 7, day));
    }
}

#[test]
fn same_day_and_weekend() {
    assert!(is_same_day(date(2025, 3, 17), parse_local_date("2025-03-17").unwrap()));
    assert!(!is_same_day(date(2025, 3, 17), date(2025, 3, 18)));
    assert!(is_weekend(date(2024, 7, 13)));
    assert!(!is_weekend(date(2024, 7, 15)));
}

#[test]
fn elapsed_days_is_clamped() {
    assert_eq!(elapsed_days(date(2025, 1, 1), date(2025, 2, 15)), 45);
    assert_eq!(elapsed_days(date(2025, 2, 15), date(2025, 1, 1)), 0);
}

#[test]
fn strict_parsing_rejects_rollover_dates() {
    assert_eq!(
        parse_local_date("2024-02-30"),
        Err(CalendarError::InvalidDateFormat("2024-02-30".into()))
    );
    assert!(parse_local_date("2024-02-29").is_ok());
    assert!(parse_local_date("2023-02-29").is_err());
}

#[test]
fn invalid_date_error_message_names_the_input() {
    let err = parse_local_date("tomorrow").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid date format: \"tomorrow\" (expected YYYY-MM-DD)"
    );
}
