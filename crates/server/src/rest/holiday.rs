use axum::{extract::Path, Json};
use chrono::Datelike;

use shared_types::{AppError, CourtHoliday, HolidayCheckResponse};

use crate::compliance::adjustment::adjust_with;
use crate::compliance::calendar::{format_date, is_weekend, parse_local_date};
use crate::compliance::holidays::{court_holidays, HolidayCalendar};
use crate::config::court_calendar;
use crate::error_convert::CalendarResultExt;

/// GET /api/holidays/{year}
///
/// Includes any configured court closures that fall in the year.
#[utoipa::path(
    get,
    path = "/api/holidays/{year}",
    params(("year" = i32, Path, description = "Four-digit calendar year")),
    responses(
        (status = 200, description = "Court holidays on their observed dates", body = Vec<CourtHoliday>),
        (status = 400, description = "Year out of range", body = AppError)
    ),
    tag = "holidays"
)]
#[tracing::instrument]
pub async fn list_holidays(Path(year): Path<i32>) -> Result<Json<Vec<CourtHoliday>>, AppError> {
    if !(1..=9999).contains(&year) {
        return Err(AppError::bad_request(format!(
            "year must be between 1 and 9999, got {year}"
        )));
    }

    let mut holidays = court_holidays(year);
    holidays.extend(
        court_calendar()
            .closures()
            .iter()
            .filter(|c| c.date.year() == year)
            .map(|c| CourtHoliday {
                date: c.date,
                name: c.name.clone(),
            }),
    );
    holidays.sort_by_key(|h| h.date);
    Ok(Json(holidays))
}

/// GET /api/holidays/check/{date}
#[utoipa::path(
    get,
    path = "/api/holidays/check/{date}",
    params(("date" = String, Path, description = "Date as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Holiday status and deadline adjustment for the date", body = HolidayCheckResponse),
        (status = 400, description = "Malformed date", body = AppError)
    ),
    tag = "holidays"
)]
#[tracing::instrument]
pub async fn check_date(Path(date): Path<String>) -> Result<Json<HolidayCheckResponse>, AppError> {
    let date = parse_local_date(&date).for_field("date")?;
    let calendar = court_calendar();
    let adjustment = adjust_with(date, calendar);

    Ok(Json(HolidayCheckResponse {
        date: format_date(date),
        weekday: date.format("%A").to_string(),
        holiday: calendar.holiday_name(date),
        is_weekend: is_weekend(date),
        adjusted_date: format_date(adjustment.adjusted_date),
        adjustment_reason: adjustment.reason_text(),
    }))
}
