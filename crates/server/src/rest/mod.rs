pub mod caseload;
pub mod holiday;
pub mod speedy_trial;

use axum::{routing::{get, post}, Router};
use chrono::NaiveDate;
use shared_types::AppError;

use crate::compliance::calendar::{parse_optional_date, today};
use crate::error_convert::CalendarResultExt;

/// Reference date from a request, defaulting to today on the local clock.
pub(crate) fn reference_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    Ok(parse_optional_date(value)
        .for_field("reference_date")?
        .unwrap_or_else(today))
}

/// Build the REST API router. Every handler is stateless.
pub fn api_router() -> Router {
    Router::new()
        // Speedy-trial calculations
        .route("/api/speedy-trial/deadline", post(speedy_trial::compute_deadline))
        .route("/api/speedy-trial/exclusions", post(speedy_trial::summarize_exclusions))
        .route("/api/speedy-trial/clock", post(speedy_trial::evaluate_case))
        .route("/api/speedy-trial/clock/freeze", post(speedy_trial::freeze_case_clock))
        .route("/api/speedy-trial/clock/unfreeze", post(speedy_trial::unfreeze_case_clock))
        // Court holidays
        .route("/api/holidays/check/{date}", get(holiday::check_date))
        .route("/api/holidays/{year}", get(holiday::list_holidays))
        // Caseload
        .route("/api/caseload/view", post(caseload::caseload_view))
}
