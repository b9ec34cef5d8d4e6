use axum::Json;

use shared_types::{AppError, CaseloadViewRequest, CaseloadViewResponse};

use super::reference_date;
use crate::caseload::build_caseload_view;
use crate::caseload::normalize::DateParsing;
use crate::config::{court_calendar, tracker_settings};
use crate::error_convert::ValidateRequest;

/// POST /api/caseload/view
///
/// Normalises the posted records, applies the list filter and view mode,
/// and returns one clock summary per shown case plus upcoming busy days.
#[utoipa::path(
    post,
    path = "/api/caseload/view",
    request_body = CaseloadViewRequest,
    responses(
        (status = 200, description = "Filtered and summarised caseload", body = CaseloadViewResponse),
        (status = 400, description = "Malformed reference date", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "caseload"
)]
#[tracing::instrument(skip(body), fields(cases = body.cases.len(), view = ?body.filter.view))]
pub async fn caseload_view(
    Json(body): Json<CaseloadViewRequest>,
) -> Result<Json<CaseloadViewResponse>, AppError> {
    body.validate_request()?;

    let today = reference_date(body.reference_date.as_deref())?;
    let settings = tracker_settings();
    let parsing = if body.strict_dates {
        DateParsing::Strict
    } else {
        DateParsing::Lenient
    };

    let view = build_caseload_view(
        body.cases,
        &body.filter,
        body.mode.unwrap_or(settings.exclusion_mode),
        parsing,
        settings,
        court_calendar(),
        today,
    );
    tracing::debug!(shown = view.shown, skipped = view.skipped.len(), "caseload view built");
    Ok(Json(view))
}
