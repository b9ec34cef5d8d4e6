use axum::Json;

use shared_types::{
    AppError, CaseClockSummary, CaseRecord, ChargeLevel, ClockChangeRequest,
    ComputeDeadlineRequest, DeadlineResponse, EvaluateCaseRequest, ExcludedTotals,
    ExclusionSource, ExclusionSummaryResponse, SummarizeExclusionsRequest,
};

use super::reference_date;
use crate::caseload::normalize::normalize_case;
use crate::caseload::summary::summarize_case_with;
use crate::compliance::calendar::{format_date, format_date_with_weekday, parse_optional_date};
use crate::compliance::clock::{freeze_clock, unfreeze_clock};
use crate::compliance::deadline_engine::{
    days_until_deadline, deadline_for_with_calendar, format_days_until_deadline,
};
use crate::compliance::exclusions::{
    combine_excluded_totals, excluded_detail, sum_excludable_windows, window_days,
};
use crate::config::{court_calendar, tracker_settings};
use crate::error_convert::{CalendarResultExt, ValidateRequest};

// ── Deadline ──────────────────────────────────────────────────────

/// POST /api/speedy-trial/deadline
///
/// An unknown charge level or a missing start date is not an error: the
/// response comes back with empty deadline fields.
#[utoipa::path(
    post,
    path = "/api/speedy-trial/deadline",
    request_body = ComputeDeadlineRequest,
    responses(
        (status = 200, description = "Deadline computed (fields empty when data is incomplete)", body = DeadlineResponse),
        (status = 400, description = "Malformed date", body = AppError),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "speedy-trial"
)]
#[tracing::instrument]
pub async fn compute_deadline(
    Json(body): Json<ComputeDeadlineRequest>,
) -> Result<Json<DeadlineResponse>, AppError> {
    body.validate_request()?;

    let today = reference_date(body.reference_date.as_deref())?;
    let start = parse_optional_date(body.start_date.as_deref()).for_field("start_date")?;
    let level = body.charge_level.as_deref().and_then(ChargeLevel::from_str_opt);
    let excluded = body.excluded_days.unwrap_or(0);

    let Some(result) = deadline_for_with_calendar(level, start, excluded, court_calendar()) else {
        return Ok(Json(DeadlineResponse::empty(level)));
    };

    let days_until = days_until_deadline(result.deadline_date, today);
    Ok(Json(DeadlineResponse {
        charge_level: level,
        cap_days: result.cap_days,
        excluded_days: result.excluded_days,
        raw_deadline_date: format_date(result.raw_deadline_date),
        deadline_date: format_date(result.deadline_date),
        deadline_label: format_date_with_weekday(result.deadline_date),
        was_adjusted: result.was_adjusted,
        adjustment_reason: result.adjustment_reason,
        days_until_deadline: Some(days_until),
        status_text: format_days_until_deadline(days_until),
    }))
}

// ── Exclusions ────────────────────────────────────────────────────

/// POST /api/speedy-trial/exclusions
#[utoipa::path(
    post,
    path = "/api/speedy-trial/exclusions",
    request_body = SummarizeExclusionsRequest,
    responses(
        (status = 200, description = "Excluded-day totals", body = ExclusionSummaryResponse),
        (status = 422, description = "Validation error", body = AppError)
    ),
    tag = "speedy-trial"
)]
#[tracing::instrument(skip(body), fields(windows = body.windows.len()))]
pub async fn summarize_exclusions(
    Json(body): Json<SummarizeExclusionsRequest>,
) -> Result<Json<ExclusionSummaryResponse>, AppError> {
    body.validate_request()?;

    let mode = body.mode.unwrap_or(tracker_settings().exclusion_mode);
    let totals = sum_excludable_windows(&body.windows);
    let legacy = body.legacy_excluded_days.unwrap_or(0);

    let (effective, source) = if !totals.is_empty() {
        (totals, ExclusionSource::Windows)
    } else if legacy > 0 {
        (ExcludedTotals { definite: legacy, arguable: 0 }, ExclusionSource::Legacy)
    } else {
        (totals, ExclusionSource::None)
    };

    Ok(Json(ExclusionSummaryResponse {
        definite: totals.definite,
        arguable: totals.arguable,
        mode,
        counted: combine_excluded_totals(effective, mode),
        window_days: body.windows.iter().map(window_days).collect(),
        detail: excluded_detail(effective, source, mode),
    }))
}

// ── Clock ─────────────────────────────────────────────────────────

/// POST /api/speedy-trial/clock
#[utoipa::path(
    post,
    path = "/api/speedy-trial/clock",
    request_body = EvaluateCaseRequest,
    responses(
        (status = 200, description = "Clock summary for the case", body = CaseClockSummary),
        (status = 400, description = "Malformed date", body = AppError)
    ),
    tag = "speedy-trial"
)]
#[tracing::instrument(skip(body), fields(case_id = ?body.case.id))]
pub async fn evaluate_case(
    Json(body): Json<EvaluateCaseRequest>,
) -> Result<Json<CaseClockSummary>, AppError> {
    let today = reference_date(body.reference_date.as_deref())?;
    let settings = tracker_settings();
    let mode = body.mode.unwrap_or(settings.exclusion_mode);
    let case = normalize_case(body.case)?;

    Ok(Json(summarize_case_with(&case, mode, settings, court_calendar(), today)))
}

/// POST /api/speedy-trial/clock/freeze
#[utoipa::path(
    post,
    path = "/api/speedy-trial/clock/freeze",
    request_body = ClockChangeRequest,
    responses(
        (status = 200, description = "Case with the clock stopped", body = CaseRecord),
        (status = 400, description = "Malformed date", body = AppError)
    ),
    tag = "speedy-trial"
)]
#[tracing::instrument(skip(body), fields(case_id = ?body.case.id))]
pub async fn freeze_case_clock(
    Json(body): Json<ClockChangeRequest>,
) -> Result<Json<CaseRecord>, AppError> {
    let today = reference_date(body.reference_date.as_deref())?;
    let mut case = normalize_case(body.case)?;
    freeze_clock(&mut case, today);
    Ok(Json(case))
}

/// POST /api/speedy-trial/clock/unfreeze
#[utoipa::path(
    post,
    path = "/api/speedy-trial/clock/unfreeze",
    request_body = ClockChangeRequest,
    responses(
        (status = 200, description = "Case with the clock running", body = CaseRecord),
        (status = 400, description = "Malformed date", body = AppError)
    ),
    tag = "speedy-trial"
)]
#[tracing::instrument(skip(body), fields(case_id = ?body.case.id))]
pub async fn unfreeze_case_clock(
    Json(body): Json<ClockChangeRequest>,
) -> Result<Json<CaseRecord>, AppError> {
    let mut case = normalize_case(body.case)?;
    unfreeze_clock(&mut case);
    Ok(Json(case))
}
