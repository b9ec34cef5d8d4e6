use axum::Router;
use shared_types::{
    // Errors
    AppError, AppErrorKind,
    // Speedy-trial types
    AdjustmentReason, ChargeLevel, ClockState, ComputeDeadlineRequest, CourtDateProximity,
    CourtHoliday, DeadlineResponse, DeadlineResult, DeadlineUrgency, ExcludableWindow,
    ExcludedTotals, ExclusionMode, ExclusionSource, ExclusionSummaryResponse,
    HolidayCheckResponse, SummarizeExclusionsRequest,
    // Case types
    CaseCharge, CaseRecord, CaseTodo, ClockChangeRequest, EvaluateCaseRequest, LooseNumber,
    StoredCaseRecord, StoredCharge, StoredTodo, StoredWindow,
    // Caseload types
    BusyDay, CaseClockSummary, CaseListFilter, CaseloadViewRequest, CaseloadViewResponse,
    SkippedRecord, SortMode, ViewMode,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rest;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::speedy_trial::compute_deadline,
        rest::speedy_trial::summarize_exclusions,
        rest::speedy_trial::evaluate_case,
        rest::speedy_trial::freeze_case_clock,
        rest::speedy_trial::unfreeze_case_clock,
        rest::holiday::list_holidays,
        rest::holiday::check_date,
        rest::caseload::caseload_view,
    ),
    components(schemas(
        AppError, AppErrorKind, HealthResponse,
        AdjustmentReason, ChargeLevel, ClockState, ComputeDeadlineRequest, CourtDateProximity,
        CourtHoliday, DeadlineResponse, DeadlineResult, DeadlineUrgency, ExcludableWindow,
        ExcludedTotals, ExclusionMode, ExclusionSource, ExclusionSummaryResponse,
        HolidayCheckResponse, SummarizeExclusionsRequest,
        CaseCharge, CaseRecord, CaseTodo, ClockChangeRequest, EvaluateCaseRequest, LooseNumber,
        StoredCaseRecord, StoredCharge, StoredTodo, StoredWindow,
        BusyDay, CaseClockSummary, CaseListFilter, CaseloadViewRequest, CaseloadViewResponse,
        SkippedRecord, SortMode, ViewMode,
    )),
    tags(
        (name = "speedy-trial", description = "CPL § 30.30 deadline, exclusion and clock endpoints"),
        (name = "holidays", description = "NY court holiday table"),
        (name = "caseload", description = "Filtered caseload views with clock summaries"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Caseclock API",
        description = "NY CPL § 30.30 speedy-trial deadline tracking",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router() -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
