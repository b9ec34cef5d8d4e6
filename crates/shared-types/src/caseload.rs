use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::case::{CaseTodo, StoredCaseRecord};
use crate::speedy_trial::{
    ChargeLevel, ClockState, CourtDateProximity, DeadlineResult, DeadlineUrgency, ExclusionMode,
};

/// Which slice of the caseload to show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    /// Cases on today's calendar.
    Today,
    /// Cases on an overloaded court day.
    Busy,
    /// Cases with outstanding to-dos, soonest to-do first.
    Todos,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Client name, case-insensitive.
    #[default]
    Client,
    /// Soonest next court date first; cases without one last.
    #[serde(alias = "ncd")]
    NextCourtDate,
}

/// Case list filter as set from the list toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CaseListFilter {
    /// Case-insensitive substring over name, docket, notes, ADA, contact
    /// details and appearance type.
    pub search: String,
    pub show_closed: bool,
    pub show_warrant: bool,
    /// Only cases where the certificate of readiness has been filed.
    pub ready_only: bool,
    pub view: ViewMode,
    pub sort: SortMode,
}

/// Everything a case row needs about the speedy-trial clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseClockSummary {
    pub case_id: String,
    pub client_name: String,
    pub docket_number: String,
    pub charge_level: Option<ChargeLevel>,
    pub charge_label: String,
    pub clock: ClockState,
    /// Calendar days counted so far; `None` without a start date.
    pub total_days: Option<i64>,
    pub excluded_days: i64,
    pub excluded_detail: String,
    pub chargeable_days: i64,
    pub cap_days: i64,
    pub deadline: Option<DeadlineResult>,
    pub deadline_label: String,
    pub days_until_deadline: Option<i64>,
    pub deadline_text: String,
    pub urgency: Option<DeadlineUrgency>,
    pub next_court_date: Option<NaiveDate>,
    pub court_date_proximity: Option<CourtDateProximity>,
    /// Offset of the deadline from the next court date; empty once ready.
    pub court_date_text: String,
    pub outstanding_todos: usize,
    pub next_todo: Option<CaseTodo>,
    /// Non-blocking data-entry problems to flag on the row.
    pub warnings: Vec<String>,
}

/// A court day with more appearances than one attorney can cover easily.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BusyDay {
    pub date: NaiveDate,
    pub label: String,
    pub case_count: usize,
    /// Distinct court parts, sorted.
    pub parts: Vec<String>,
}

/// A stored record that could not be normalised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SkippedRecord {
    pub id: Option<String>,
    pub reason: String,
}

// ── Request / response types ──────────────────────────────────────

/// Request to evaluate a single stored case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EvaluateCaseRequest {
    pub case: StoredCaseRecord,
    #[serde(default)]
    pub mode: Option<ExclusionMode>,
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Request to stop or restart a case's clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClockChangeRequest {
    pub case: StoredCaseRecord,
    /// Moment of the freeze; defaults to today.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Request to filter, sort and summarise a caseload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CaseloadViewRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 5000, message = "At most 5000 cases per request"))
    )]
    #[serde(default)]
    pub cases: Vec<StoredCaseRecord>,
    #[serde(default)]
    pub filter: CaseListFilter,
    #[serde(default)]
    pub mode: Option<ExclusionMode>,
    #[serde(default)]
    pub reference_date: Option<String>,
    /// Drop records with malformed dates instead of treating the bad
    /// fields as blank.
    #[serde(default)]
    pub strict_dates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseloadViewResponse {
    pub total_cases: usize,
    pub shown: usize,
    pub cases: Vec<CaseClockSummary>,
    /// Upcoming busy days across the filtered (pre-view) caseload.
    pub busy_days: Vec<BusyDay>,
    pub skipped: Vec<SkippedRecord>,
}
