use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

// ── Charge classification ─────────────────────────────────────────

/// Charge classification driving the CPL § 30.30 readiness cap.
///
/// Serialized exactly as the stored case records spell it
/// (`felony`, `classA`, `classB`, `violation`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum ChargeLevel {
    Felony,
    ClassA,
    ClassB,
    Violation,
}

/// How long the prosecution has, before exclusions, to be ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatutoryCap {
    /// Calendar months, same day-of-month (clamped to month end).
    Months(u32),
    Days(i64),
}

impl ChargeLevel {
    pub const ALL: [ChargeLevel; 4] = [
        ChargeLevel::Felony,
        ChargeLevel::ClassA,
        ChargeLevel::ClassB,
        ChargeLevel::Violation,
    ];

    /// Parse a stored charge level. Unknown or blank values yield `None`,
    /// which callers treat as "not enough data yet".
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim() {
            "felony" => Some(Self::Felony),
            "classA" => Some(Self::ClassA),
            "classB" => Some(Self::ClassB),
            "violation" => Some(Self::Violation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Felony => "felony",
            Self::ClassA => "classA",
            Self::ClassB => "classB",
            Self::Violation => "violation",
        }
    }

    /// Label shown in case lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Felony => "Felony",
            Self::ClassA => "Class A Misd",
            Self::ClassB => "Class B Misd",
            Self::Violation => "Violation",
        }
    }

    pub fn statutory_cap(&self) -> StatutoryCap {
        match self {
            Self::Felony => StatutoryCap::Months(6),
            Self::ClassA => StatutoryCap::Days(90),
            Self::ClassB => StatutoryCap::Days(60),
            Self::Violation => StatutoryCap::Days(30),
        }
    }
}

impl fmt::Display for ChargeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Excludable time ───────────────────────────────────────────────

/// Which excluded-day totals count against the clock. A display-time
/// choice; the same case can be viewed under either policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum ExclusionMode {
    /// Only definitely-excludable days extend the deadline.
    DefOnly,
    /// Definite plus arguable days.
    #[default]
    DefPlusArg,
}

/// A date range during which elapsed time does not count against the clock.
///
/// Either date may be missing while the user is still filling the window in;
/// such a window contributes zero days but is kept for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExcludableWindow {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub reason: String,
    /// `true` when the exclusion is contested rather than clear.
    #[serde(default)]
    pub arguable: bool,
}

/// Excluded days split by category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExcludedTotals {
    pub definite: i64,
    pub arguable: i64,
}

impl ExcludedTotals {
    pub fn is_empty(&self) -> bool {
        self.definite == 0 && self.arguable == 0
    }

    pub fn total(&self) -> i64 {
        self.definite + self.arguable
    }
}

/// Where a case's excluded totals came from during normalisation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ExclusionSource {
    #[default]
    None,
    /// Summed from dated excludable windows.
    Windows,
    /// Definite/arguable totals entered by hand.
    Manual,
    /// Migrated from the pre-split scalar `excludedDays`.
    Legacy,
}

// ── Deadline results ──────────────────────────────────────────────

/// Why a raw deadline was moved forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum AdjustmentReason {
    Saturday,
    Sunday,
    Holiday(String),
}

impl fmt::Display for AdjustmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saturday => write!(f, "Adjusted for deadline falling on Saturday"),
            Self::Sunday => write!(f, "Adjusted for deadline falling on Sunday"),
            Self::Holiday(name) => write!(f, "Adjusted for {}", name),
        }
    }
}

/// Outcome of a deadline computation. Recomputed on every request from the
/// case's start date and excluded totals; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeadlineResult {
    pub cap_days: i64,
    /// Excluded days added on top of the cap.
    pub excluded_days: i64,
    /// `start + cap + excluded`, before weekend/holiday adjustment.
    pub raw_deadline_date: NaiveDate,
    pub deadline_date: NaiveDate,
    pub was_adjusted: bool,
    /// Empty when no adjustment was needed.
    pub adjustment_reason: String,
}

/// Where a case's speedy-trial clock stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ClockState {
    /// Ticking against the reference date.
    Running,
    /// Stopped by hand; the elapsed count is the snapshot taken at freeze time.
    Frozen { total_days: i64 },
    /// Certificate of readiness filed; counting stopped at the certificate date.
    Ready { coc_date: NaiveDate, total_days: i64 },
}

/// Colour band for the 30.30 deadline in case lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DeadlineUrgency {
    /// Due today or already past.
    Overdue,
    Approaching,
    Comfortable,
}

/// Colour band for the next court date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CourtDateProximity {
    Past,
    Soon,
    Later,
}

/// A NY court holiday on its observed date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtHoliday {
    pub date: NaiveDate,
    pub name: String,
}

// ── Request / response types ──────────────────────────────────────

/// Request to compute a 30.30 deadline from raw form values.
///
/// Dates are `YYYY-MM-DD` strings so a malformed value can be reported
/// back as such rather than as a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ComputeDeadlineRequest {
    #[serde(default)]
    pub charge_level: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Excluded days must be a positive number"))
    )]
    #[serde(default)]
    pub excluded_days: Option<i64>,
    /// Defaults to today.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Deadline computation response. Fields are empty/zero when there is
/// not yet enough data (no start date or unknown charge level).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeadlineResponse {
    pub charge_level: Option<ChargeLevel>,
    pub cap_days: i64,
    pub excluded_days: i64,
    pub raw_deadline_date: String,
    pub deadline_date: String,
    /// e.g. "Monday, 07/15/2024".
    pub deadline_label: String,
    pub was_adjusted: bool,
    pub adjustment_reason: String,
    pub days_until_deadline: Option<i64>,
    pub status_text: String,
}

impl DeadlineResponse {
    /// The "cannot compute yet" response.
    pub fn empty(charge_level: Option<ChargeLevel>) -> Self {
        Self {
            charge_level,
            cap_days: 0,
            excluded_days: 0,
            raw_deadline_date: String::new(),
            deadline_date: String::new(),
            deadline_label: String::new(),
            was_adjusted: false,
            adjustment_reason: String::new(),
            days_until_deadline: None,
            status_text: String::new(),
        }
    }
}

/// Request to total a list of excludable windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SummarizeExclusionsRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 500, message = "At most 500 windows per request"))
    )]
    #[serde(default)]
    pub windows: Vec<ExcludableWindow>,
    #[serde(default)]
    pub mode: Option<ExclusionMode>,
    /// Pre-split scalar total used when the windows carry no dated days.
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Excluded days must be a positive number"))
    )]
    #[serde(default)]
    pub legacy_excluded_days: Option<i64>,
}

/// Totals for a set of excludable windows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExclusionSummaryResponse {
    pub definite: i64,
    pub arguable: i64,
    pub mode: ExclusionMode,
    /// Days that count under `mode`.
    pub counted: i64,
    /// Per-window inclusive durations, in request order.
    pub window_days: Vec<i64>,
    pub detail: String,
}

/// Holiday and weekend status for a single date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HolidayCheckResponse {
    pub date: String,
    pub weekday: String,
    pub holiday: Option<String>,
    pub is_weekend: bool,
    /// Where a deadline landing on `date` would move to.
    pub adjusted_date: String,
    pub adjustment_reason: String,
}
