use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::speedy_trial::ExclusionMode;

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete
/// config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Thresholds and defaults for caseload views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct TrackerSettings {
    /// Policy used when a request does not name one.
    pub exclusion_mode: ExclusionMode,
    /// Deadlines this many days out or fewer are flagged as approaching.
    pub deadline_warning_days: i64,
    /// Court dates this many days out or fewer are flagged as soon.
    pub court_date_warning_days: i64,
    /// A court day is busy with more than this many cases...
    pub busy_min_cases: usize,
    /// ...or more than this many distinct parts.
    pub busy_min_parts: usize,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            exclusion_mode: ExclusionMode::DefPlusArg,
            deadline_warning_days: 30,
            court_date_warning_days: 7,
            busy_min_cases: 3,
            busy_min_parts: 2,
        }
    }
}

impl TrackerSettings {
    /// Busy thresholds below one are meaningless; clamp them.
    pub fn sanitized(mut self) -> Self {
        self.busy_min_cases = self.busy_min_cases.max(1);
        self.busy_min_parts = self.busy_min_parts.max(1);
        self.deadline_warning_days = self.deadline_warning_days.max(0);
        self.court_date_warning_days = self.court_date_warning_days.max(0);
        self
    }
}

/// An extra day the courts are closed (weather, administrative closure).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtClosure {
    pub date: NaiveDate,
    pub name: String,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub speedy_trial: TrackerSettings,
    #[serde(default)]
    pub closures: Vec<CourtClosure>,
}
