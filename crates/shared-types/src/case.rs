use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::speedy_trial::{ChargeLevel, ExcludableWindow, ExcludedTotals, ExclusionSource};

/// A criminal case after normalisation: typed dates, a resolved charge level
/// and structured exclusions. This is the only shape the calculation core
/// and caseload views accept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseRecord {
    pub id: String,
    pub client_name: String,
    pub docket_number: String,
    pub charge_level: Option<ChargeLevel>,
    /// Date the speedy-trial clock started (usually arraignment).
    pub start_date: Option<NaiveDate>,
    pub ex_windows: Vec<ExcludableWindow>,
    /// Excluded days by category, already migrated from legacy shapes.
    pub excluded: ExcludedTotals,
    pub exclusion_source: ExclusionSource,
    pub clock_stopped: bool,
    /// Elapsed-day snapshot taken when the clock was stopped.
    pub frozen_total_days: Option<i64>,
    /// Certificate of compliance/readiness filed.
    pub coc_filed: bool,
    pub coc_date: Option<NaiveDate>,
    pub closed: bool,
    pub warrant: bool,
    pub next_court_date: Option<NaiveDate>,
    pub next_court_appearance_type: String,
    pub court_part: String,
    pub assigned_ada: String,
    pub client_phone: String,
    pub client_email: String,
    pub notes: String,
    pub charges: Vec<CaseCharge>,
    pub todos: Vec<CaseTodo>,
}

impl CaseRecord {
    pub fn outstanding_todos(&self) -> impl Iterator<Item = &CaseTodo> {
        self.todos.iter().filter(|t| !t.completed)
    }

    pub fn has_outstanding_todos(&self) -> bool {
        self.outstanding_todos().next().is_some()
    }

    /// Soonest deadline among outstanding todos.
    pub fn soonest_todo_deadline(&self) -> Option<NaiveDate> {
        self.outstanding_todos().filter_map(|t| t.deadline).min()
    }
}

/// One charge on a case; the primary charge drives the case's level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseCharge {
    pub name: String,
    pub statute: String,
    pub class: Option<ChargeLevel>,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseTodo {
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
}

// ── Stored (pre-normalisation) shapes ─────────────────────────────

/// A number field as the storage layer may have written it: a JSON number,
/// a numeric string, or garbage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    /// Whole-day value, or `None` when the field is not numeric.
    pub fn as_days(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0);
                }
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
        }
    }
}

/// A case exactly as the browser store persists it: camelCase keys, every
/// field optional, dates as strings, counters as loose numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StoredCaseRecord {
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub docket_number: Option<String>,
    pub charge_level: Option<String>,
    pub start_date: Option<String>,
    /// Scalar total from before the definite/arguable split.
    pub excluded_days: Option<LooseNumber>,
    pub definitely_excluded_days: Option<LooseNumber>,
    pub arguably_excluded_days: Option<LooseNumber>,
    pub ex_windows: Option<Vec<StoredWindow>>,
    pub clock_stopped: Option<bool>,
    pub frozen_total_days: Option<LooseNumber>,
    pub coc_filed: Option<bool>,
    pub coc_date: Option<String>,
    pub closed: Option<bool>,
    pub warrant: Option<bool>,
    pub next_court_date: Option<String>,
    pub next_court_appearance_type: Option<String>,
    pub court_part: Option<String>,
    pub assigned_ada: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    pub notes: Option<String>,
    pub charges: Option<Vec<StoredCharge>>,
    pub todos: Option<Vec<StoredTodo>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct StoredWindow {
    pub start: Option<String>,
    pub end: Option<String>,
    pub reason: Option<String>,
    pub arguable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StoredCharge {
    pub name: Option<String>,
    pub statute: Option<String>,
    pub class: Option<String>,
    pub is_primary_charge: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct StoredTodo {
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub completed: Option<bool>,
    /// Older records used `done`.
    pub done: Option<bool>,
}
