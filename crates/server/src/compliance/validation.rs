//! Form-level checks for case entry.
//!
//! These never block a computation; the engine is total over its inputs.
//! They tell the caller what to flag next to a field.

use chrono::NaiveDate;
use shared_types::ExcludableWindow;

use super::calendar::{add_months_same_day, format_date};

/// Start dates older than this many months are probably typos.
const STALE_START_MONTHS: i32 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Warning(String),
    Invalid(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Warning(msg) | Self::Invalid(msg) => Some(msg),
        }
    }
}

/// `field` names the pair in messages, e.g. "Excludable period".
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    field: &str,
    today: NaiveDate,
) -> Validation {
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            return Validation::Invalid(format!(
                "{field}: end date {} is before start date {}",
                format_date(e),
                format_date(s)
            ));
        }
    }
    if let Some(s) = start {
        if s < add_months_same_day(today, -STALE_START_MONTHS) {
            return Validation::Warning(format!(
                "{field}: start date {} is more than two years ago",
                format_date(s)
            ));
        }
    }
    Validation::Valid
}

pub fn validate_excluded_days(excluded: i64, total_days: i64) -> Validation {
    if excluded < 0 {
        return Validation::Invalid("Excluded days must be a positive number".to_string());
    }
    if excluded > total_days {
        return Validation::Warning(format!(
            "Excluded days ({excluded}) exceed total elapsed days ({total_days}); chargeable days will be 0"
        ));
    }
    Validation::Valid
}

pub fn validate_window(window: &ExcludableWindow, today: NaiveDate) -> Validation {
    if window.start.is_some() != window.end.is_some() {
        return Validation::Warning(
            "Excludable period needs both a start and an end date to count".to_string(),
        );
    }
    validate_date_range(window.start, window.end, "Excludable period", today)
}
