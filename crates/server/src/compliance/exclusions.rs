//! Excludable-time totals.

use shared_types::{ExcludableWindow, ExcludedTotals, ExclusionMode, ExclusionSource};

use super::calendar::days_between;

/// Inclusive length of a window. Undated or reversed windows count zero.
pub fn window_days(window: &ExcludableWindow) -> i64 {
    match (window.start, window.end) {
        (Some(start), Some(end)) if end >= start => days_between(start, end) + 1,
        _ => 0,
    }
}

/// Definite and arguable days across all windows.
pub fn sum_excludable_windows(windows: &[ExcludableWindow]) -> ExcludedTotals {
    windows
        .iter()
        .fold(ExcludedTotals::default(), |mut totals, window| {
            let days = window_days(window);
            if window.arguable {
                totals.arguable += days;
            } else {
                totals.definite += days;
            }
            totals
        })
}

/// Days that count under `mode`.
pub fn combine_excluded_totals(totals: ExcludedTotals, mode: ExclusionMode) -> i64 {
    match mode {
        ExclusionMode::DefOnly => totals.definite,
        ExclusionMode::DefPlusArg => totals.definite + totals.arguable,
    }
}

/// Counted days, falling back to the pre-split scalar when both category
/// totals are zero.
pub fn resolve_excluded_days(
    totals: ExcludedTotals,
    legacy_excluded_days: Option<i64>,
    mode: ExclusionMode,
) -> i64 {
    if totals.is_empty() {
        legacy_excluded_days.unwrap_or(0).max(0)
    } else {
        combine_excluded_totals(totals, mode)
    }
}

/// Audit line explaining where the counted figure came from.
pub fn excluded_detail(totals: ExcludedTotals, source: ExclusionSource, mode: ExclusionMode) -> String {
    if source == ExclusionSource::Legacy || totals.is_empty() {
        return format!("{} (simple total)", totals.total());
    }
    match mode {
        ExclusionMode::DefOnly => format!(
            "{} definitely excludable; {} arguably excludable (not counted)",
            totals.definite, totals.arguable
        ),
        ExclusionMode::DefPlusArg => format!(
            "{} definitely + {} arguably excludable (both counted)",
            totals.definite, totals.arguable
        ),
    }
}
