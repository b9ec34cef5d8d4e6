//! Caseload views: normalisation of stored records, per-case clock
//! summaries, list filtering and busy court days.

pub mod busy;
pub mod filter;
pub mod normalize;
pub mod summary;

use chrono::NaiveDate;
use shared_types::{CaseListFilter, CaseloadViewResponse, ExclusionMode, StoredCaseRecord, TrackerSettings};

use crate::compliance::holidays::HolidayCalendar;
use normalize::{normalize_caseload, DateParsing};

/// Normalise, filter, sort and summarise a stored caseload.
pub fn build_caseload_view<C: HolidayCalendar + ?Sized>(
    records: Vec<StoredCaseRecord>,
    filter: &CaseListFilter,
    mode: ExclusionMode,
    parsing: DateParsing,
    settings: &TrackerSettings,
    calendar: &C,
    today: NaiveDate,
) -> CaseloadViewResponse {
    let normalized = normalize_caseload(records, parsing);

    let busy_days = busy::busy_days(filter::base_filter(&normalized.cases, filter), settings, today);
    let cases: Vec<_> = filter::apply_filter(&normalized.cases, filter, settings, today)
        .into_iter()
        .map(|case| summary::summarize_case_with(case, mode, settings, calendar, today))
        .collect();

    CaseloadViewResponse {
        total_cases: normalized.cases.len(),
        shown: cases.len(),
        cases,
        busy_days,
        skipped: normalized.skipped,
    }
}
