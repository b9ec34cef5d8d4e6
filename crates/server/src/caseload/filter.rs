use std::cmp::Ordering;

use chrono::NaiveDate;
use shared_types::{CaseListFilter, CaseRecord, SortMode, TrackerSettings, ViewMode};

use super::busy::court_day_loads;

fn matches_search(case: &CaseRecord, needle: &str) -> bool {
    [
        &case.client_name,
        &case.docket_number,
        &case.notes,
        &case.assigned_ada,
        &case.client_phone,
        &case.client_email,
        &case.next_court_appearance_type,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Ready/closed/warrant flags and the search box. The busy-day summary is
/// computed over this set, before any view mode narrows it.
pub fn base_filter<'a>(cases: &'a [CaseRecord], filter: &CaseListFilter) -> Vec<&'a CaseRecord> {
    let needle = filter.search.trim().to_lowercase();
    cases
        .iter()
        .filter(|c| !filter.ready_only || c.coc_filed)
        .filter(|c| filter.show_closed || !c.closed)
        .filter(|c| filter.show_warrant || !c.warrant)
        .filter(|c| needle.is_empty() || matches_search(c, &needle))
        .collect()
}

fn compare_by_client(a: &CaseRecord, b: &CaseRecord) -> Ordering {
    a.client_name
        .to_lowercase()
        .cmp(&b.client_name.to_lowercase())
}

/// `None` sorts after every date.
fn compare_dates_missing_last(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by_todo_deadline_then_client(a: &CaseRecord, b: &CaseRecord) -> Ordering {
    compare_dates_missing_last(a.soonest_todo_deadline(), b.soonest_todo_deadline())
        .then_with(|| compare_by_client(a, b))
}

/// Filter, narrow to the selected view and sort.
pub fn apply_filter<'a>(
    cases: &'a [CaseRecord],
    filter: &CaseListFilter,
    settings: &TrackerSettings,
    today: NaiveDate,
) -> Vec<&'a CaseRecord> {
    let mut shown = base_filter(cases, filter);

    match filter.view {
        ViewMode::All => {}
        ViewMode::Today => shown.retain(|c| c.next_court_date == Some(today)),
        ViewMode::Busy => {
            let loads = court_day_loads(shown.iter().copied());
            let busy: Vec<NaiveDate> = loads
                .iter()
                .filter(|(_, load)| load.is_busy(settings))
                .map(|(date, _)| *date)
                .collect();
            shown.retain(|c| c.next_court_date.is_some_and(|d| busy.contains(&d)));
        }
        ViewMode::Todos => shown.retain(|c| c.has_outstanding_todos()),
    }

    match (filter.view, filter.sort) {
        (ViewMode::Todos, _) => shown.sort_by(|a, b| compare_by_todo_deadline_then_client(a, b)),
        (_, SortMode::NextCourtDate) => {
            shown.sort_by(|a, b| compare_dates_missing_last(a.next_court_date, b.next_court_date))
        }
        (_, SortMode::Client) => shown.sort_by(|a, b| compare_by_client(a, b)),
    }

    shown
}
