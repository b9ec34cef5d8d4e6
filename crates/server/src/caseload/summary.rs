use chrono::NaiveDate;
use shared_types::{CaseClockSummary, CaseRecord, CaseTodo, ClockState, ExclusionMode, TrackerSettings};

use crate::compliance::calendar::{days_between, format_date_with_weekday};
use crate::compliance::clock::{clock_state, total_elapsed_days};
use crate::compliance::deadline_engine::{
    court_date_proximity, days_until_deadline, deadline_for_with_calendar, deadline_urgency,
    elapsed_chargeable_days, format_days_from_court_date, format_days_until_deadline,
};
use crate::compliance::exclusions::{excluded_detail, resolve_excluded_days};
use crate::compliance::holidays::{HolidayCalendar, NyCourtCalendar};
use crate::compliance::validation::{validate_date_range, validate_excluded_days, validate_window};

pub fn summarize_case(
    case: &CaseRecord,
    mode: ExclusionMode,
    settings: &TrackerSettings,
    today: NaiveDate,
) -> CaseClockSummary {
    summarize_case_with(case, mode, settings, &NyCourtCalendar::new(), today)
}

/// Everything a case row shows, computed as of `today`.
pub fn summarize_case_with<C: HolidayCalendar + ?Sized>(
    case: &CaseRecord,
    mode: ExclusionMode,
    settings: &TrackerSettings,
    calendar: &C,
    today: NaiveDate,
) -> CaseClockSummary {
    let clock = clock_state(case);
    let total_days = total_elapsed_days(case, today);
    let excluded_days = resolve_excluded_days(case.excluded, None, mode);

    let snapshot = match clock {
        ClockState::Ready { total_days, .. } | ClockState::Frozen { total_days } => Some(total_days),
        ClockState::Running => None,
    };
    let chargeable_days = match (case.start_date, snapshot) {
        (Some(start), _) => elapsed_chargeable_days(start, excluded_days, snapshot, today),
        (None, Some(total)) => (total - excluded_days).max(0),
        (None, None) => 0,
    };

    let deadline = deadline_for_with_calendar(case.charge_level, case.start_date, excluded_days, calendar);
    let days_until = deadline
        .as_ref()
        .map(|d| days_until_deadline(d.deadline_date, today));

    let court_date_text = match (&deadline, case.next_court_date) {
        (Some(d), Some(ncd)) if !case.coc_filed => {
            format_days_from_court_date(days_until_deadline(d.deadline_date, ncd))
        }
        _ => String::new(),
    };

    CaseClockSummary {
        case_id: case.id.clone(),
        client_name: case.client_name.clone(),
        docket_number: case.docket_number.clone(),
        charge_level: case.charge_level,
        charge_label: case
            .charge_level
            .map(|l| l.label())
            .unwrap_or("Unknown")
            .to_string(),
        clock,
        total_days,
        excluded_days,
        excluded_detail: excluded_detail(case.excluded, case.exclusion_source, mode),
        chargeable_days,
        cap_days: deadline.as_ref().map(|d| d.cap_days).unwrap_or(0),
        deadline_label: deadline
            .as_ref()
            .map(|d| format_date_with_weekday(d.deadline_date))
            .unwrap_or_default(),
        deadline_text: days_until.map(format_days_until_deadline).unwrap_or_default(),
        urgency: days_until.map(|d| deadline_urgency(d, settings.deadline_warning_days)),
        days_until_deadline: days_until,
        deadline,
        next_court_date: case.next_court_date,
        court_date_proximity: case
            .next_court_date
            .map(|ncd| court_date_proximity(days_between(today, ncd), settings.court_date_warning_days)),
        court_date_text,
        outstanding_todos: case.outstanding_todos().count(),
        next_todo: next_todo(case).cloned(),
        warnings: warnings(case, total_days, excluded_days, today),
    }
}

fn warnings(case: &CaseRecord, total_days: Option<i64>, excluded: i64, today: NaiveDate) -> Vec<String> {
    let mut checks = vec![validate_date_range(case.start_date, case.coc_date, "Readiness", today)];
    if let Some(total) = total_days {
        checks.push(validate_excluded_days(excluded, total));
    }
    checks.extend(case.ex_windows.iter().map(|w| validate_window(w, today)));
    checks
        .iter()
        .filter_map(|v| v.message().map(str::to_string))
        .collect()
}

/// Outstanding to-do with the soonest deadline; failing that, the first
/// outstanding one.
fn next_todo(case: &CaseRecord) -> Option<&CaseTodo> {
    case.outstanding_todos()
        .filter(|t| t.deadline.is_some())
        .min_by_key(|t| t.deadline)
        .or_else(|| case.outstanding_todos().next())
}
