//! Speedy-trial clock state for a case.
//!
//! `Running` counts against the reference date. Stopping the clock takes a
//! snapshot of the elapsed days at that moment; restarting discards it. A
//! filed certificate of readiness ends counting at the certificate date and
//! wins over a stopped clock.

use chrono::NaiveDate;
use shared_types::{CaseRecord, ClockState};

use super::calendar::elapsed_days;

pub fn clock_state(case: &CaseRecord) -> ClockState {
    if case.coc_filed {
        if let (Some(start), Some(coc_date)) = (case.start_date, case.coc_date) {
            return ClockState::Ready {
                coc_date,
                total_days: elapsed_days(start, coc_date),
            };
        }
    }
    match (case.clock_stopped, case.frozen_total_days) {
        (true, Some(total_days)) => ClockState::Frozen { total_days },
        _ => ClockState::Running,
    }
}

/// Elapsed calendar days as of `today`, honouring readiness and freezes.
/// `None` while the case has no start date and is not frozen.
pub fn total_elapsed_days(case: &CaseRecord, today: NaiveDate) -> Option<i64> {
    match clock_state(case) {
        ClockState::Ready { total_days, .. } | ClockState::Frozen { total_days } => Some(total_days),
        ClockState::Running => case.start_date.map(|start| elapsed_days(start, today)),
    }
}

/// Stop the clock, capturing the elapsed count as of `today`. Stopping a
/// stopped clock keeps the original snapshot.
pub fn freeze_clock(case: &mut CaseRecord, today: NaiveDate) {
    if case.clock_stopped && case.frozen_total_days.is_some() {
        return;
    }
    case.clock_stopped = true;
    case.frozen_total_days = case.start_date.map(|start| elapsed_days(start, today));
    tracing::debug!(
        case_id = %case.id,
        frozen_total_days = ?case.frozen_total_days,
        "speedy-trial clock stopped"
    );
}

pub fn unfreeze_clock(case: &mut CaseRecord) {
    if case.clock_stopped {
        tracing::debug!(case_id = %case.id, "speedy-trial clock restarted");
    }
    case.clock_stopped = false;
    case.frozen_total_days = None;
}

/// Apply the "clock stopped" checkbox from a record edit. Only a change of
/// state touches the snapshot.
pub fn set_clock_stopped(case: &mut CaseRecord, stopped: bool, today: NaiveDate) {
    match (case.clock_stopped, stopped) {
        (false, true) => freeze_clock(case, today),
        (true, false) => unfreeze_clock(case),
        _ => {}
    }
}
