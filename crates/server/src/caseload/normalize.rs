//! Turns stored case records into typed `CaseRecord`s.
//!
//! This is the one place that copes with the storage layer's loose shapes:
//! string counters, blank dates, the pre-split `excludedDays` scalar and the
//! old `done` flag on to-dos.

use chrono::NaiveDate;
use shared_types::{
    CaseCharge, CaseRecord, CaseTodo, ChargeLevel, ExcludableWindow, ExcludedTotals,
    ExclusionSource, LooseNumber, SkippedRecord, StoredCaseRecord, StoredCharge, StoredTodo,
    StoredWindow,
};
use uuid::Uuid;

use crate::compliance::calendar::parse_optional_date;
use crate::compliance::exclusions::sum_excludable_windows;
use crate::compliance::CalendarError;

/// What to do with a date field that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateParsing {
    /// Fail the whole record.
    Strict,
    /// Log it and treat the field as not entered.
    #[default]
    Lenient,
}

/// Good records plus the ones that could not be read.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCaseload {
    pub cases: Vec<CaseRecord>,
    pub skipped: Vec<SkippedRecord>,
}

struct DateReader<'a> {
    case_id: &'a str,
    parsing: DateParsing,
}

impl DateReader<'_> {
    fn read(&self, field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, CalendarError> {
        match parse_optional_date(value) {
            Ok(date) => Ok(date),
            Err(err) if self.parsing == DateParsing::Lenient => {
                tracing::warn!(
                    case_id = %self.case_id,
                    field,
                    error = %err,
                    "unparseable date treated as missing"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn level(value: Option<&str>) -> Option<ChargeLevel> {
    value.and_then(ChargeLevel::from_str_opt)
}

fn days(value: Option<&LooseNumber>) -> i64 {
    value.and_then(LooseNumber::as_days).unwrap_or(0).max(0)
}

/// Strict normalisation: a malformed date fails the record.
pub fn normalize_case(stored: StoredCaseRecord) -> Result<CaseRecord, CalendarError> {
    normalize_case_with(stored, DateParsing::Strict)
}

pub fn normalize_case_with(
    stored: StoredCaseRecord,
    parsing: DateParsing,
) -> Result<CaseRecord, CalendarError> {
    let id = stored
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("case-{}", Uuid::new_v4()));
    let dates = DateReader { case_id: &id, parsing };

    let start_date = dates.read("startDate", stored.start_date.as_deref())?;
    let coc_date = dates.read("cocDate", stored.coc_date.as_deref())?;
    let next_court_date = dates.read("nextCourtDate", stored.next_court_date.as_deref())?;

    let ex_windows = stored
        .ex_windows
        .unwrap_or_default()
        .into_iter()
        .map(|w| read_window(w, &dates))
        .collect::<Result<Vec<_>, _>>()?;
    let todos = stored
        .todos
        .unwrap_or_default()
        .into_iter()
        .map(|t| read_todo(t, &dates))
        .collect::<Result<Vec<_>, _>>()?;
    let charges: Vec<CaseCharge> = stored
        .charges
        .unwrap_or_default()
        .into_iter()
        .map(read_charge)
        .collect();

    let charge_level = level(stored.charge_level.as_deref()).or_else(|| {
        charges
            .iter()
            .find(|c| c.is_primary)
            .and_then(|c| c.class)
    });

    let (excluded, exclusion_source) = migrate_exclusions(
        &ex_windows,
        days(stored.definitely_excluded_days.as_ref()),
        days(stored.arguably_excluded_days.as_ref()),
        days(stored.excluded_days.as_ref()),
    );

    let clock_stopped = stored.clock_stopped.unwrap_or(false);
    let frozen_total_days = stored
        .frozen_total_days
        .as_ref()
        .and_then(LooseNumber::as_days)
        .filter(|_| clock_stopped);

    Ok(CaseRecord {
        id,
        client_name: text(stored.client_name),
        docket_number: text(stored.docket_number),
        charge_level,
        start_date,
        ex_windows,
        excluded,
        exclusion_source,
        clock_stopped,
        frozen_total_days,
        coc_filed: stored.coc_filed.unwrap_or(false),
        coc_date,
        closed: stored.closed.unwrap_or(false),
        warrant: stored.warrant.unwrap_or(false),
        next_court_date,
        next_court_appearance_type: text(stored.next_court_appearance_type),
        court_part: text(stored.court_part),
        assigned_ada: text(stored.assigned_ada),
        client_phone: text(stored.client_phone),
        client_email: text(stored.client_email),
        notes: text(stored.notes),
        charges,
        todos,
    })
}

/// Dated windows win; then hand-entered category totals; then the legacy
/// scalar, which is migrated into the definite bucket.
fn migrate_exclusions(
    windows: &[ExcludableWindow],
    definite: i64,
    arguable: i64,
    legacy: i64,
) -> (ExcludedTotals, ExclusionSource) {
    let from_windows = sum_excludable_windows(windows);
    if !from_windows.is_empty() {
        return (from_windows, ExclusionSource::Windows);
    }
    let manual = ExcludedTotals { definite, arguable };
    if !manual.is_empty() {
        return (manual, ExclusionSource::Manual);
    }
    if legacy > 0 {
        return (
            ExcludedTotals { definite: legacy, arguable: 0 },
            ExclusionSource::Legacy,
        );
    }
    (ExcludedTotals::default(), ExclusionSource::None)
}

fn read_window(w: StoredWindow, dates: &DateReader<'_>) -> Result<ExcludableWindow, CalendarError> {
    Ok(ExcludableWindow {
        start: dates.read("exWindows.start", w.start.as_deref())?,
        end: dates.read("exWindows.end", w.end.as_deref())?,
        reason: text(w.reason),
        arguable: w.arguable.unwrap_or(false),
    })
}

fn read_todo(t: StoredTodo, dates: &DateReader<'_>) -> Result<CaseTodo, CalendarError> {
    Ok(CaseTodo {
        description: text(t.description),
        deadline: dates.read("todos.deadline", t.deadline.as_deref())?,
        completed: t.completed.unwrap_or(false) || t.done.unwrap_or(false),
    })
}

fn read_charge(c: StoredCharge) -> CaseCharge {
    CaseCharge {
        class: level(c.class.as_deref()),
        name: text(c.name),
        statute: text(c.statute),
        is_primary: c.is_primary_charge.unwrap_or(false),
    }
}

/// Normalise a whole caseload. Under `Strict`, records with a malformed
/// date are dropped and reported in `skipped`.
pub fn normalize_caseload(records: Vec<StoredCaseRecord>, parsing: DateParsing) -> NormalizedCaseload {
    let mut out = NormalizedCaseload::default();
    for stored in records {
        let id = stored.id.clone();
        match normalize_case_with(stored, parsing) {
            Ok(case) => out.cases.push(case),
            Err(err) => {
                tracing::warn!(case_id = ?id, error = %err, "skipping case record");
                out.skipped.push(SkippedRecord {
                    id,
                    reason: err.to_string(),
                });
            }
        }
    }
    out
}
