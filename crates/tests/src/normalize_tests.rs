use pretty_assertions::assert_eq;
use server::caseload::normalize::*;
use shared_types::{ChargeLevel, ExcludedTotals, ExclusionSource, StoredCaseRecord};

use crate::common::date;

fn stored(json: &str) -> StoredCaseRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn legacy_scalar_migrates_to_definite() {
    let case = normalize_case(stored(
        r#"{"id": "c1", "chargeLevel": "classB", "startDate": "2024-03-01", "excludedDays": 10}"#,
    ))
    .unwrap();
    assert_eq!(case.excluded, ExcludedTotals { definite: 10, arguable: 0 });
    assert_eq!(case.exclusion_source, ExclusionSource::Legacy);
    assert_eq!(case.charge_level, Some(ChargeLevel::ClassB));
    assert_eq!(case.start_date, Some(date(2024, 3, 1)));
}

#[test]
fn string_counters_are_read_as_numbers() {
    let case = normalize_case(stored(
        r#"{"id": "c2", "definitelyExcludedDays": "4", "arguablyExcludedDays": "3", "excludedDays": "99"}"#,
    ))
    .unwrap();
    assert_eq!(case.excluded, ExcludedTotals { definite: 4, arguable: 3 });
    assert_eq!(case.exclusion_source, ExclusionSource::Manual);
}

#[test]
fn dated_windows_override_manual_totals() {
    let case = normalize_case(stored(
        r#"{
            "id": "c3",
            "definitelyExcludedDays": 50,
            "exWindows": [
                {"start": "2025-02-01", "end": "2025-02-10", "reason": "adjourned", "arguable": false},
                {"start": "2025-03-03", "end": "2025-03-06", "reason": "motion", "arguable": true}
            ]
        }"#,
    ))
    .unwrap();
    assert_eq!(case.excluded, ExcludedTotals { definite: 10, arguable: 4 });
    assert_eq!(case.exclusion_source, ExclusionSource::Windows);
    assert_eq!(case.ex_windows.len(), 2);
}

#[test]
fn blank_windows_fall_back_to_manual_totals() {
    let case = normalize_case(stored(
        r#"{
            "id": "c4",
            "definitelyExcludedDays": 6,
            "exWindows": [{"start": "", "end": "", "reason": "pending"}]
        }"#,
    ))
    .unwrap();
    assert_eq!(case.excluded.definite, 6);
    assert_eq!(case.exclusion_source, ExclusionSource::Manual);
    assert_eq!(case.ex_windows[0].start, None);
}

#[test]
fn charge_level_falls_back_to_primary_charge() {
    let case = normalize_case(stored(
        r#"{
            "id": "c5",
            "charges": [
                {"name": "Petit larceny", "class": "classA", "isPrimaryCharge": false},
                {"name": "Assault 2", "statute": "PL 120.05", "class": "felony", "isPrimaryCharge": true}
            ]
        }"#,
    ))
    .unwrap();
    assert_eq!(case.charge_level, Some(ChargeLevel::Felony));
    assert_eq!(case.charges[1].statute, "PL 120.05");
}

#[test]
fn explicit_charge_level_wins_over_charges() {
    let case = normalize_case(stored(
        r#"{"id": "c6", "chargeLevel": "violation",
            "charges": [{"class": "felony", "isPrimaryCharge": true}]}"#,
    ))
    .unwrap();
    assert_eq!(case.charge_level, Some(ChargeLevel::Violation));
}

#[test]
fn done_flag_marks_todo_completed() {
    let case = normalize_case(stored(
        r#"{"id": "c7", "todos": [
            {"description": "old style", "done": true},
            {"description": "new style", "completed": true},
            {"description": "open", "deadline": "2025-04-01"}
        ]}"#,
    ))
    .unwrap();
    let completed: Vec<bool> = case.todos.iter().map(|t| t.completed).collect();
    assert_eq!(completed, vec![true, true, false]);
    assert_eq!(case.todos[2].deadline, Some(date(2025, 4, 1)));
}

#[test]
fn snapshot_dropped_when_clock_running() {
    let running = normalize_case(stored(r#"{"id": "c8", "frozenTotalDays": 30}"#)).unwrap();
    assert_eq!(running.frozen_total_days, None);

    let stopped = normalize_case(stored(
        r#"{"id": "c9", "clockStopped": true, "frozenTotalDays": "30"}"#,
    ))
    .unwrap();
    assert!(stopped.clock_stopped);
    assert_eq!(stopped.frozen_total_days, Some(30));
}

#[test]
fn text_fields_are_trimmed() {
    let case = normalize_case(stored(
        r#"{"id": " c10 ", "clientName": "  Jane Doe ", "courtPart": "AP2 "}"#,
    ))
    .unwrap();
    assert_eq!(case.id, "c10");
    assert_eq!(case.client_name, "Jane Doe");
    assert_eq!(case.court_part, "AP2");
}

#[test]
fn strict_parsing_rejects_bad_dates() {
    let err = normalize_case(stored(r#"{"id": "c11", "startDate": "2024-02-30"}"#)).unwrap_err();
    assert!(err.to_string().contains("2024-02-30"));
}

#[test]
fn lenient_parsing_blanks_bad_dates() {
    let case = normalize_case_with(
        stored(r#"{"id": "c12", "startDate": "03/01/2024", "nextCourtDate": "2025-06-02"}"#),
        DateParsing::Lenient,
    )
    .unwrap();
    assert_eq!(case.start_date, None);
    assert_eq!(case.next_court_date, Some(date(2025, 6, 2)));
}

#[test]
fn caseload_reports_skipped_records() {
    let records = vec![
        stored(r#"{"id": "good", "startDate": "2025-01-06"}"#),
        stored(r#"{"id": "bad", "cocDate": "soon"}"#),
    ];

    let strict = normalize_caseload(records.clone(), DateParsing::Strict);
    assert_eq!(strict.cases.len(), 1);
    assert_eq!(strict.skipped.len(), 1);
    assert_eq!(strict.skipped[0].id.as_deref(), Some("bad"));

    let lenient = normalize_caseload(records, DateParsing::Lenient);
    assert_eq!(lenient.cases.len(), 2);
    assert!(lenient.skipped.is_empty());
}
