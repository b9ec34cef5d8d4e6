use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{post_json, test_app};

// ── Deadline ──────────────────────────────────────────────────────

#[tokio::test]
async fn deadline_with_exclusions() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "classB", "start_date": "2024-03-01", "excluded_days": 10, "reference_date": "2024-05-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["charge_level"], "classB");
    assert_eq!(body["cap_days"], 60);
    assert_eq!(body["excluded_days"], 10);
    assert_eq!(body["deadline_date"], "2024-05-10");
    assert_eq!(body["deadline_label"], "Friday, 05/10/2024");
    assert_eq!(body["was_adjusted"], false);
    assert_eq!(body["days_until_deadline"], 9);
    assert_eq!(body["status_text"], "9 days until 30.30 deadline");
}

#[tokio::test]
async fn deadline_moved_off_memorial_day() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "classB", "start_date": "2025-03-27", "reference_date": "2025-05-28"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raw_deadline_date"], "2025-05-26");
    assert_eq!(body["deadline_date"], "2025-05-27");
    assert_eq!(body["was_adjusted"], true);
    assert_eq!(body["adjustment_reason"], "Adjusted for Memorial Day");
    assert_eq!(body["status_text"], "1 day past 30.30 deadline");
}

#[tokio::test]
async fn missing_start_date_returns_empty_fields() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "felony"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["charge_level"], "felony");
    assert_eq!(body["deadline_date"], "");
    assert_eq!(body["days_until_deadline"], serde_json::Value::Null);
}

#[tokio::test]
async fn unknown_charge_level_returns_empty_fields() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "misdemeanor", "start_date": "2025-01-06"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["charge_level"], serde_json::Value::Null);
    assert_eq!(body["cap_days"], 0);
    assert_eq!(body["deadline_date"], "");
}

#[tokio::test]
async fn malformed_start_date_is_bad_request() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "classA", "start_date": "03/01/2024"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
    assert!(body["field_errors"]["start_date"].is_string());
}

#[tokio::test]
async fn negative_excluded_days_is_validation_error() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/deadline",
        r#"{"charge_level": "classA", "start_date": "2025-01-06", "excluded_days": -3}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert_eq!(
        body["field_errors"]["excluded_days"],
        "Excluded days must be a positive number"
    );
}

// ── Exclusions ────────────────────────────────────────────────────

#[tokio::test]
async fn exclusion_summary_in_both_modes() {
    let app = test_app();
    let windows = json!([
        {"start": "2025-02-01", "end": "2025-02-10", "reason": "adjourned", "arguable": false},
        {"start": "2025-03-03", "end": "2025-03-06", "reason": "motion", "arguable": true},
        {"reason": "not yet dated"}
    ]);

    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/exclusions",
        &json!({"windows": windows, "mode": "defOnly"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["definite"], 10);
    assert_eq!(body["arguable"], 4);
    assert_eq!(body["counted"], 10);
    assert_eq!(body["window_days"], json!([10, 4, 0]));
    assert_eq!(
        body["detail"],
        "10 definitely excludable; 4 arguably excludable (not counted)"
    );

    let (_, body) = post_json(
        &app,
        "/api/speedy-trial/exclusions",
        &json!({"windows": windows}).to_string(),
    )
    .await;
    assert_eq!(body["mode"], "defPlusArg");
    assert_eq!(body["counted"], 14);
}

#[tokio::test]
async fn exclusion_summary_falls_back_to_legacy_total() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/exclusions",
        r#"{"windows": [], "legacy_excluded_days": 7}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counted"], 7);
    assert_eq!(body["detail"], "7 (simple total)");
}

// ── Clock ─────────────────────────────────────────────────────────

#[tokio::test]
async fn evaluate_running_case() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/clock",
        r#"{
            "case": {"id": "c1", "clientName": "Doe", "chargeLevel": "violation",
                     "startDate": "2025-03-03", "definitelyExcludedDays": 2, "arguablyExcludedDays": 5},
            "mode": "defOnly",
            "reference_date": "2025-03-13"
        }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["case_id"], "c1");
    assert_eq!(body["clock"]["state"], "running");
    assert_eq!(body["total_days"], 10);
    assert_eq!(body["excluded_days"], 2);
    assert_eq!(body["chargeable_days"], 8);
    assert_eq!(body["charge_label"], "Violation");
}

#[tokio::test]
async fn evaluate_rejects_malformed_case_dates() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/speedy-trial/clock",
        r#"{"case": {"id": "c1", "startDate": "2024-02-30"}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn freeze_then_unfreeze() {
    let app = test_app();
    let (status, frozen) = post_json(
        &app,
        "/api/speedy-trial/clock/freeze",
        r#"{"case": {"id": "c1", "startDate": "2025-01-01"}, "reference_date": "2025-02-15"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frozen["clock_stopped"], true);
    assert_eq!(frozen["frozen_total_days"], 45);

    let (status, running) = post_json(
        &app,
        "/api/speedy-trial/clock/unfreeze",
        r#"{"case": {"id": "c1", "startDate": "2025-01-01", "clockStopped": true, "frozenTotalDays": 45}}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(running["clock_stopped"], false);
    assert_eq!(running["frozen_total_days"], serde_json::Value::Null);
}

#[tokio::test]
async fn frozen_case_ignores_later_reference_dates() {
    let app = test_app();
    let (_, body) = post_json(
        &app,
        "/api/speedy-trial/clock",
        r#"{
            "case": {"id": "c1", "startDate": "2025-01-01", "clockStopped": true, "frozenTotalDays": 45},
            "reference_date": "2025-09-01"
        }"#,
    )
    .await;
    assert_eq!(body["clock"]["state"], "frozen");
    assert_eq!(body["total_days"], 45);
    assert_eq!(body["chargeable_days"], 45);
}
