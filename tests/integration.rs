//! End-to-end tests for the Timecard Engine HTTP API.
//!
//! This test suite covers:
//! - Single-entry and multi-entry daily allocation
//! - Mixed labelling independent of submission order
//! - Per-user and per-day separation, totals
//! - Skip-and-report vs fail-fast batches
//! - Approved-only filtering
//! - Plan-gated access checks
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_allocate(entries: Vec<Value>) -> (StatusCode, Value) {
    post(create_router_for_test(), "/allocate", json!({ "entries": entries })).await
}

fn create_entry(id: &str, user_id: &str, start_time: &str, minutes: i64) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "start_time": start_time,
        "duration_minutes": minutes,
        "status": "approved"
    })
}

fn find_bucket<'a>(result: &'a Value, user_id: &str, date: &str) -> &'a Value {
    result["buckets"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["user_id"] == user_id && b["date"] == date)
        .unwrap_or_else(|| panic!("No bucket for {} on {}", user_id, date))
}

fn find_entry<'a>(result: &'a Value, entry_id: &str) -> &'a Value {
    result["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["entry_id"] == entry_id)
        .unwrap_or_else(|| panic!("No entry {}", entry_id))
}

fn assert_hours(value: &Value, expected: &str) {
    let actual = decimal(value.as_str().unwrap());
    assert_eq!(actual, decimal(expected), "Expected {} hours, got {}", expected, actual);
}

// =============================================================================
// Allocation scenarios
// =============================================================================

#[tokio::test]
async fn test_single_8_hour_entry_is_all_regular() {
    let (status, result) =
        post_allocate(vec![create_entry("te_1", "u1", "2026-01-15T08:00:00+10:00", 480)]).await;

    assert_eq!(status, StatusCode::OK);
    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["regular_hours"], "8.0");
    assert_hours(&bucket["overtime_hours"], "0.0");
    assert_eq!(find_entry(&result, "te_1")["label"], "regular");
}

#[tokio::test]
async fn test_two_5_hour_entries_cross_into_overtime() {
    let (status, result) = post_allocate(vec![
        create_entry("te_1", "u1", "2026-01-15T06:00:00+10:00", 300),
        create_entry("te_2", "u1", "2026-01-15T12:00:00+10:00", 300),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);

    let first = find_entry(&result, "te_1");
    assert_eq!(first["label"], "regular");
    assert_hours(&first["regular_hours"], "5");

    let second = find_entry(&result, "te_2");
    assert_eq!(second["label"], "mixed");
    assert_hours(&second["regular_hours"], "3");
    assert_hours(&second["overtime_hours"], "2");

    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["regular_hours"], "8");
    assert_hours(&bucket["overtime_hours"], "2");
}

#[tokio::test]
async fn test_single_10_hour_entry_splits() {
    let (_, result) =
        post_allocate(vec![create_entry("te_1", "u1", "2026-01-15T06:00:00+10:00", 600)]).await;

    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["regular_hours"], "8");
    assert_hours(&bucket["overtime_hours"], "2");
    assert_eq!(find_entry(&result, "te_1")["label"], "mixed");
}

#[tokio::test]
async fn test_labels_do_not_depend_on_submission_order() {
    let (_, result) = post_allocate(vec![
        create_entry("te_afternoon", "u1", "2026-01-15T13:00:00+10:00", 300),
        create_entry("te_morning", "u1", "2026-01-15T07:00:00+10:00", 300),
    ])
    .await;

    assert_eq!(find_entry(&result, "te_morning")["label"], "regular");
    assert_eq!(find_entry(&result, "te_afternoon")["label"], "mixed");
}

#[tokio::test]
async fn test_entry_after_full_day_is_overtime() {
    let (_, result) = post_allocate(vec![
        create_entry("te_1", "u1", "2026-01-15T06:00:00+10:00", 480),
        create_entry("te_2", "u1", "2026-01-15T15:00:00+10:00", 90),
    ])
    .await;

    let late = find_entry(&result, "te_2");
    assert_eq!(late["label"], "overtime");
    assert_hours(&late["overtime_hours"], "1.5");
}

#[tokio::test]
async fn test_users_and_days_are_separate_buckets() {
    let (_, result) = post_allocate(vec![
        create_entry("te_1", "u1", "2026-01-15T06:00:00+10:00", 360),
        create_entry("te_2", "u2", "2026-01-15T06:00:00+10:00", 360),
        create_entry("te_3", "u1", "2026-01-16T06:00:00+10:00", 360),
    ])
    .await;

    assert_eq!(result["buckets"].as_array().unwrap().len(), 3);
    for bucket in result["buckets"].as_array().unwrap() {
        assert_hours(&bucket["regular_hours"], "6");
        assert_hours(&bucket["overtime_hours"], "0");
    }
}

#[tokio::test]
async fn test_totals_and_user_totals() {
    let (_, result) = post_allocate(vec![
        create_entry("te_1", "u1", "2026-01-15T06:00:00+10:00", 600),
        create_entry("te_2", "u1", "2026-01-16T06:00:00+10:00", 540),
        create_entry("te_3", "u2", "2026-01-15T06:00:00+10:00", 240),
    ])
    .await;

    assert_hours(&result["totals"]["total_regular_hours"], "20");
    assert_hours(&result["totals"]["total_overtime_hours"], "3");
    assert_hours(&result["user_totals"]["u1"]["total_regular_hours"], "16");
    assert_hours(&result["user_totals"]["u1"]["total_overtime_hours"], "3");
    assert_hours(&result["user_totals"]["u2"]["total_regular_hours"], "4");
}

#[tokio::test]
async fn test_empty_batch_has_zero_totals() {
    let (status, result) = post_allocate(vec![]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["buckets"].as_array().unwrap().is_empty());
    assert_hours(&result["totals"]["total_regular_hours"], "0");
    assert_hours(&result["totals"]["total_overtime_hours"], "0");
}

// =============================================================================
// Batch policies and filtering
// =============================================================================

#[tokio::test]
async fn test_invalid_entries_are_skipped_and_reported() {
    let (status, result) = post_allocate(vec![
        create_entry("te_ok", "u1", "2026-01-15T06:00:00+10:00", 300),
        create_entry("te_negative", "u1", "2026-01-15T12:00:00+10:00", -5),
        json!({"id": "te_no_start", "user_id": "u1", "duration_minutes": 60}),
        json!({"id": "te_no_user", "start_time": "2026-01-15T12:00:00+10:00", "duration_minutes": 60}),
        create_entry("te_bad_time", "u1", "not-a-time", 60),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    let skipped: Vec<&str> = result["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["entry_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        skipped,
        vec!["te_negative", "te_no_start", "te_no_user", "te_bad_time"]
    );

    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["regular_hours"], "5");
}

#[tokio::test]
async fn test_fail_fast_policy_rejects_batch() {
    let (status, result) = post(
        create_router_for_test(),
        "/allocate",
        json!({
            "policy": "fail_fast",
            "entries": [
                create_entry("te_ok", "u1", "2026-01-15T06:00:00+10:00", 300),
                create_entry("te_negative", "u1", "2026-01-15T12:00:00+10:00", -5)
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("te_negative"));
}

#[tokio::test]
async fn test_approved_only_drops_pending_entries() {
    let mut pending = create_entry("te_pending", "u1", "2026-01-15T12:00:00+10:00", 300);
    pending["status"] = json!("pending");

    let (_, result) = post(
        create_router_for_test(),
        "/allocate",
        json!({
            "approved_only": true,
            "entries": [
                create_entry("te_ok", "u1", "2026-01-15T06:00:00+10:00", 300),
                pending
            ]
        }),
    )
    .await;

    assert_eq!(result["entries"].as_array().unwrap().len(), 1);
    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["overtime_hours"], "0");
}

#[tokio::test]
async fn test_malformed_durations_are_skipped_per_entry() {
    let (status, result) = post_allocate(vec![
        create_entry("te_good", "u1", "2026-01-15T06:00:00+10:00", 300),
        json!({"id": "te_no_duration", "user_id": "u1", "start_time": "2026-01-15T12:00:00+10:00"}),
        json!({"id": "te_text", "user_id": "u1", "start_time": "2026-01-15T13:00:00+10:00", "duration_minutes": "ninety"}),
        create_entry("te_too_long", "u1", "2026-01-15T14:00:00+10:00", i64::MAX),
        json!({"user_id": "u1", "start_time": "2026-01-15T15:00:00+10:00", "duration_minutes": 60}),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    let skipped: Vec<&str> = result["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["entry_id"].as_str().unwrap())
        .collect();
    assert_eq!(skipped, vec!["te_no_duration", "te_text", "te_too_long", ""]);

    let bucket = find_bucket(&result, "u1", "2026-01-15");
    assert_hours(&bucket["regular_hours"], "5");
    assert_hours(&bucket["overtime_hours"], "0");
}

#[tokio::test]
async fn test_fractional_duration_is_rounded_not_rejected() {
    let (status, result) = post_allocate(vec![
        create_entry("te_good", "u1", "2026-01-15T06:00:00+10:00", 300),
        json!({
            "id": "te_fraction",
            "user_id": "u1",
            "start_time": "2026-01-15T12:00:00+10:00",
            "duration_minutes": 90.5
        }),
    ])
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["skipped"].as_array().unwrap().is_empty());
    assert_eq!(find_bucket(&result, "u1", "2026-01-15")["regular_minutes"], 391);
    assert_eq!(find_entry(&result, "te_fraction")["label"], "regular");
}

#[tokio::test]
async fn test_request_without_entries_returns_validation_error() {
    let (status, result) = post(create_router_for_test(), "/allocate", json!({"policy": "fail_fast"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Plan gating
// =============================================================================

async fn check_access(plan: &str, page_id: &str) -> Value {
    let (status, result) = post(
        create_router_for_test(),
        "/access",
        json!({"plan": plan, "page_id": page_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    result
}

#[tokio::test]
async fn test_starter_denied_reports() {
    let result = check_access("starter", "reports").await;
    assert_eq!(result["allowed"], false);
    assert_eq!(result["upgrade_message"], "Upgrade to Pro to access reports.");
}

#[tokio::test]
async fn test_business_allowed_reports() {
    let result = check_access("business", "reports").await;
    assert_eq!(result["allowed"], true);
    assert_eq!(result["upgrade_message"], "");
}

#[tokio::test]
async fn test_pro_denied_crm() {
    let result = check_access("pro", "crm").await;
    assert_eq!(result["allowed"], false);
    assert_eq!(result["upgrade_message"], "Upgrade to Business to access crm.");
}

#[tokio::test]
async fn test_profile_without_plan_is_starter() {
    let (status, result) = post(
        create_router_for_test(),
        "/access",
        json!({"page_id": "dashboard"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["plan"], "starter");
    assert_eq!(result["allowed"], true);
}
