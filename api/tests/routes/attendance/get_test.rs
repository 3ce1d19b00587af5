use crate::helpers::{
    get, make_test_app, make_test_app_with_store, post_json, send,
    stores::{FailingStore, PanickingStore},
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

async fn seed(app: &crate::helpers::TestApp, bodies: &[Value]) {
    for body in bodies {
        let (status, _) = send(app, post_json("/api/attendance", body)).await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }
}

fn record(student_id: i64, date: &str, time: &str, period: i64, status: &str) -> Value {
    json!({
        "studentId": student_id,
        "code": "B",
        "date": date,
        "time": time,
        "period": period,
        "status": status
    })
}

fn periods(records: &Value) -> Vec<i64> {
    records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["period"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn empty_store_returns_empty_array() {
    let app = make_test_app();
    let (status, json) = send(&app, get("/api/attendance")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn repeated_query_keys_use_the_first_value() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(1, "2025-03-14", "09:00:00", 1, "Present"),
            record(1, "2025-03-15", "09:00:00", 1, "Present"),
        ],
    )
    .await;

    let (status, json) = send(
        &app,
        get("/api/attendance?date=2025-03-15&date=2025-03-14"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2025-03-15");
}

#[tokio::test]
async fn irregularities_returns_only_absences() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(1, "2025-03-14", "09:00:00", 1, "Present"),
            record(1, "2025-03-14", "10:00:00", 2, "Absent"),
            record(2, "2025-03-14", "09:00:00", 1, "Late"),
            record(2, "2025-03-14", "10:00:00", 2, "Absent"),
        ],
    )
    .await;

    let (status, json) = send(&app, get("/api/attendance?irregularities=true")).await;

    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["status"] == "Absent"));
}

#[tokio::test]
async fn irregularities_other_than_true_does_not_filter() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(1, "2025-03-14", "09:00:00", 1, "Present"),
            record(1, "2025-03-14", "10:00:00", 2, "Absent"),
        ],
    )
    .await;

    let (_, json) = send(&app, get("/api/attendance?irregularities=false")).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn student_id_filter_matches_integer_ids() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(1, "2025-03-14", "09:00:00", 1, "Present"),
            record(2, "2025-03-14", "09:00:00", 1, "Present"),
            record(2, "2025-03-14", "10:00:00", 2, "Present"),
            record(12, "2025-03-14", "10:00:00", 2, "Present"),
        ],
    )
    .await;

    let (_, json) = send(&app, get("/api/attendance?studentId=2")).await;

    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["studentId"] == 2));

    let (_, json) = send(&app, get("/api/attendance?studentId=abc")).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn filters_combine() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(2, "2025-03-14", "09:00:00", 1, "Absent"),
            record(2, "2025-03-15", "09:00:00", 1, "Absent"),
            record(1, "2025-03-14", "09:00:00", 1, "Absent"),
            record(2, "2025-03-14", "10:00:00", 2, "Present"),
        ],
    )
    .await;

    let (_, json) = send(
        &app,
        get("/api/attendance?date=2025-03-14&studentId=2&irregularities=true"),
    )
    .await;

    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2025-03-14");
    assert_eq!(records[0]["period"], 1);
}

#[tokio::test]
async fn sorted_newest_first_by_date_and_time() {
    let app = make_test_app();
    seed(
        &app,
        &[
            record(1, "2025-03-14", "09:00:00", 1, "Present"),
            record(1, "2025-03-15", "08:00:00", 2, "Present"),
            record(1, "someday", "08:00:00", 3, "Present"),
            record(1, "2025-03-14", "14:30:00", 4, "Present"),
        ],
    )
    .await;

    let (_, json) = send(&app, get("/api/attendance")).await;

    assert_eq!(periods(&json), vec![2, 4, 1, 3]);
}

#[tokio::test]
async fn store_failure_returns_generic_server_error() {
    let app = make_test_app_with_store(Arc::new(FailingStore));

    let (status, json) = send(&app, get("/api/attendance")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"success": false, "error": "Server error"}));

    let (status, json) = send(
        &app,
        post_json("/api/attendance", &json!({"studentId": 1, "code": "B1"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"success": false, "error": "Server error"}));
}

#[tokio::test]
async fn handler_panic_returns_generic_server_error() {
    let app = make_test_app_with_store(Arc::new(PanickingStore));

    let (status, json) = send(&app, get("/api/attendance")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"success": false, "error": "Server error"}));
}
