use crate::helpers::{get, make_test_app, send};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

fn request(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn unsupported_attendance_method_is_rejected_without_mutation() {
    let app = make_test_app();
    let body = Body::from(json!({"studentId": 1, "code": "B1"}).to_string());

    let (status, json) = send(&app, request("PUT", "/api/attendance", body)).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json, json!({"success": false, "error": "Method not allowed"}));

    let (_, records) = send(&app, get("/api/attendance")).await;
    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn unsupported_roster_methods_get_bare_error() {
    let app = make_test_app();

    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let (status, json) = send(&app, request(method, "/api/students", Body::empty())).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(json, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn bare_options_returns_empty_ok() {
    let app = make_test_app();

    for uri in ["/api/attendance", "/api/students"] {
        let response = app
            .clone()
            .oneshot(request("OPTIONS", uri, Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-methods"),
            "{uri}"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}

fn preflight(uri: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .header("Origin", "https://dashboard.example")
        .header("Access-Control-Request-Method", method)
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn attendance_preflight_advertises_post() {
    let app = make_test_app();

    let response = app
        .oneshot(preflight("/api/attendance", "POST"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("GET"));
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));
    let allowed_headers = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert_eq!(allowed_headers, "content-type");
}

#[tokio::test]
async fn roster_preflight_does_not_advertise_post() {
    let app = make_test_app();

    let response = app
        .oneshot(preflight("/api/students", "GET"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"));
    assert!(!methods.contains("POST"));
}

#[tokio::test]
async fn simple_requests_allow_any_origin() {
    let app = make_test_app();

    for uri in ["/api/attendance", "/api/students"] {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .header("Origin", "https://dashboard.example")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
