//! Liveness probe for deployments.
//!
//! Answers from constants only. It never reaches the attendance store, so a
//! wedged or failing store does not take the probe down with it.

use axum::{Json, Router, routing::get};

use crate::response::ApiResponse;

const STATUS: &str = "OK";
const MESSAGE: &str = "Health check passed";

pub fn health_routes() -> Router {
    Router::new().route("/", get(liveness))
}

/// GET /health
///
/// `200 OK` with `{ "success": true, "data": "OK", "message": "Health check passed" }`
async fn liveness() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success(STATUS, MESSAGE))
}
