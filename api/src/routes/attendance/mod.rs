//! Attendance routes: beacon check-ins and attendance history.
//!
//! - `OPTIONS /attendance` → empty `200` from the CORS layer
//! - `POST /attendance` → store a check-in
//! - `GET /attendance` → filtered history, newest first
//! - anything else → `405`
//!
//! Panics inside these handlers are turned into the generic server error body.

use axum::{Router, http::Method, routing::get};
use tower_http::catch_panic::CatchPanicLayer;

use crate::routes::common::cors_for;
use crate::state::AppState;

mod common;
mod get;
mod post;

pub use common::{error_response, method_not_allowed, server_error};
pub use get::{AttendanceQuery, list_attendance};
pub use post::record_attendance;

pub fn attendance_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_attendance)
                .post(record_attendance)
                .fallback(method_not_allowed),
        )
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(common::server_error_from_panic))
        .layer(cors_for([Method::GET, Method::POST, Method::OPTIONS]))
}
