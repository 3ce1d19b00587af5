//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/attendance` → Beacon check-ins and attendance history
//! - `/students` → Fixed student roster
//!
//! Each group carries its own CORS policy, so the allowed methods advertised
//! to browsers match what the group actually serves.

use crate::routes::{
    attendance::attendance_routes, health::health_routes, students::students_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod attendance;
pub mod common;
pub mod health;
pub mod students;

/// Builds the router for every HTTP endpoint under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/attendance", attendance_routes(app_state))
        .nest("/students", students_routes())
}
