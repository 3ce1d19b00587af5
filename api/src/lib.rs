//! HTTP surface of the beacon attendance service.
//!
//! `app` assembles the full router: every route group under `/api`, wrapped in
//! the request-logging middleware.

use axum::{Router, middleware::from_fn};

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use crate::{middleware::log_request, routes::routes, state::AppState};

/// Builds the application router served by the binary.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
}
