//! Roster routes.
//!
//! - `OPTIONS /students` → empty `200` from the CORS layer
//! - `GET /students` → the fixed roster
//! - anything else → `405 { "error": "Method not allowed" }`

use axum::{Router, http::Method, routing::get};

use crate::routes::common::cors_for;

mod get;

pub use get::{list_students, method_not_allowed};

pub fn students_routes() -> Router {
    Router::new()
        .route("/", get(list_students).fallback(method_not_allowed))
        .layer(cors_for([Method::GET, Method::OPTIONS]))
}
