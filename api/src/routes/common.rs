//! Pieces shared by the route groups.

use axum::http::{HeaderName, Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

/// Permissive-origin CORS policy restricted to `methods`, allowing only the
/// `Content-Type` request header.
///
/// The layer answers every `OPTIONS` request itself with an empty `200`, so
/// routes behind it never register an `OPTIONS` handler.
pub fn cors_for(methods: impl Into<Vec<Method>>) -> CorsLayer {
    let allowed_headers: [HeaderName; 1] = [CONTENT_TYPE];
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods.into())
        .allow_headers(allowed_headers)
}
