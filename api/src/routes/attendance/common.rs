use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::AppError;
use validator::ValidationErrors;

use crate::response::ErrorResponse;

pub const MISSING_FIELDS: &str = "Missing required fields: studentId, code";
pub const INVALID_BODY: &str = "Invalid request body";
pub const SERVER_ERROR: &str = "Server error";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Flattens validator output into a stable, sorted list of messages.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages
}

/// Maps a service error onto its HTTP response. Server-side causes are logged
/// and never sent to the client.
pub fn error_response(err: AppError) -> Response {
    match err {
        AppError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::failure(MISSING_FIELDS).with_details(validation_messages(&errors))),
        )
            .into_response(),
        AppError::MalformedBody(detail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::failure(INVALID_BODY).with_details(detail)),
        )
            .into_response(),
        AppError::Store(e) => {
            tracing::error!(error = %e, "Attendance store failure");
            server_error()
        }
    }
}

pub fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::failure(SERVER_ERROR)),
    )
        .into_response()
}

pub(super) fn server_error_from_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Attendance handler panicked");
    server_error()
}

/// Any method other than GET, POST or OPTIONS.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::failure(METHOD_NOT_ALLOWED)),
    )
        .into_response()
}
