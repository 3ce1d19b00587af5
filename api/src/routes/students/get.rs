use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::student::StudentService;

use crate::response::ErrorResponse;

/// GET /students
///
/// Returns every registered student, in declaration order.
///
/// ### Response
/// - `200 OK`
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Mathumitha R",
///     "rollNumber": "310622205081",
///     "department": "IT-B",
///     "year": 4,
///     "beaconMac": "0E:A5:25:A0:00:16"
///   }
/// ]
/// ```
pub async fn list_students() -> Response {
    (StatusCode::OK, Json(StudentService::list())).into_response()
}

/// Any method other than GET or OPTIONS.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::bare("Method not allowed")),
    )
        .into_response()
}
