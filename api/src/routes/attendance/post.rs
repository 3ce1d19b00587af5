use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use services::attendance_record::AttendanceSubmission;

use super::common::error_response;
use crate::response::RecordAck;
use crate::state::AppState;

/// POST /attendance
///
/// Stores a check-in reported by a beacon scanner. The body is parsed as JSON
/// whatever its `Content-Type`; an empty body is treated as `{}`.
///
/// ### Request Body
/// ```json
/// {
///   "studentId": 1,
///   "code": "BEACON-16",
///   "name": "Mathumitha R",
///   "date": "2025-03-14",
///   "time": "09:26:53",
///   "period": 1,
///   "status": "Present"
/// }
/// ```
/// `studentId` and `code` are required. Other fields are stored verbatim. A
/// second check-in for the same `studentId`, `date` and `period` replaces the
/// first.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "message": "Attendance recorded", "recordId": "1741944413123" }
/// ```
/// - `400 Bad Request` (missing or falsy `studentId`/`code`)
/// ```json
/// { "success": false, "error": "Missing required fields: studentId, code", "details": ["code is required"] }
/// ```
/// - `400 Bad Request` (not a JSON object, or a field of the wrong type)
/// ```json
/// { "success": false, "error": "Invalid request body", "details": "..." }
/// ```
/// - `500 Internal Server Error`
/// ```json
/// { "success": false, "error": "Server error" }
/// ```
pub async fn record_attendance(State(state): State<AppState>, body: Bytes) -> Response {
    let result = AttendanceSubmission::from_body(&body)
        .and_then(|submission| state.attendance().record(submission, Utc::now()));

    match result {
        Ok(recorded) => {
            tracing::info!(
                record_id = %recorded.record_id,
                replaced = recorded.replaced,
                evicted = recorded.evicted,
                "Attendance stored"
            );
            (
                StatusCode::OK,
                Json(RecordAck::new(recorded.record_id, "Attendance recorded")),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}
