//! Outgoing JSON response bodies.
//!
//! Scanner firmware and the dashboard parse these shapes directly, so field
//! names are fixed:
//! - `ApiResponse<T>`: `{ success, data, message }`, used by `/health`.
//! - `RecordAck`: `{ success: true, message, recordId }` after a stored check-in.
//! - `ErrorResponse`: `{ success: false, error, details? }`, or `{ error }` alone
//!   for the roster endpoint.

use serde::Serialize;
use serde_json::Value;

/// Standardized API response wrapper.
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Health check passed"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Acknowledgement of a stored attendance record.
///
/// ```json
/// { "success": true, "message": "Attendance recorded", "recordId": "1741944413123" }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAck {
    pub success: bool,
    pub message: String,
    pub record_id: String,
}

impl RecordAck {
    pub fn new(record_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            record_id: record_id.into(),
        }
    }
}

/// Error body.
///
/// ```json
/// { "success": false, "error": "Missing required fields: studentId, code", "details": ["code is required"] }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// `{ success: false, error }`
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            error: error.into(),
            details: None,
        }
    }

    /// `{ error }` without a `success` flag.
    pub fn bare(error: impl Into<String>) -> Self {
        Self {
            success: None,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = Some(details.into());
        self
    }
}
