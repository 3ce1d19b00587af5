use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::filters::{AttendanceFilter, StudentIdFilter};

use super::common::error_response;
use crate::state::AppState;

/// Query parameters accepted by `GET /attendance`. Empty values count as absent.
#[derive(Debug, Default)]
pub struct AttendanceQuery {
    pub date: Option<String>,
    pub student_id: Option<String>,
    pub irregularities: Option<String>,
}

impl AttendanceQuery {
    /// Builds the query from decoded `key=value` pairs. When a key repeats,
    /// its first value wins. Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "date" => &mut query.date,
                "studentId" => &mut query.student_id,
                "irregularities" => &mut query.irregularities,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn into_filter(self) -> AttendanceFilter {
        let mut filter = AttendanceFilter::new();

        if let Some(date) = self.date.filter(|d| !d.is_empty()) {
            filter = filter.with_date(date);
        }

        if let Some(raw) = self.student_id.filter(|s| !s.is_empty()) {
            filter = filter.with_student_id(match parse_leading_int(&raw) {
                Some(id) => StudentIdFilter::Id(id),
                None => StudentIdFilter::Unparsable,
            });
        }

        filter.with_irregularities_only(self.irregularities.as_deref() == Some("true"))
    }
}

/// Reads an integer the way lenient web clients do: leading whitespace, an
/// optional sign, then as many digits as are present. `"12abc"` is `12`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}

/// GET /attendance
///
/// Returns stored check-ins, newest first.
///
/// ### Query Parameters
/// - `date` *(optional)*: exact match on the record's `date` string
/// - `studentId` *(optional)*: integer; a value that is not a number matches nothing
/// - `irregularities` *(optional)*: `true` keeps only records with status `Absent`
///
/// Filters combine with AND. A repeated parameter uses its first value.
///
/// ### Responses
/// - `200 OK`: JSON array of records
/// - `500 Internal Server Error`: `{ "success": false, "error": "Server error" }`
pub async fn list_attendance(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match pairs {
        Ok(Query(pairs)) => AttendanceQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Ignoring undecodable attendance query");
            AttendanceQuery::default()
        }
    };

    match state.attendance().list(&query.into_filter()) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => error_response(e),
    }
}
