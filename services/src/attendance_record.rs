use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use db::filters::AttendanceFilter;
use db::models::attendance_record::{parse_occurred_at, AttendanceRecord, Period};
use db::AttendanceStore;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::service::{AppError, AppResult};

/// Body fields the server always stamps itself.
const SERVER_OWNED_FIELDS: &[&str] = &["id", "receivedAt"];

/// Fields where a falsy JSON value (`null`, `false`, `0`, `""`) means "not given".
const REQUIRED_FIELDS: &[&str] = &["studentId", "code"];

/// A beacon check-in as posted by a scanner.
///
/// Unknown fields are kept in `extra` and stored verbatim.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubmission {
    #[validate(
        required(message = "studentId is required"),
        custom(function = "reject_zero", message = "studentId is required")
    )]
    pub student_id: Option<i64>,

    #[validate(
        required(message = "code is required"),
        length(min = 1, message = "code must not be empty")
    )]
    pub code: Option<String>,

    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub period: Option<Period>,
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttendanceSubmission {
    /// Parses a raw request body. An empty body is treated as `{}`.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedBody(format!("invalid JSON: {e}")))?;
        let Value::Object(mut object) = value else {
            return Err(AppError::MalformedBody(
                "request body must be a JSON object".into(),
            ));
        };

        for field in REQUIRED_FIELDS {
            if object.get(*field).is_some_and(is_falsy) {
                object.remove(*field);
            }
        }

        serde_json::from_value(Value::Object(object))
            .map_err(|e| AppError::MalformedBody(e.to_string()))
    }

    fn empty() -> Self {
        Self {
            student_id: None,
            code: None,
            name: None,
            date: None,
            time: None,
            period: None,
            status: None,
            extra: Map::new(),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn reject_zero(student_id: i64) -> Result<(), ValidationError> {
    if student_id == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Hands out record ids from the ingestion clock in milliseconds.
///
/// Ids never repeat within a process: a request landing in the same
/// millisecond as the previous one gets `previous + 1`.
#[derive(Debug, Default)]
pub struct RecordIdGenerator {
    last: AtomicI64,
}

impl RecordIdGenerator {
    pub fn next(&self, now: DateTime<Utc>) -> String {
        let candidate = now.timestamp_millis();
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        candidate.max(previous + 1).to_string()
    }
}

/// What a successful submission did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAttendance {
    pub record_id: String,
    pub replaced: bool,
    pub evicted: usize,
}

pub struct AttendanceService {
    store: Arc<dyn AttendanceStore>,
    ids: RecordIdGenerator,
}

impl AttendanceService {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            store,
            ids: RecordIdGenerator::default(),
        }
    }

    /// Validates a submission, stamps it and writes it to the store.
    ///
    /// A submission sharing `(studentId, date, period)` with a stored record
    /// replaces that record.
    pub fn record(
        &self,
        submission: AttendanceSubmission,
        now: DateTime<Utc>,
    ) -> AppResult<RecordedAttendance> {
        submission.validate()?;

        let AttendanceSubmission {
            student_id,
            code,
            name,
            date,
            time,
            period,
            status,
            mut extra,
        } = submission;
        let (Some(student_id), Some(code)) = (student_id, code) else {
            return Err(AppError::MalformedBody(
                "studentId and code must be present".into(),
            ));
        };

        for field in SERVER_OWNED_FIELDS {
            extra.remove(*field);
        }

        let record = AttendanceRecord {
            id: self.ids.next(now),
            occurred_at: parse_occurred_at(date.as_deref(), time.as_deref()),
            received_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            student_id,
            code,
            name,
            date,
            time,
            period,
            status,
            extra,
        };
        let record_id = record.id.clone();

        log::info!(
            "Attendance: {} - {}",
            record.name.as_deref().unwrap_or("unknown"),
            record.code
        );

        let outcome = self.store.upsert(record)?;
        if outcome.replaced {
            log::debug!("Replaced earlier attendance for student {student_id}");
        }

        Ok(RecordedAttendance {
            record_id,
            replaced: outcome.replaced,
            evicted: outcome.evicted,
        })
    }

    /// Matching records, newest check-in first.
    ///
    /// Records whose date/time could not be resolved come after all dated
    /// ones. Ties keep the most recently written slot first.
    pub fn list(&self, filter: &AttendanceFilter) -> AppResult<Vec<AttendanceRecord>> {
        let mut records = self.store.query(filter)?;
        records.reverse();
        records.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(records)
    }
}
