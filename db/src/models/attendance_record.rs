use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value that marks a record as an irregularity.
pub const ABSENT_STATUS: &str = "Absent";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Attendance slot within a day. Scanners send either a number or a label,
/// and `1` is a different period from `"1"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Period {
    Number(i64),
    Label(String),
}

/// Deduplication key: one record per student, date and period.
///
/// An absent `date` or `period` is a key value of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttendanceKey {
    pub student_id: i64,
    pub date: Option<String>,
    pub period: Option<Period>,
}

/// A stored beacon check-in.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: i64,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub received_at: String,
    /// Canonical instant of the check-in, resolved once from `date` and `time`.
    #[serde(skip)]
    pub occurred_at: Option<NaiveDateTime>,
    /// Extra body fields, echoed back verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttendanceRecord {
    pub fn key(&self) -> AttendanceKey {
        AttendanceKey {
            student_id: self.student_id,
            date: self.date.clone(),
            period: self.period.clone(),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.status.as_deref() == Some(ABSENT_STATUS)
    }
}

/// Resolves the instant a check-in happened from the scanner's `date` and `time` strings.
///
/// A valid date without a time resolves to midnight. Anything unparsable yields `None`.
pub fn parse_occurred_at(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = date.map(str::trim).filter(|d| !d.is_empty())?;
    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())?;

    let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
        None => NaiveTime::MIN,
        Some(raw) => TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())?,
    };

    Some(date.and_time(time))
}
