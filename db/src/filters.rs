use crate::models::attendance_record::AttendanceRecord;

/// How a `studentId` query parameter constrains the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentIdFilter {
    Id(i64),
    /// The parameter was present but not a number; nothing matches.
    Unparsable,
}

/// Conjunctive filter over stored attendance records.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub date: Option<String>,
    pub student_id: Option<StudentIdFilter>,
    pub irregularities_only: bool,
}

impl AttendanceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: String) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_student_id(mut self, student_id: StudentIdFilter) -> Self {
        self.student_id = Some(student_id);
        self
    }

    pub fn with_irregularities_only(mut self, irregularities_only: bool) -> Self {
        self.irregularities_only = irregularities_only;
        self
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(date) = &self.date {
            if record.date.as_deref() != Some(date.as_str()) {
                return false;
            }
        }

        match self.student_id {
            Some(StudentIdFilter::Id(id)) if record.student_id != id => return false,
            Some(StudentIdFilter::Unparsable) => return false,
            _ => {}
        }

        !self.irregularities_only || record.is_absent()
    }
}
