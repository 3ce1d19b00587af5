pub mod attendance_record;
pub mod student;
