pub mod attendance_record;
pub mod service;
pub mod student;

pub use service::{AppError, AppResult};
