use db::models::student::{ROSTER, Student};

pub struct StudentService;

impl StudentService {
    /// The full roster in declaration order.
    pub fn list() -> &'static [Student] {
        &ROSTER
    }
}
