//! Application state shared across Axum route handlers.
//!
//! The attendance store is injected here instead of living in a module-level
//! variable, so tests and alternative backends can supply their own.

use std::sync::Arc;

use db::{AttendanceStore, InMemoryAttendanceStore};
use services::attendance_record::AttendanceService;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    attendance: Arc<AttendanceService>,
}

impl AppState {
    /// Creates a new `AppState` backed by the given attendance store.
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            attendance: Arc::new(AttendanceService::new(store)),
        }
    }

    /// State backed by a fresh process-local store holding at most `capacity` records.
    pub fn in_memory(capacity: usize) -> Self {
        Self::new(Arc::new(InMemoryAttendanceStore::new(capacity)))
    }

    pub fn attendance(&self) -> &AttendanceService {
        &self.attendance
    }
}
