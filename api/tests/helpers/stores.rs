use db::{
    AttendanceStore, StoreError, UpsertOutcome, filters::AttendanceFilter,
    models::attendance_record::AttendanceRecord,
};

/// Store whose every operation fails.
pub struct FailingStore;

impl AttendanceStore for FailingStore {
    fn upsert(&self, _record: AttendanceRecord) -> Result<UpsertOutcome, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn query(&self, _filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError> {
        Err(StoreError::Poisoned)
    }
}

/// Store that panics on every operation.
pub struct PanickingStore;

impl AttendanceStore for PanickingStore {
    fn upsert(&self, _record: AttendanceRecord) -> Result<UpsertOutcome, StoreError> {
        panic!("upsert exploded")
    }

    fn query(&self, _filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError> {
        panic!("query exploded")
    }
}
