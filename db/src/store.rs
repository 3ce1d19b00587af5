//! Attendance storage.
//!
//! `AttendanceStore` is the seam between the service layer and wherever records live.
//! The only implementation today is [`InMemoryAttendanceStore`], a process-local table
//! keyed by `(studentId, date, period)` with bounded FIFO eviction. Each running
//! process owns an independent copy; nothing is shared or persisted.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::debug;

use crate::filters::AttendanceFilter;
use crate::models::attendance_record::{AttendanceKey, AttendanceRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attendance store lock poisoned")]
    Poisoned,
}

/// Result of a single write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// An existing record with the same key was overwritten in place.
    pub replaced: bool,
    /// Number of oldest records dropped to get back under capacity.
    pub evicted: usize,
}

pub trait AttendanceStore: Send + Sync {
    /// Inserts `record`, or replaces the record sharing its key while keeping
    /// that record's position in eviction order.
    fn upsert(&self, record: AttendanceRecord) -> Result<UpsertOutcome, StoreError>;

    /// Returns matching records, oldest slot first.
    fn query(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError>;
}

#[derive(Default)]
struct Table {
    next_slot: u64,
    slots: BTreeMap<u64, AttendanceRecord>,
    index: HashMap<AttendanceKey, u64>,
}

/// Bounded in-memory table. Once more than `capacity` records are held, the
/// records in the oldest slots are evicted first.
pub struct InMemoryAttendanceStore {
    capacity: usize,
    table: Mutex<Table>,
}

impl InMemoryAttendanceStore {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "attendance store capacity must be positive");
        Self {
            capacity,
            table: Mutex::new(Table::default()),
        }
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn upsert(&self, record: AttendanceRecord) -> Result<UpsertOutcome, StoreError> {
        let mut table = self.table()?;
        let key = record.key();

        let replaced = match table.index.get(&key).copied() {
            Some(slot) => {
                table.slots.insert(slot, record);
                true
            }
            None => {
                let slot = table.next_slot;
                table.next_slot += 1;
                table.index.insert(key, slot);
                table.slots.insert(slot, record);
                false
            }
        };

        let mut evicted = 0;
        while table.slots.len() > self.capacity {
            let Some((_, oldest)) = table.slots.pop_first() else {
                break;
            };
            table.index.remove(&oldest.key());
            evicted += 1;
        }

        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "Evicted oldest attendance records");
        }

        Ok(UpsertOutcome { replaced, evicted })
    }

    fn query(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, StoreError> {
        let table = self.table()?;
        Ok(table
            .slots
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}
