//! Data layer for the attendance API.
//!
//! Holds the attendance and roster models, the query filter, and the
//! `AttendanceStore` abstraction with its bounded in-memory implementation.

pub mod filters;
pub mod models;
pub mod store;

pub use store::{AttendanceStore, InMemoryAttendanceStore, StoreError, UpsertOutcome};
