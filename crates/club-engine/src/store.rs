//! Record-store seams.
//!
//! Every call is one round-trip to the external store and fails with a
//! [`StoreError`]. Implementations must be shareable across tasks.

use async_trait::async_trait;

use club_core::entities::{
    AttendanceFields, AttendanceRecord, CatalogItem, CompositionEntry, Member, NewAttendance,
    NewCompositionEntry, TrainingSession,
};
use club_core::errors::StoreError;

/// Source of sessions and the members of their groups.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn session(&self, session_id: &str) -> Result<TrainingSession, StoreError>;

    async fn group_members(&self, group_id: &str) -> Result<Vec<Member>, StoreError>;
}

/// Persisted attendance records.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// All records of a session. May hold zero, one, or several per member.
    async fn list_attendance(&self, session_id: &str) -> Result<Vec<AttendanceRecord>, StoreError>;

    /// Create a record; the returned record carries its assigned `record_id`.
    async fn create_attendance(&self, new: &NewAttendance) -> Result<AttendanceRecord, StoreError>;

    /// Overwrite every mutable field of an existing record.
    async fn update_attendance(
        &self,
        record_id: &str,
        fields: &AttendanceFields,
    ) -> Result<AttendanceRecord, StoreError>;
}

/// Persisted program entries of sessions.
#[async_trait]
pub trait CompositionStore: Send + Sync {
    async fn list_entries(&self, session_id: &str) -> Result<Vec<CompositionEntry>, StoreError>;

    async fn create_entry(&self, new: &NewCompositionEntry)
    -> Result<CompositionEntry, StoreError>;

    async fn delete_entry(&self, entry_id: &str) -> Result<(), StoreError>;
}

/// Exercise catalog used to pick items for a program.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, StoreError>;
}
