//! In-process record store.
//!
//! Implements every store trait over plain collections. Failures and stalls
//! can be injected per member or per call, and write calls are counted, so the
//! engine's partial-failure behavior can be exercised without a backend.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use club_core::entities::{
    AttendanceFields, AttendanceRecord, CatalogItem, CompositionEntry, Member, NewAttendance,
    NewCompositionEntry, TrainingSession,
};
use club_core::errors::StoreError;

use crate::store::{AttendanceStore, CatalogSource, CompositionStore, RosterSource};

/// How long a stalled call sleeps. Long enough for any test timeout to fire.
const STALL: Duration = Duration::from_secs(600);

#[derive(Default)]
struct State {
    next_id: u64,
    sessions: HashMap<String, TrainingSession>,
    groups: HashMap<String, Vec<Member>>,
    attendance: Vec<AttendanceRecord>,
    entries: Vec<CompositionEntry>,
    catalog: Vec<CatalogItem>,
    failing_members: HashSet<String>,
    stalled_members: HashSet<String>,
    late_members: HashSet<String>,
    fail_next_create_entry: bool,
    fail_next_delete_entry: bool,
    write_calls: HashMap<String, usize>,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

/// Thread-safe in-memory implementation of all store traits.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    latency: Option<Duration>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session together with the members of its group.
    #[must_use]
    pub fn with_session(self, session: TrainingSession, members: Vec<Member>) -> Self {
        {
            let mut state = self.lock();
            state.groups.insert(session.group_id.clone(), members);
            state.sessions.insert(session.id.clone(), session);
        }
        self
    }

    #[must_use]
    pub fn with_attendance(self, records: Vec<AttendanceRecord>) -> Self {
        self.lock().attendance.extend(records);
        self
    }

    #[must_use]
    pub fn with_entries(self, entries: Vec<CompositionEntry>) -> Self {
        self.lock().entries.extend(entries);
        self
    }

    #[must_use]
    pub fn with_catalog(self, items: Vec<CatalogItem>) -> Self {
        self.lock().catalog.extend(items);
        self
    }

    /// Delay every call by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every attendance write for `member_id` fail until recovered.
    pub fn fail_member(&self, member_id: &str) {
        self.lock().failing_members.insert(member_id.to_string());
    }

    pub fn recover_member(&self, member_id: &str) {
        let mut state = self.lock();
        state.failing_members.remove(member_id);
        state.stalled_members.remove(member_id);
        state.late_members.remove(member_id);
    }

    /// Make every attendance write for `member_id` hang.
    pub fn stall_member(&self, member_id: &str) {
        self.lock().stalled_members.insert(member_id.to_string());
    }

    /// Make attendance creates for `member_id` commit the record, then hang
    /// before answering.
    pub fn stall_member_after_commit(&self, member_id: &str) {
        self.lock().late_members.insert(member_id.to_string());
    }

    pub fn fail_next_create_entry(&self) {
        self.lock().fail_next_create_entry = true;
    }

    pub fn fail_next_delete_entry(&self) {
        self.lock().fail_next_delete_entry = true;
    }

    /// Snapshot of every stored attendance record.
    #[must_use]
    pub fn attendance_records(&self) -> Vec<AttendanceRecord> {
        self.lock().attendance.clone()
    }

    /// Snapshot of every stored composition entry.
    #[must_use]
    pub fn composition_entries(&self) -> Vec<CompositionEntry> {
        self.lock().entries.clone()
    }

    /// Number of create/update calls made for `member_id`, failed ones included.
    #[must_use]
    pub fn write_calls(&self, member_id: &str) -> usize {
        self.lock().write_calls.get(member_id).copied().unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn round_trip(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Count a write for `member_id` and apply injected faults.
    async fn admit_write(&self, member_id: &str) -> Result<(), StoreError> {
        self.round_trip().await;
        let (failing, stalled) = {
            let mut state = self.lock();
            *state.write_calls.entry(member_id.to_string()).or_default() += 1;
            (
                state.failing_members.contains(member_id),
                state.stalled_members.contains(member_id),
            )
        };
        if stalled {
            tokio::time::sleep(STALL).await;
        }
        if failing {
            return Err(StoreError::Unavailable(format!(
                "injected failure for member {member_id}"
            )));
        }
        Ok(())
    }
}

fn not_found(entity_type: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        entity_type: entity_type.to_string(),
        id: id.to_string(),
    }
}

#[async_trait]
impl RosterSource for MemoryStore {
    async fn session(&self, session_id: &str) -> Result<TrainingSession, StoreError> {
        self.round_trip().await;
        self.lock()
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| not_found("training", session_id))
    }

    async fn group_members(&self, group_id: &str) -> Result<Vec<Member>, StoreError> {
        self.round_trip().await;
        self.lock()
            .groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| not_found("team", group_id))
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn list_attendance(&self, session_id: &str) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.round_trip().await;
        Ok(self
            .lock()
            .attendance
            .iter()
            .filter(|record| record.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn create_attendance(&self, new: &NewAttendance) -> Result<AttendanceRecord, StoreError> {
        self.admit_write(&new.member_id).await?;
        let (record, late) = {
            let mut state = self.lock();
            let record_id = state.next_id("att");
            let record = AttendanceRecord {
                record_id: Some(record_id),
                session_id: new.session_id.clone(),
                member_id: new.member_id.clone(),
                presence: new.fields.presence,
                note: new.fields.note.clone(),
                absence_title: new.fields.absence_title.clone(),
                absence_description: new.fields.absence_description.clone(),
                behavior_score: new.fields.behavior_score,
                technique_score: new.fields.technique_score,
                attitude_score: new.fields.attitude_score,
            };
            state.attendance.push(record.clone());
            (record, state.late_members.contains(&new.member_id))
        };
        if late {
            tokio::time::sleep(STALL).await;
        }
        Ok(record)
    }

    async fn update_attendance(
        &self,
        record_id: &str,
        fields: &AttendanceFields,
    ) -> Result<AttendanceRecord, StoreError> {
        let member_id = self
            .lock()
            .attendance
            .iter()
            .find(|record| record.record_id.as_deref() == Some(record_id))
            .map(|record| record.member_id.clone())
            .ok_or_else(|| not_found("attendance", record_id))?;
        self.admit_write(&member_id).await?;

        let mut state = self.lock();
        let record = state
            .attendance
            .iter_mut()
            .find(|record| record.record_id.as_deref() == Some(record_id))
            .ok_or_else(|| not_found("attendance", record_id))?;
        record.presence = fields.presence;
        record.note.clone_from(&fields.note);
        record.absence_title.clone_from(&fields.absence_title);
        record.absence_description.clone_from(&fields.absence_description);
        record.behavior_score = fields.behavior_score;
        record.technique_score = fields.technique_score;
        record.attitude_score = fields.attitude_score;
        Ok(record.clone())
    }
}

#[async_trait]
impl CompositionStore for MemoryStore {
    async fn list_entries(&self, session_id: &str) -> Result<Vec<CompositionEntry>, StoreError> {
        self.round_trip().await;
        Ok(self
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn create_entry(
        &self,
        new: &NewCompositionEntry,
    ) -> Result<CompositionEntry, StoreError> {
        self.round_trip().await;
        let mut state = self.lock();
        if std::mem::take(&mut state.fail_next_create_entry) {
            return Err(StoreError::Unavailable("injected create failure".into()));
        }
        let id = state.next_id("te");
        let item = state
            .catalog
            .iter()
            .find(|item| item.id == new.item_id)
            .cloned();
        let entry = CompositionEntry {
            id,
            session_id: new.session_id.clone(),
            item_id: new.item_id.clone(),
            duration_minutes: new.duration_minutes,
            phase: new.phase.clone(),
            position: new.position,
            item,
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }

    async fn delete_entry(&self, entry_id: &str) -> Result<(), StoreError> {
        self.round_trip().await;
        let mut state = self.lock();
        if std::mem::take(&mut state.fail_next_delete_entry) {
            return Err(StoreError::Unavailable("injected delete failure".into()));
        }
        let before = state.entries.len();
        state.entries.retain(|entry| entry.id != entry_id);
        if state.entries.len() == before {
            return Err(not_found("training_exercise", entry_id));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for MemoryStore {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, StoreError> {
        self.round_trip().await;
        Ok(self.lock().catalog.clone())
    }
}
