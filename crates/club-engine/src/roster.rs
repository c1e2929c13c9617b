//! Roster reconciliation.
//!
//! Merges the authoritative member list of a session's group with the sparse
//! set of attendance records the store holds for that session. The result is a
//! [`RosterView`]: one row per member, in roster order, addressable by member id.

use std::collections::{HashMap, HashSet};

use club_core::entities::{AttendanceRecord, Member, ReconciledRow, TrainingSession};
use club_core::errors::CoreError;
use club_core::patch::RecordPatch;
use club_core::responses::SyncResult;

use crate::store::{AttendanceStore, RosterSource};

/// Editable attendance sheet of one session.
///
/// Rows live in an arena in roster order; `index` maps each member id to its
/// slot, so there is exactly one row per member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    session_id: String,
    rows: Vec<ReconciledRow>,
    index: HashMap<String, usize>,
}

/// Build the attendance sheet for `session_id`.
///
/// For each member the first record with a matching `member_id` is copied
/// verbatim; members without one get a draft record (no `record_id`, present,
/// every optional field empty). Records whose member is not on the roster are
/// left out. Later duplicates for a member are ignored and logged.
///
/// Presence is already one of the two legal states here: store adapters coerce
/// raw values with [`club_core::enums::PresenceState::coerce`] on the way in.
///
/// Pure and total; the same inputs always produce the same view.
#[must_use]
pub fn reconcile(
    session_id: &str,
    members: &[Member],
    existing: &[AttendanceRecord],
) -> RosterView {
    let mut first_match: HashMap<&str, &AttendanceRecord> =
        HashMap::with_capacity(existing.len());
    for record in existing {
        if let Some(kept) = first_match.get(record.member_id.as_str()) {
            tracing::warn!(
                session = session_id,
                member = %record.member_id,
                kept = ?kept.record_id,
                ignored = ?record.record_id,
                "duplicate attendance record for member; keeping the first"
            );
            continue;
        }
        first_match.insert(record.member_id.as_str(), record);
    }

    let mut rows = Vec::with_capacity(members.len());
    let mut index = HashMap::with_capacity(members.len());
    for member in members {
        if index.contains_key(&member.id) {
            tracing::warn!(
                session = session_id,
                member = %member.id,
                "member listed twice in roster; keeping the first position"
            );
            continue;
        }
        let record = first_match.get(member.id.as_str()).map_or_else(
            || AttendanceRecord::draft(session_id, member.id.clone()),
            |found| (*found).clone(),
        );
        index.insert(member.id.clone(), rows.len());
        rows.push(ReconciledRow {
            member: member.clone(),
            record,
        });
    }

    let orphans = first_match
        .keys()
        .filter(|member_id| !index.contains_key(**member_id))
        .count();
    if orphans > 0 {
        tracing::debug!(
            session = session_id,
            orphans,
            "attendance records without a roster member were left out"
        );
    }

    RosterView {
        session_id: session_id.to_string(),
        rows,
        index,
    }
}

/// Fetch a session, its group's members, and its attendance, then reconcile.
///
/// # Errors
///
/// Returns [`CoreError::Persistence`] if any of the three fetches fails.
pub async fn load_roster(
    roster: &dyn RosterSource,
    attendance: &dyn AttendanceStore,
    session_id: &str,
) -> Result<(TrainingSession, RosterView), CoreError> {
    let session = roster.session(session_id).await?;
    let members = roster.group_members(&session.group_id).await?;
    let existing = attendance.list_attendance(session_id).await?;
    tracing::debug!(
        session = session_id,
        group = %session.group_id,
        members = members.len(),
        records = existing.len(),
        "loaded roster"
    );

    let view = reconcile(session_id, &members, &existing);
    Ok((session, view))
}

impl RosterView {
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn rows(&self) -> &[ReconciledRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<ReconciledRow> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, member_id: &str) -> Option<&ReconciledRow> {
        self.index.get(member_id).map(|&slot| &self.rows[slot])
    }

    /// Assign one field of a member's record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the member is not on this sheet.
    pub fn patch(&mut self, member_id: &str, patch: RecordPatch) -> Result<(), CoreError> {
        let slot = *self
            .index
            .get(member_id)
            .ok_or_else(|| CoreError::not_found("member", member_id))?;
        self.rows[slot].record.apply(patch);
        Ok(())
    }

    /// Rows of the given members, in sheet order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for the first id not on this sheet.
    pub fn select<S: AsRef<str>>(
        &self,
        member_ids: &[S],
    ) -> Result<Vec<ReconciledRow>, CoreError> {
        let mut wanted = HashSet::with_capacity(member_ids.len());
        for member_id in member_ids {
            let member_id = member_id.as_ref();
            if !self.index.contains_key(member_id) {
                return Err(CoreError::not_found("member", member_id));
            }
            wanted.insert(member_id);
        }
        Ok(self
            .rows
            .iter()
            .filter(|row| wanted.contains(row.member.id.as_str()))
            .cloned()
            .collect())
    }

    /// Replace records with the store's copies returned by a sync run.
    ///
    /// New rows pick up their assigned `record_id`, so a later sync updates them
    /// instead of creating a second record. Returns how many rows changed.
    pub fn absorb(&mut self, result: &SyncResult) -> usize {
        let mut absorbed = 0;
        for record in &result.persisted {
            if let Some(&slot) = self.index.get(&record.member_id) {
                self.rows[slot].record = record.clone();
                absorbed += 1;
            }
        }
        absorbed
    }

    /// Give unpersisted rows the `record_id` the store already holds for them.
    ///
    /// Only the id is taken, so local edits survive and the next sync updates
    /// the stored record. The first stored record per member wins, as in
    /// [`reconcile`]. Returns how many rows were stamped.
    pub fn adopt(&mut self, stored: &[AttendanceRecord]) -> usize {
        let mut adopted = 0;
        for record in stored {
            let Some(record_id) = &record.record_id else {
                continue;
            };
            let Some(&slot) = self.index.get(&record.member_id) else {
                continue;
            };
            let row = &mut self.rows[slot].record;
            if row.record_id.is_none() {
                row.record_id = Some(record_id.clone());
                adopted += 1;
            }
        }
        adopted
    }

    /// Rows whose members failed in `result`: the subset to retry.
    #[must_use]
    pub fn pending(&self, result: &SyncResult) -> Vec<ReconciledRow> {
        let failed: HashSet<&str> = result.failed_ids().into_iter().collect();
        self.rows
            .iter()
            .filter(|row| failed.contains(row.member.id.as_str()))
            .cloned()
            .collect()
    }
}
