//! Session program composition.
//!
//! A [`SessionComposer`] holds the ordered exercise entries of one session and
//! mirrors every append and removal to a [`CompositionStore`]. The local list
//! only changes after the store confirms, so it never shows an entry the store
//! does not have.

use std::sync::Arc;

use club_core::entities::{CompositionEntry, NewCompositionEntry};
use club_core::enums::EntryState;
use club_core::errors::CoreError;
use club_core::responses::ProgramSummary;

use crate::store::CompositionStore;

/// Ordered program of one training session.
pub struct SessionComposer {
    session_id: String,
    store: Arc<dyn CompositionStore>,
    entries: Vec<CompositionEntry>,
}

impl SessionComposer {
    /// Start from an already-fetched entry list.
    #[must_use]
    pub fn new(
        session_id: impl Into<String>,
        store: Arc<dyn CompositionStore>,
        entries: Vec<CompositionEntry>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            store,
            entries,
        }
    }

    /// Fetch the session's entries from the store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Persistence`] if the listing fails.
    pub async fn load(
        session_id: impl Into<String>,
        store: Arc<dyn CompositionStore>,
    ) -> Result<Self, CoreError> {
        let session_id = session_id.into();
        let entries = store.list_entries(&session_id).await?;
        tracing::debug!(session = %session_id, entries = entries.len(), "loaded program");
        Ok(Self::new(session_id, store, entries))
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Entries in the order the store returned or confirmed them.
    #[must_use]
    pub fn entries(&self) -> &[CompositionEntry] {
        &self.entries
    }

    /// Entries in display order: positioned entries ascending, then the rest.
    ///
    /// Ties keep their current relative order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&CompositionEntry> {
        let mut ordered: Vec<&CompositionEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| (entry.position.is_none(), entry.position));
        ordered
    }

    /// Sum of every entry's duration in minutes.
    #[must_use]
    pub fn total_duration(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.duration_minutes))
            .sum()
    }

    /// Display-ordered snapshot with its total.
    #[must_use]
    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary {
            session_id: self.session_id.clone(),
            total_minutes: self.total_duration(),
            entries: self.ordered().into_iter().cloned().collect(),
        }
    }

    /// Add an exercise to the program.
    ///
    /// Input is validated before any store call. The entry joins the list
    /// only once the store has created it, carrying the store's id.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidDuration`] if `duration_minutes` is zero or negative.
    /// - [`CoreError::Validation`] if `item_id` is blank or the duration overflows.
    /// - [`CoreError::Persistence`] if the store refuses; the list is unchanged.
    pub async fn append(
        &mut self,
        item_id: &str,
        duration_minutes: i64,
        phase: Option<&str>,
        position: Option<i32>,
    ) -> Result<CompositionEntry, CoreError> {
        if duration_minutes <= 0 {
            return Err(CoreError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        let minutes = u32::try_from(duration_minutes).map_err(|_| {
            CoreError::Validation(format!("duration of {duration_minutes} minutes is too large"))
        })?;
        let item_id = item_id.trim();
        if item_id.is_empty() {
            return Err(CoreError::Validation("exercise id must not be empty".into()));
        }
        let phase = phase
            .map(str::trim)
            .filter(|phase| !phase.is_empty())
            .map(str::to_string);

        let proposal = NewCompositionEntry {
            session_id: self.session_id.clone(),
            item_id: item_id.to_string(),
            duration_minutes: minutes,
            phase,
            position,
        };
        let entry = self.store.create_entry(&proposal).await.map_err(|error| {
            tracing::warn!(
                session = %self.session_id,
                item = %proposal.item_id,
                %error,
                "store refused program entry"
            );
            CoreError::from(error)
        })?;
        transition(&entry.id, EntryState::Proposed, EntryState::Persisted)?;

        tracing::info!(
            session = %self.session_id,
            entry = %entry.id,
            minutes = entry.duration_minutes,
            "program entry added"
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove an entry from the program.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if no local entry has `entry_id`; the store
    ///   is not called.
    /// - [`CoreError::Persistence`] if the store fails; the list is unchanged.
    pub async fn remove(&mut self, entry_id: &str) -> Result<(), CoreError> {
        let slot = self
            .entries
            .iter()
            .position(|entry| entry.id == entry_id)
            .ok_or_else(|| CoreError::not_found("training_exercise", entry_id))?;

        self.store.delete_entry(entry_id).await.map_err(|error| {
            tracing::warn!(
                session = %self.session_id,
                entry = entry_id,
                %error,
                "store refused program entry removal"
            );
            CoreError::from(error)
        })?;
        transition(entry_id, EntryState::Persisted, EntryState::Removed)?;

        self.entries.remove(slot);
        tracing::info!(session = %self.session_id, entry = entry_id, "program entry removed");
        Ok(())
    }
}

fn transition(entry_id: &str, from: EntryState, to: EntryState) -> Result<(), CoreError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity_type: "training_exercise".into(),
            id: entry_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::entities::CatalogItem;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::memory::MemoryStore;

    const SESSION: &str = "trn-1";

    fn entry(id: &str, minutes: u32, position: Option<i32>) -> CompositionEntry {
        CompositionEntry {
            id: id.into(),
            session_id: SESSION.into(),
            item_id: format!("ex-{id}"),
            duration_minutes: minutes,
            phase: None,
            position,
            item: None,
        }
    }

    fn composer(store: &Arc<MemoryStore>) -> SessionComposer {
        SessionComposer::new(SESSION, store.clone(), store.composition_entries())
    }

    #[tokio::test]
    async fn append_then_remove_tracks_total() {
        let store = Arc::new(MemoryStore::new());
        let mut program = composer(&store);

        let warmup = program.append("ex-1", 20, Some("warm-up"), None).await.unwrap();
        program.append("ex-2", 10, None, None).await.unwrap();
        assert_eq!(program.total_duration(), 30);

        program.remove(&warmup.id).await.unwrap();
        assert_eq!(program.total_duration(), 10);
        assert_eq!(store.composition_entries().len(), 1);
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[tokio::test]
    async fn non_positive_duration_is_rejected(#[case] minutes: i64) {
        let store = Arc::new(MemoryStore::new().with_entries(vec![entry("te-1", 15, None)]));
        let mut program = composer(&store);

        let err = program.append("ex-1", minutes, None, None).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidDuration { .. }));
        assert_eq!(program.total_duration(), 15);
        assert_eq!(store.composition_entries().len(), 1);
    }

    #[tokio::test]
    async fn blank_item_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let mut program = composer(&store);
        let err = program.append("  ", 10, None, None).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn blank_phase_is_stored_as_none() {
        let store = Arc::new(MemoryStore::new());
        let mut program = composer(&store);
        let added = program.append("ex-1", 10, Some("  "), None).await.unwrap();
        assert_eq!(added.phase, None);
    }

    #[tokio::test]
    async fn store_refusal_leaves_list_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let mut program = composer(&store);
        store.fail_next_create_entry();

        let err = program.append("ex-1", 10, None, None).await.unwrap_err();
        assert!(matches!(err, CoreError::Persistence(_)));
        assert!(program.entries().is_empty());
    }

    #[tokio::test]
    async fn remove_unknown_entry_is_not_found() {
        let store = Arc::new(MemoryStore::new().with_entries(vec![entry("te-1", 15, None)]));
        let mut program = composer(&store);

        let err = program.remove("te-404").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
        assert_eq!(program.total_duration(), 15);
    }

    #[tokio::test]
    async fn failed_delete_keeps_entry() {
        let store = Arc::new(MemoryStore::new().with_entries(vec![entry("te-1", 15, None)]));
        let mut program = composer(&store);
        store.fail_next_delete_entry();

        let err = program.remove("te-1").await.unwrap_err();
        assert!(matches!(err, CoreError::Persistence(_)));
        assert_eq!(program.entries().len(), 1);
    }

    #[tokio::test]
    async fn added_entry_carries_catalog_label() {
        let store = Arc::new(MemoryStore::new().with_catalog(vec![CatalogItem {
            id: "ex-1".into(),
            name: "Rondo".into(),
            category: "Passing".into(),
        }]));
        let mut program = composer(&store);
        let added = program.append("ex-1", 12, None, Some(1)).await.unwrap();
        assert_eq!(added.label(), "Rondo");
    }

    #[test]
    fn ordered_puts_positioned_entries_first() {
        let store = Arc::new(MemoryStore::new());
        let program = SessionComposer::new(
            SESSION,
            store,
            vec![
                entry("te-1", 5, None),
                entry("te-2", 5, Some(2)),
                entry("te-3", 5, Some(1)),
                entry("te-4", 5, None),
                entry("te-5", 5, Some(2)),
            ],
        );

        let ids: Vec<&str> = program.ordered().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["te-3", "te-2", "te-5", "te-1", "te-4"]);
        assert_eq!(program.summary().total_minutes, 25);
    }
}
