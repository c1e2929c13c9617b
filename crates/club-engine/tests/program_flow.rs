//! Program composition against the in-memory store.

use std::sync::Arc;

use club_core::entities::CompositionEntry;
use club_core::errors::CoreError;
use club_engine::SessionComposer;
use club_engine::memory::MemoryStore;
use club_engine::store::CompositionStore;
use pretty_assertions::assert_eq;

const SESSION: &str = "trn-3";

fn other_session_entry() -> CompositionEntry {
    CompositionEntry {
        id: "te-900".into(),
        session_id: "trn-other".into(),
        item_id: "ex-9".into(),
        duration_minutes: 45,
        phase: None,
        position: None,
        item: None,
    }
}

#[tokio::test]
async fn load_only_sees_its_own_session() {
    let store = Arc::new(MemoryStore::new().with_entries(vec![other_session_entry()]));
    let program = SessionComposer::load(SESSION, store).await.unwrap();
    assert!(program.entries().is_empty());
    assert_eq!(program.total_duration(), 0);
}

#[tokio::test]
async fn totals_follow_appends_and_removals() {
    let store = Arc::new(MemoryStore::new());
    let mut program = SessionComposer::load(SESSION, store.clone()).await.unwrap();

    let first = program.append("ex-1", 20, Some("warm-up"), Some(1)).await.unwrap();
    program.append("ex-2", 10, Some("main"), Some(2)).await.unwrap();
    assert_eq!(program.total_duration(), 30);

    let err = program.append("ex-3", 0, None, None).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidDuration { minutes: 0 }));
    assert_eq!(program.total_duration(), 30);

    let err = program.remove("te-does-not-exist").await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
    assert_eq!(program.total_duration(), 30);

    program.remove(&first.id).await.unwrap();
    assert_eq!(program.total_duration(), 10);

    let reloaded = SessionComposer::load(SESSION, store.clone()).await.unwrap();
    assert_eq!(reloaded.entries(), program.entries());
    assert_eq!(store.list_entries(SESSION).await.unwrap().len(), 1);
}

#[tokio::test]
async fn summary_lists_entries_in_display_order() {
    let store = Arc::new(MemoryStore::new());
    let mut program = SessionComposer::load(SESSION, store).await.unwrap();

    program.append("ex-cool", 5, None, None).await.unwrap();
    program.append("ex-main", 25, None, Some(2)).await.unwrap();
    program.append("ex-warm", 10, None, Some(1)).await.unwrap();

    let summary = program.summary();
    let items: Vec<&str> = summary.entries.iter().map(|e| e.item_id.as_str()).collect();
    assert_eq!(items, vec!["ex-warm", "ex-main", "ex-cool"]);
    assert_eq!(summary.total_minutes, 40);
    assert_eq!(summary.session_id, SESSION);
}
