//! Batch persistence of an edited attendance sheet.
//!
//! Every row is an independent create-or-update call. Rows run concurrently up
//! to [`SyncOptions::concurrency`], each bounded by [`SyncOptions::call_timeout`].
//! A failing row never stops the others; the outcome of every row is reported
//! in the returned [`SyncResult`], which is the only error channel.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use club_core::entities::{AttendanceRecord, ReconciledRow};
use club_core::errors::StoreError;
use club_core::responses::{SyncFailure, SyncResult};

use crate::roster::RosterView;
use crate::store::AttendanceStore;

/// Fan-out and timeout settings for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Store calls in flight at once. `1` persists rows strictly in order.
    pub concurrency: usize,
    /// Bound for one store call; an expired call fails only its own row.
    pub call_timeout: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            call_timeout: Duration::from_secs(5),
        }
    }
}

impl SyncOptions {
    /// One row at a time, in input order.
    #[must_use]
    pub const fn sequential(call_timeout: Duration) -> Self {
        Self {
            concurrency: 1,
            call_timeout,
        }
    }
}

/// Persists reconciled rows through an [`AttendanceStore`].
pub struct BatchSync {
    store: Arc<dyn AttendanceStore>,
    options: SyncOptions,
}

impl BatchSync {
    #[must_use]
    pub fn new(store: Arc<dyn AttendanceStore>, options: SyncOptions) -> Self {
        Self { store, options }
    }

    #[must_use]
    pub const fn options(&self) -> SyncOptions {
        self.options
    }

    /// Persist every row: update by id when the record exists, create otherwise.
    ///
    /// `succeeded` and `failed` list member ids in input order. Re-running with
    /// only the failed rows is safe: rows that already succeeded are not touched.
    pub async fn sync(&self, rows: &[ReconciledRow]) -> SyncResult {
        let concurrency = self.options.concurrency.max(1);
        let mut outcomes: Vec<(usize, Result<AttendanceRecord, StoreError>)> =
            stream::iter(rows.iter().enumerate())
                .map(|(slot, row)| async move { (slot, self.persist(&row.record).await) })
                .buffer_unordered(concurrency)
                .collect()
                .await;
        outcomes.sort_by_key(|(slot, _)| *slot);

        let mut result = SyncResult::default();
        for (slot, outcome) in outcomes {
            let row = &rows[slot];
            match outcome {
                Ok(record) => {
                    result.succeeded.push(row.member.id.clone());
                    result.persisted.push(record);
                }
                Err(error) => {
                    tracing::warn!(
                        session = %row.record.session_id,
                        member = %row.member.id,
                        record = ?row.record.record_id,
                        %error,
                        "attendance row failed to persist"
                    );
                    result.failed.push(SyncFailure {
                        member_id: row.member.id.clone(),
                        error_message: error.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            rows = rows.len(),
            succeeded = result.succeeded.len(),
            failed = result.failed.len(),
            "attendance batch persisted"
        );
        result
    }

    /// Persist a whole sheet and stamp the store's records back into it.
    pub async fn sync_view(&self, view: &mut RosterView) -> SyncResult {
        let result = self.sync(view.rows()).await;
        view.absorb(&result);
        result
    }

    /// Persist only the rows that failed in `previous`, absorbing the outcome.
    ///
    /// A failed create may still have been committed by the store, for
    /// instance when the call timed out after the write. Before re-creating
    /// anything, the session's stored records are listed and their ids stamped
    /// into the view with [`RosterView::adopt`], so those rows are updated
    /// instead of created twice. If that listing fails, rows that would be
    /// created are reported failed again without a store call.
    ///
    /// Returns the retry's own result; fold it into `previous` with
    /// [`SyncResult::merge`] for a combined view.
    pub async fn retry(&self, view: &mut RosterView, previous: &SyncResult) -> SyncResult {
        let pending = view.pending(previous);
        let mut unconfirmed = Vec::new();
        let rows = if pending.iter().all(|row| row.record.is_persisted()) {
            pending
        } else {
            let listing = self
                .bounded(self.store.list_attendance(view.session_id()))
                .await;
            match listing {
                Ok(stored) => {
                    let adopted = view.adopt(&stored);
                    tracing::debug!(
                        session = view.session_id(),
                        adopted,
                        "matched stored records before retrying creates"
                    );
                    view.pending(previous)
                }
                Err(error) => {
                    tracing::warn!(
                        session = view.session_id(),
                        %error,
                        "cannot list attendance; retrying updates only"
                    );
                    let (rows, creates): (Vec<_>, Vec<_>) = pending
                        .into_iter()
                        .partition(|row| row.record.is_persisted());
                    unconfirmed = creates
                        .into_iter()
                        .map(|row| SyncFailure {
                            member_id: row.member.id,
                            error_message: format!("cannot confirm earlier create: {error}"),
                        })
                        .collect();
                    rows
                }
            }
        };

        let mut result = self.sync(&rows).await;
        view.absorb(&result);
        if !unconfirmed.is_empty() {
            result.failed.extend(unconfirmed);
            let slots: HashMap<&str, usize> = view
                .rows()
                .iter()
                .enumerate()
                .map(|(slot, row)| (row.member.id.as_str(), slot))
                .collect();
            result
                .failed
                .sort_by_key(|failure| slots.get(failure.member_id.as_str()).copied());
        }
        result
    }

    async fn persist(&self, record: &AttendanceRecord) -> Result<AttendanceRecord, StoreError> {
        match &record.record_id {
            Some(record_id) => {
                self.bounded(self.store.update_attendance(record_id, &record.fields()))
                    .await
            }
            None => self.bounded(self.store.create_attendance(&record.to_new())).await,
        }
    }

    /// Run one store call under [`SyncOptions::call_timeout`].
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.options.call_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout {
                millis: u64::try_from(self.options.call_timeout.as_millis()).unwrap_or(u64::MAX),
            })?
    }
}
