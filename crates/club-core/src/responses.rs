//! Result documents returned by engine operations and printed by `club`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AttendanceRecord, CompositionEntry, ReconciledRow, TrainingSession};

/// A row that could not be persisted, with the store's reason.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncFailure {
    pub member_id: String,
    pub error_message: String,
}

/// Per-member outcome of a batch persistence run.
///
/// Both lists follow the order of the rows handed to the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncResult {
    pub succeeded: Vec<String>,
    pub failed: Vec<SyncFailure>,
    /// Records as returned by the store for every succeeded row.
    #[serde(default, skip_serializing)]
    pub persisted: Vec<AttendanceRecord>,
}

impl SyncResult {
    /// True when no row failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Member ids of the rows that need a retry.
    #[must_use]
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.member_id.as_str()).collect()
    }

    /// Fold a retry run into this result.
    ///
    /// Members that succeed in `retry` leave the failed list; members that fail
    /// again keep only their latest error.
    pub fn merge(&mut self, retry: Self) {
        for member_id in &retry.succeeded {
            self.failed.retain(|f| &f.member_id != member_id);
            if !self.succeeded.contains(member_id) {
                self.succeeded.push(member_id.clone());
            }
        }
        for failure in retry.failed {
            self.failed.retain(|f| f.member_id != failure.member_id);
            self.failed.push(failure);
        }
        for record in retry.persisted {
            self.persisted.retain(|r| r.member_id != record.member_id);
            self.persisted.push(record);
        }
    }
}

/// Response from `club attendance show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceSheet {
    pub session: TrainingSession,
    pub rows: Vec<ReconciledRow>,
}

/// Response from `club program list|add|remove`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgramSummary {
    pub session_id: String,
    pub total_minutes: u64,
    pub entries: Vec<CompositionEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failure(member_id: &str, message: &str) -> SyncFailure {
        SyncFailure {
            member_id: member_id.into(),
            error_message: message.into(),
        }
    }

    #[test]
    fn merge_moves_retried_members_to_succeeded() {
        let mut first = SyncResult {
            succeeded: vec!["usr-1".into(), "usr-3".into()],
            failed: vec![failure("usr-2", "timeout")],
            persisted: Vec::new(),
        };
        let retry = SyncResult {
            succeeded: vec!["usr-2".into()],
            failed: Vec::new(),
            persisted: Vec::new(),
        };

        first.merge(retry);

        assert!(first.is_complete());
        assert_eq!(first.succeeded, vec!["usr-1", "usr-3", "usr-2"]);
    }

    #[test]
    fn merge_keeps_latest_failure() {
        let mut first = SyncResult {
            succeeded: Vec::new(),
            failed: vec![failure("usr-2", "timeout")],
            persisted: Vec::new(),
        };
        first.merge(SyncResult {
            succeeded: Vec::new(),
            failed: vec![failure("usr-2", "rejected")],
            persisted: Vec::new(),
        });

        assert_eq!(first.failed, vec![failure("usr-2", "rejected")]);
        assert_eq!(first.failed_ids(), vec!["usr-2"]);
    }

    #[test]
    fn persisted_records_are_not_printed() {
        let result = SyncResult {
            succeeded: vec!["usr-1".into()],
            failed: Vec::new(),
            persisted: vec![AttendanceRecord::draft("trn-1", "usr-1")],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("persisted").is_none());
        assert_eq!(json["succeeded"][0], "usr-1");
    }
}
