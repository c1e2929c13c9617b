use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Member;
use crate::enums::PresenceState;

/// One attendance row for a (session, member) pair.
///
/// `record_id` is `Some` iff the record already exists in the store; it is the
/// create-vs-update discriminator when the row is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub record_id: Option<String>,
    pub session_id: String,
    pub member_id: String,
    pub presence: PresenceState,
    pub note: Option<String>,
    pub absence_title: Option<String>,
    pub absence_description: Option<String>,
    pub behavior_score: Option<i32>,
    pub technique_score: Option<i32>,
    pub attitude_score: Option<i32>,
}

impl AttendanceRecord {
    /// A not-yet-persisted record with every optional field empty.
    #[must_use]
    pub fn draft(session_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            record_id: None,
            session_id: session_id.into(),
            member_id: member_id.into(),
            presence: PresenceState::Present,
            note: None,
            absence_title: None,
            absence_description: None,
            behavior_score: None,
            technique_score: None,
            attitude_score: None,
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.record_id.is_some()
    }

    /// Snapshot of the mutable fields, as sent on update.
    #[must_use]
    pub fn fields(&self) -> AttendanceFields {
        AttendanceFields {
            presence: self.presence,
            note: self.note.clone(),
            absence_title: self.absence_title.clone(),
            absence_description: self.absence_description.clone(),
            behavior_score: self.behavior_score,
            technique_score: self.technique_score,
            attitude_score: self.attitude_score,
        }
    }

    /// Create payload for this record.
    #[must_use]
    pub fn to_new(&self) -> NewAttendance {
        NewAttendance {
            session_id: self.session_id.clone(),
            member_id: self.member_id.clone(),
            fields: self.fields(),
        }
    }
}

/// The mutable field set of an attendance record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttendanceFields {
    pub presence: PresenceState,
    pub note: Option<String>,
    pub absence_title: Option<String>,
    pub absence_description: Option<String>,
    pub behavior_score: Option<i32>,
    pub technique_score: Option<i32>,
    pub attitude_score: Option<i32>,
}

/// Create payload: the mutable fields plus the (session, member) key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAttendance {
    pub session_id: String,
    pub member_id: String,
    #[serde(flatten)]
    pub fields: AttendanceFields,
}

/// A member paired with their (possibly synthesized) attendance record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReconciledRow {
    pub member: Member,
    pub record: AttendanceRecord,
}
