//! Field-level edits of attendance records.
//!
//! A `RecordPatch` assigns one mutable field. Every optional field can be set
//! or cleared independently; an empty raw value clears.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AttendanceRecord;
use crate::enums::{PresenceState, RecordField};
use crate::errors::CoreError;

/// One field assignment on an attendance record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum RecordPatch {
    Presence(PresenceState),
    Note(Option<String>),
    AbsenceTitle(Option<String>),
    AbsenceDescription(Option<String>),
    Behavior(Option<i32>),
    Technique(Option<i32>),
    Attitude(Option<i32>),
}

impl RecordPatch {
    /// Build a patch from a field and its raw textual value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a score value is not an integer.
    pub fn parse(field: RecordField, raw: &str) -> Result<Self, CoreError> {
        let text = non_empty(raw);
        let patch = match field {
            RecordField::Presence => Self::Presence(PresenceState::coerce(raw)),
            RecordField::Note => Self::Note(text),
            RecordField::AbsenceTitle => Self::AbsenceTitle(text),
            RecordField::AbsenceDescription => Self::AbsenceDescription(text),
            RecordField::Behavior => Self::Behavior(parse_score(field, text.as_deref())?),
            RecordField::Technique => Self::Technique(parse_score(field, text.as_deref())?),
            RecordField::Attitude => Self::Attitude(parse_score(field, text.as_deref())?),
        };
        Ok(patch)
    }

    /// Parse a `field=value` assignment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a missing `=`, an unknown field
    /// name, or a non-integer score.
    pub fn parse_assignment(assignment: &str) -> Result<Self, CoreError> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            CoreError::Validation(format!("expected field=value, got '{assignment}'"))
        })?;
        let field = RecordField::from_name(name)
            .ok_or_else(|| CoreError::Validation(format!("unknown attendance field '{name}'")))?;
        Self::parse(field, raw)
    }

    #[must_use]
    pub const fn field(&self) -> RecordField {
        match self {
            Self::Presence(_) => RecordField::Presence,
            Self::Note(_) => RecordField::Note,
            Self::AbsenceTitle(_) => RecordField::AbsenceTitle,
            Self::AbsenceDescription(_) => RecordField::AbsenceDescription,
            Self::Behavior(_) => RecordField::Behavior,
            Self::Technique(_) => RecordField::Technique,
            Self::Attitude(_) => RecordField::Attitude,
        }
    }
}

impl AttendanceRecord {
    /// Apply a single field assignment in place.
    pub fn apply(&mut self, patch: RecordPatch) {
        match patch {
            RecordPatch::Presence(presence) => self.presence = presence,
            RecordPatch::Note(note) => self.note = note,
            RecordPatch::AbsenceTitle(title) => self.absence_title = title,
            RecordPatch::AbsenceDescription(description) => {
                self.absence_description = description;
            }
            RecordPatch::Behavior(score) => self.behavior_score = score,
            RecordPatch::Technique(score) => self.technique_score = score,
            RecordPatch::Attitude(score) => self.attitude_score = score,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_score(field: RecordField, text: Option<&str>) -> Result<Option<i32>, CoreError> {
    text.map(|value| {
        value
            .parse::<i32>()
            .map_err(|_| CoreError::Validation(format!("{field} must be an integer, got '{value}'")))
    })
    .transpose()
}
