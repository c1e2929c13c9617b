//! Presence, record-field, and composition-entry enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `EntryState` carries its state machine as `allowed_next_states()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PresenceState
// ---------------------------------------------------------------------------

/// Whether a member attended a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PresenceState {
    #[default]
    Present,
    Absent,
}

impl PresenceState {
    /// Literals the backend and the CLI use for "absent".
    const ABSENT_LITERALS: [&'static str; 2] = ["absent", "ausente"];

    /// Coerce a raw presence value into one of the two legal states.
    ///
    /// Only an absent literal yields `Absent`. Anything else, including empty
    /// and unknown values, is `Present`.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();
        if Self::ABSENT_LITERALS
            .iter()
            .any(|literal| raw.eq_ignore_ascii_case(literal))
        {
            Self::Absent
        } else {
            Self::Present
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordField
// ---------------------------------------------------------------------------

/// The mutable fields of an attendance record, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Presence,
    Note,
    AbsenceTitle,
    AbsenceDescription,
    Behavior,
    Technique,
    Attitude,
}

impl RecordField {
    pub const ALL: [Self; 7] = [
        Self::Presence,
        Self::Note,
        Self::AbsenceTitle,
        Self::AbsenceDescription,
        Self::Behavior,
        Self::Technique,
        Self::Attitude,
    ];

    /// Resolve a field by name. Hyphens are accepted in place of underscores.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
    }

    /// Score fields hold an integer; the rest hold text or presence.
    #[must_use]
    pub const fn is_score(self) -> bool {
        matches!(self, Self::Behavior | Self::Technique | Self::Attitude)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Note => "note",
            Self::AbsenceTitle => "absence_title",
            Self::AbsenceDescription => "absence_description",
            Self::Behavior => "behavior",
            Self::Technique => "technique",
            Self::Attitude => "attitude",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntryState
// ---------------------------------------------------------------------------

/// Lifecycle of a composition entry.
///
/// ```text
/// proposed → persisted → removed
/// ```
///
/// `proposed` only exists while an append awaits the store. An entry the store
/// refuses never leaves `proposed`; it is dropped rather than retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    Proposed,
    Persisted,
    Removed,
}

impl EntryState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Proposed => &[Self::Persisted],
            Self::Persisted => &[Self::Removed],
            Self::Removed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Persisted => "persisted",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
