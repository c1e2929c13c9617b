use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A person belonging to the group associated with a session.
///
/// Owned by the roster collaborator; never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
}
