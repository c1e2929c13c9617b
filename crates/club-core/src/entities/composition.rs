use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// One exercise assignment within a session's program.
///
/// `position` orders entries for display only. It is not unique and may have
/// gaps; both are legal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompositionEntry {
    pub id: String,
    pub session_id: String,
    pub item_id: String,
    pub duration_minutes: u32,
    pub phase: Option<String>,
    pub position: Option<i32>,
    /// Catalog row embedded by the store, when it sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<CatalogItem>,
}

impl CompositionEntry {
    /// Display label: the catalog name when known, the raw item id otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.item
            .as_ref()
            .map_or(self.item_id.as_str(), |item| item.name.as_str())
    }
}

/// Create payload for a composition entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCompositionEntry {
    pub session_id: String,
    pub item_id: String,
    pub duration_minutes: u32,
    pub phase: Option<String>,
    pub position: Option<i32>,
}
