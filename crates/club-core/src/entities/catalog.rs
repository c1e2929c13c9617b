use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An exercise that can be assigned to a session program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
}
