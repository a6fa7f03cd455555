//! Generic catalog item (resource `data`).

use serde::{Deserialize, Serialize};
use tristore_core::error::CoreError;
use tristore_core::types::RecordId;
use tristore_core::validation::require_all;

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Free-form category; omitted from the payload when never set.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// DTO for creating a new item. `name` and `description` are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// DTO for updating an item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Record for Item {
    const RESOURCE: &'static str = "data";

    type Create = CreateItem;
    type Patch = UpdateItem;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, input: CreateItem) -> Result<Self, CoreError> {
        require_all(
            &[input.name.as_deref(), input.description.as_deref()],
            "Name and description are required.",
        )?;
        Ok(Self {
            id,
            name: input.name.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            kind: input.kind,
        })
    }

    fn apply_patch(&mut self, patch: UpdateItem) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(kind) = patch.kind {
            self.kind = Some(kind);
        }
    }
}
