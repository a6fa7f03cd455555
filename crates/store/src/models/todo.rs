//! Todo entry (resource `todo`).

use serde::{Deserialize, Serialize};
use tristore_core::error::CoreError;
use tristore_core::types::RecordId;
use tristore_core::validation::{non_blank, require_all};

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: RecordId,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
}

impl Record for Todo {
    const RESOURCE: &'static str = "todo";

    type Create = CreateTodo;
    type Patch = UpdateTodo;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, input: CreateTodo) -> Result<Self, CoreError> {
        require_all(&[input.text.as_deref()], "Text is required.")?;
        Ok(Self {
            id,
            text: input.text.unwrap_or_default().trim().to_string(),
        })
    }

    fn apply_patch(&mut self, patch: UpdateTodo) {
        // Blank text would leave an entry with nothing to show.
        if let Some(text) = non_blank(patch.text) {
            self.text = text.trim().to_string();
        }
    }
}
