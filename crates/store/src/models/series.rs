//! Series and the characters they own (resource family `touhou`).

use serde::{Deserialize, Serialize};
use tristore_core::error::CoreError;
use tristore_core::types::RecordId;
use tristore_core::validation::{non_blank, require_all};

/// Portrait used when a character is created without one.
pub const DEFAULT_CHARACTER_IMAGE: &str = "default.png";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_id: RecordId,
    pub title: String,
    pub short: String,
    pub characters: Vec<Character>,
}

/// Listing view of a series. `character_count` is computed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub series_id: RecordId,
    pub title: String,
    pub short: String,
    pub character_count: usize,
}

impl From<&Series> for SeriesSummary {
    fn from(series: &Series) -> Self {
        Self {
            series_id: series.series_id,
            title: series.title.clone(),
            short: series.short.clone(),
            character_count: series.characters.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: RecordId,
    pub name: String,
    pub ability: String,
    pub image: String,
}

/// DTO for creating a series. Starts with no characters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSeries {
    pub title: Option<String>,
    pub short: Option<String>,
}

/// DTO for updating a series. Empty strings leave the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeries {
    pub title: Option<String>,
    pub short: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub ability: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub ability: Option<String>,
    pub image: Option<String>,
}

impl Series {
    pub(crate) fn from_create(series_id: RecordId, input: CreateSeries) -> Result<Self, CoreError> {
        require_all(&[input.title.as_deref()], "Title is required.")?;
        Ok(Self {
            series_id,
            title: input.title.unwrap_or_default(),
            short: input.short.unwrap_or_default(),
            characters: Vec::new(),
        })
    }

    /// Only `title` and `short` are mutable; the character list never is.
    pub(crate) fn apply_patch(&mut self, patch: UpdateSeries) {
        if let Some(title) = non_blank(patch.title) {
            self.title = title;
        }
        if let Some(short) = non_blank(patch.short) {
            self.short = short;
        }
    }
}

impl Character {
    pub(crate) fn from_create(id: RecordId, input: CreateCharacter) -> Result<Self, CoreError> {
        require_all(&[input.name.as_deref()], "Name is required.")?;
        Ok(Self {
            id,
            name: input.name.unwrap_or_default(),
            ability: input.ability.unwrap_or_default(),
            image: input
                .image
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| DEFAULT_CHARACTER_IMAGE.to_string()),
        })
    }

    pub(crate) fn apply_patch(&mut self, patch: UpdateCharacter) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(ability) = patch.ability {
            self.ability = ability;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}
