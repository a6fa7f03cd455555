//! Game review (resource `game`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tristore_core::error::CoreError;
use tristore_core::types::RecordId;
use tristore_core::validation::require_all;

use crate::table::Record;

/// Chart shown when a review is created without one.
pub const DEFAULT_CHART_IMAGE: &str = "default_chart.png";

/// Criterion name → score, in the order the client supplied them.
///
/// Scores are kept verbatim; the 1..=5 range is enforced by the front-end.
/// A criterion left blank in the form arrives as `null` and stays `null`.
pub type Criteria = IndexMap<String, Option<i64>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    pub title: String,
    pub comment: String,
    pub chart_image: String,
    pub criteria: Criteria,
}

/// DTO for creating a review. Only `title` is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub chart_image: Option<String>,
    pub criteria: Option<Criteria>,
}

/// DTO for updating a review. `criteria` replaces the whole map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub chart_image: Option<String>,
    pub criteria: Option<Criteria>,
}

impl Record for Review {
    const RESOURCE: &'static str = "game";

    type Create = CreateReview;
    type Patch = UpdateReview;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create(id: RecordId, input: CreateReview) -> Result<Self, CoreError> {
        require_all(&[input.title.as_deref()], "Title is required.")?;
        Ok(Self {
            id,
            title: input.title.unwrap_or_default(),
            comment: input.comment.unwrap_or_default(),
            chart_image: input
                .chart_image
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CHART_IMAGE.to_string()),
            criteria: input.criteria.unwrap_or_default(),
        })
    }

    fn apply_patch(&mut self, patch: UpdateReview) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
        if let Some(chart_image) = patch.chart_image {
            self.chart_image = chart_image;
        }
        if let Some(criteria) = patch.criteria {
            self.criteria = criteria;
        }
    }
}
