//! Handlers for `/touhou/characters/{id}`.
//!
//! Character ids are global, so these routes do not name the owning series.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tristore_store::models::series::{Character, UpdateCharacter};
use tristore_store::SeriesStore;

use crate::error::{AppError, AppResult};

const CHARACTER: &str = "Character";

/// GET /api/touhou/characters/{id}
pub async fn get_by_id(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
) -> AppResult<Json<Character>> {
    let character = store
        .get_character_by_id(&id)
        .await
        .ok_or(AppError::not_found(CHARACTER))?;
    Ok(Json(character))
}

/// PUT /api/touhou/characters/{id}
pub async fn update(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCharacter>, JsonRejection>,
) -> AppResult<Json<Character>> {
    let Json(patch) = payload?;
    let character = store
        .update_character(&id, patch)
        .await
        .ok_or(AppError::not_found(CHARACTER))?;
    Ok(Json(character))
}

/// DELETE /api/touhou/characters/{id}
pub async fn delete(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if store.remove_character(&id).await {
        tracing::info!(char_id = %id, "Character deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(CHARACTER))
    }
}
