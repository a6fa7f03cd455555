//! Handlers for `/touhou/series`.
//!
//! Deleting a series also deletes every character it owns.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tristore_store::models::series::{
    Character, CreateCharacter, CreateSeries, Series, SeriesSummary, UpdateSeries,
};
use tristore_store::SeriesStore;

use crate::error::{AppError, AppResult};

const SERIES: &str = "Series";

/// GET /api/touhou/series
pub async fn list(State(store): State<Arc<SeriesStore>>) -> Json<Vec<SeriesSummary>> {
    Json(store.get_all_series_summaries().await)
}

/// GET /api/touhou/series/{id}
pub async fn get_by_id(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
) -> AppResult<Json<Series>> {
    let series = store
        .get_series(&id)
        .await
        .ok_or(AppError::not_found(SERIES))?;
    Ok(Json(series))
}

/// POST /api/touhou/series
pub async fn create(
    State(store): State<Arc<SeriesStore>>,
    payload: Result<Json<CreateSeries>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Series>)> {
    let Json(input) = payload?;
    let series = store.create_series(input).await?;
    tracing::info!(series_id = series.series_id, title = %series.title, "Series created");
    Ok((StatusCode::CREATED, Json(series)))
}

/// PUT /api/touhou/series/{id}
///
/// Only `title` and `short` are applied; the character list is untouched.
pub async fn update(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSeries>, JsonRejection>,
) -> AppResult<Json<Series>> {
    let Json(patch) = payload?;
    let series = store
        .update_series(&id, patch)
        .await
        .ok_or(AppError::not_found(SERIES))?;
    Ok(Json(series))
}

/// DELETE /api/touhou/series/{id}
pub async fn delete(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if store.remove_series(&id).await {
        tracing::info!(series_id = %id, "Series deleted with its characters");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(SERIES))
    }
}

// ---------------------------------------------------------------------------
// Characters sub-resource
// ---------------------------------------------------------------------------

/// GET /api/touhou/series/{id}/characters
///
/// An existing series with no characters yields `[]`; a missing one 404s.
pub async fn list_characters(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = store
        .get_characters_of_series(&id)
        .await
        .ok_or(AppError::not_found(SERIES))?;
    Ok(Json(characters))
}

/// POST /api/touhou/series/{id}/characters
///
/// A missing series is reported before anything is said about the body.
pub async fn create_character(
    State(store): State<Arc<SeriesStore>>,
    Path(id): Path<String>,
    payload: Result<Json<CreateCharacter>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Character>)> {
    if !store.contains_series(&id).await {
        return Err(AppError::not_found(SERIES));
    }
    let Json(input) = payload?;
    let character = store.create_character(&id, input).await?;
    tracing::info!(series_id = %id, char_id = character.id, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}
