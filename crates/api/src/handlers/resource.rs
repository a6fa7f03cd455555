//! Generic CRUD handlers shared by every flat resource (`data`, `game`, `todo`).
//!
//! Each handler is instantiated per record type; the matching store is pulled
//! out of [`AppState`](crate::state::AppState) through `FromRef`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tristore_store::{EntityStore, Record};

use crate::error::{AppError, AppResult};

/// GET /api/{resource}
pub async fn list<R>(State(store): State<Arc<EntityStore<R>>>) -> Json<Vec<R>>
where
    R: Record + Serialize,
{
    Json(store.get_all().await)
}

/// GET /api/{resource}/{id}
pub async fn get_by_id<R>(
    State(store): State<Arc<EntityStore<R>>>,
    Path(id): Path<String>,
) -> AppResult<Json<R>>
where
    R: Record + Serialize,
{
    let record = store
        .get_by_id(&id)
        .await
        .ok_or(AppError::not_found(R::RESOURCE))?;
    Ok(Json(record))
}

/// POST /api/{resource}
pub async fn create<R>(
    State(store): State<Arc<EntityStore<R>>>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> AppResult<(StatusCode, Json<R>)>
where
    R: Record + Serialize,
    R::Create: serde::de::DeserializeOwned,
{
    let Json(input) = payload?;
    let record = store.create(input).await?;
    tracing::info!(resource = R::RESOURCE, id = record.id(), "Record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/{resource}/{id}
pub async fn update<R>(
    State(store): State<Arc<EntityStore<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> AppResult<Json<R>>
where
    R: Record + Serialize,
    R::Patch: serde::de::DeserializeOwned,
{
    let Json(patch) = payload?;
    let record = store
        .update(&id, patch)
        .await
        .ok_or(AppError::not_found(R::RESOURCE))?;
    Ok(Json(record))
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R>(
    State(store): State<Arc<EntityStore<R>>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode>
where
    R: Record + Serialize,
{
    if store.remove(&id).await {
        tracing::info!(resource = R::RESOURCE, %id, "Record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(R::RESOURCE))
    }
}
