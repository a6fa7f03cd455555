//! Uniform CRUD route table, instantiated once per flat resource.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tristore_store::{EntityStore, Record};

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/{resource}`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router<R>() -> Router<AppState>
where
    R: Record + Serialize,
    R::Create: DeserializeOwned,
    R::Patch: DeserializeOwned,
    Arc<EntityStore<R>>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(resource::list::<R>).post(resource::create::<R>))
        .route(
            "/{id}",
            get(resource::get_by_id::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
