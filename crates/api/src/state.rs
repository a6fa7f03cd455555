use std::sync::Arc;

use axum::extract::FromRef;
use tristore_store::models::item::Item;
use tristore_store::models::review::Review;
use tristore_store::models::todo::Todo;
use tristore_store::{EntityStore, SeriesStore, Stores};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory tables, seeded at startup.
    pub stores: Stores,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

// Lets the generic CRUD handlers extract exactly the store they serve.

impl FromRef<AppState> for Arc<EntityStore<Item>> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.stores.items)
    }
}

impl FromRef<AppState> for Arc<EntityStore<Review>> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.stores.reviews)
    }
}

impl FromRef<AppState> for Arc<EntityStore<Todo>> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.stores.todos)
    }
}

impl FromRef<AppState> for Arc<SeriesStore> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.stores.series)
    }
}
