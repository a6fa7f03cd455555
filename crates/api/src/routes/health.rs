use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the front-end bundles are being served.
    pub frontends: bool,
    /// Current row count of every table.
    pub records: RecordCounts,
}

#[derive(Serialize)]
pub struct RecordCounts {
    pub data: usize,
    pub game: usize,
    pub todo: usize,
    pub series: usize,
}

/// GET /health -- returns service status and table sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stores = &state.stores;
    let records = RecordCounts {
        data: stores.items.len().await,
        game: stores.reviews.len().await,
        todo: stores.todos.len().await,
        series: stores.series.series_count().await,
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        frontends: state.config.static_dir.is_some(),
        records,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
