//! Route definitions for the series/character hierarchy.

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, series};
use crate::state::AppState;

/// Routes mounted at `/touhou`.
///
/// ```text
/// GET    /series                      -> series::list
/// POST   /series                      -> series::create
/// GET    /series/{id}                 -> series::get_by_id
/// PUT    /series/{id}                 -> series::update
/// DELETE /series/{id}                 -> series::delete
///
/// GET    /series/{id}/characters      -> series::list_characters
/// POST   /series/{id}/characters      -> series::create_character
///
/// GET    /characters/{id}             -> character::get_by_id
/// PUT    /characters/{id}             -> character::update
/// DELETE /characters/{id}             -> character::delete
/// ```
pub fn router() -> Router<AppState> {
    let series_routes = Router::new()
        .route("/", get(series::list).post(series::create))
        .route(
            "/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route(
            "/{id}/characters",
            get(series::list_characters).post(series::create_character),
        );

    let character_routes = Router::new().route(
        "/{id}",
        get(character::get_by_id)
            .put(character::update)
            .delete(character::delete),
    );

    Router::new()
        .nest("/series", series_routes)
        .nest("/characters", character_routes)
}
