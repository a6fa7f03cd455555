pub mod health;
pub mod resource;
pub mod touhou;

use axum::Router;
use tristore_store::models::item::Item;
use tristore_store::models::review::Review;
use tristore_store::models::todo::Todo;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /data                                 list, create        (generic items)
/// /data/{id}                            get, update, delete
///
/// /game                                 list, create        (game reviews)
/// /game/{id}                            get, update, delete
///
/// /todo                                 list, create        (todo entries)
/// /todo/{id}                            get, update, delete
///
/// /touhou/series                        summaries, create
/// /touhou/series/{id}                   get, update, delete (cascade)
/// /touhou/series/{id}/characters        list, create
/// /touhou/characters/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/data", resource::router::<Item>())
        .nest("/game", resource::router::<Review>())
        .nest("/todo", resource::router::<Todo>())
        .nest("/touhou", touhou::router())
}
