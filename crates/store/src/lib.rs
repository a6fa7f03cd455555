//! In-memory record stores.
//!
//! Every table lives behind its own `RwLock`, so a mutation is a single
//! atomic read-modify-write even when handlers run on many threads. Nothing
//! here performs I/O and nothing survives a restart.

pub mod entity_store;
pub mod models;
pub mod seed;
pub mod series_store;
pub mod table;

use std::sync::Arc;

pub use entity_store::EntityStore;
pub use series_store::SeriesStore;
pub use table::{IdCounter, Record};

use models::item::Item;
use models::review::Review;
use models::todo::Todo;

/// Optional lower bounds for id counters, applied on top of `max(seed) + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdFloors {
    pub series: Option<tristore_core::types::RecordId>,
    pub character: Option<tristore_core::types::RecordId>,
}

/// All process-wide tables, seeded with fixture data.
///
/// Cheap to clone; each store is shared behind an `Arc`.
#[derive(Clone)]
pub struct Stores {
    pub items: Arc<EntityStore<Item>>,
    pub reviews: Arc<EntityStore<Review>>,
    pub todos: Arc<EntityStore<Todo>>,
    pub series: Arc<SeriesStore>,
}

impl Stores {
    /// Build every store from the bundled fixtures.
    pub fn seeded(floors: IdFloors) -> Self {
        let stores = Self {
            items: Arc::new(EntityStore::new(seed::items())),
            reviews: Arc::new(EntityStore::new(seed::reviews())),
            todos: Arc::new(EntityStore::new(seed::todos())),
            series: Arc::new(SeriesStore::new(seed::series(), floors)),
        };
        tracing::debug!(?floors, "Seeded in-memory stores");
        stores
    }
}
