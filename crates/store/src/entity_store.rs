use tokio::sync::RwLock;
use tristore_core::error::CoreError;
use tristore_core::types::parse_id;

use crate::table::{Record, Table};

/// A lock-guarded [`Table`] shared across request handlers.
///
/// Ids arrive as raw path strings; anything that does not parse as an
/// integer behaves exactly like an id with no matching record.
pub struct EntityStore<R: Record> {
    table: RwLock<Table<R>>,
}

impl<R: Record> EntityStore<R> {
    pub fn new(seed: Vec<R>) -> Self {
        Self {
            table: RwLock::new(Table::new(seed)),
        }
    }

    /// All records in insertion order.
    pub async fn get_all(&self) -> Vec<R> {
        self.table.read().await.all()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<R> {
        let id = parse_id(id)?;
        self.table.read().await.get(id).cloned()
    }

    /// Validate and insert a new record under the next id.
    pub async fn create(&self, input: R::Create) -> Result<R, CoreError> {
        self.table.write().await.insert(input)
    }

    /// Merge `patch` over the stored record. `None` if it does not exist.
    pub async fn update(&self, id: &str, patch: R::Patch) -> Option<R> {
        let id = parse_id(id)?;
        self.table.write().await.update(id, patch)
    }

    /// Returns `true` iff a record was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let Some(id) = parse_id(id) else {
            return false;
        };
        self.table.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use tokio::task::JoinSet;

    use super::*;
    use crate::models::item::{CreateItem, UpdateItem};
    use crate::models::review::UpdateReview;
    use crate::seed;

    fn new_item(name: &str, description: &str) -> CreateItem {
        CreateItem {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            kind: None,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(EntityStore::new(seed::items()));
        let mut tasks = JoinSet::new();
        for n in 0..64 {
            let store = Arc::clone(&store);
            tasks.spawn(async move {
                store
                    .create(new_item(&format!("item {n}"), "d"))
                    .await
                    .unwrap()
                    .id
            });
        }

        let mut ids = HashSet::new();
        while let Some(id) = tasks.join_next().await {
            assert!(ids.insert(id.unwrap()), "duplicate id handed out");
        }
        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().min(), Some(&4));
        assert_eq!(ids.iter().max(), Some(&67));
        assert_eq!(store.len().await, 3 + 64);
    }

    #[tokio::test]
    async fn create_after_seed_starts_above_highest_id() {
        let store = EntityStore::new(seed::items());
        let item = store.create(new_item("x", "y")).await.unwrap();
        assert_eq!(item.id, 4);
        assert_eq!(item.kind, None);
    }

    #[tokio::test]
    async fn created_ids_strictly_increase() {
        let store = EntityStore::new(seed::items());
        let mut last = 3;
        for n in 0..5 {
            let item = store.create(new_item(&format!("n{n}"), "d")).await.unwrap();
            assert!(item.id > last);
            last = item.id;
        }
    }

    #[tokio::test]
    async fn create_without_description_is_a_validation_error() {
        let store = EntityStore::new(seed::items());
        let input = CreateItem {
            name: Some("x".into()),
            description: None,
            kind: None,
        };
        let err = store.create(input).await.unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Name and description are required.");
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let store = EntityStore::new(seed::items());
        assert!(store.get_by_id("abc").await.is_none());
        assert!(store.update("abc", UpdateItem::default()).await.is_none());
        assert!(!store.remove("abc").await);
    }

    #[tokio::test]
    async fn remove_then_get_is_not_found() {
        let store = EntityStore::new(seed::items());
        assert!(store.remove("2").await);
        assert!(store.get_by_id("2").await.is_none());
        assert!(!store.remove("2").await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn empty_patch_leaves_record_unchanged() {
        let store = EntityStore::new(seed::items());
        let before = store.get_by_id("1").await.unwrap();
        let after = store.update("1", UpdateItem::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = EntityStore::new(seed::items());
        let before = store.get_by_id("1").await.unwrap();
        let patch = UpdateItem {
            name: Some("renamed".into()),
            ..Default::default()
        };
        let after = store.update("1", patch).await.unwrap();
        assert_eq!(after.id, 1);
        assert_eq!(after.name, "renamed");
        assert_eq!(after.description, before.description);
        assert_eq!(after.kind, before.kind);
    }

    #[tokio::test]
    async fn review_scores_are_stored_verbatim() {
        let store = EntityStore::new(seed::reviews());
        let mut criteria = indexmap::IndexMap::new();
        criteria.insert("story".to_string(), Some(6));
        let patch = UpdateReview {
            criteria: Some(criteria),
            ..Default::default()
        };
        let review = store.update("1", patch).await.unwrap();
        assert_eq!(review.criteria["story"], Some(6));
    }
}
