//! Series/character store with cascade delete.
//!
//! Characters are embedded in their owning series. A flat
//! `character id → series id` index answers global character lookups; every
//! mutation updates the series map and the index under the same write lock,
//! so the two can never disagree.

use std::collections::HashMap;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tristore_core::error::CoreError;
use tristore_core::types::{parse_id, RecordId};

use crate::models::series::{
    Character, CreateCharacter, CreateSeries, Series, SeriesSummary, UpdateCharacter,
    UpdateSeries,
};
use crate::table::IdCounter;
use crate::IdFloors;

#[derive(Debug)]
struct SeriesTable {
    series: IndexMap<RecordId, Series>,
    owners: HashMap<RecordId, RecordId>,
    series_ids: IdCounter,
    character_ids: IdCounter,
}

impl SeriesTable {
    fn new(seed: Vec<Series>, floors: IdFloors) -> Self {
        let series_ids =
            IdCounter::starting_after(seed.iter().map(|s| s.series_id), floors.series);
        let character_ids = IdCounter::starting_after(
            seed.iter().flat_map(|s| s.characters.iter().map(|c| c.id)),
            floors.character,
        );
        let owners = seed
            .iter()
            .flat_map(|s| s.characters.iter().map(move |c| (c.id, s.series_id)))
            .collect();
        let series = seed.into_iter().map(|s| (s.series_id, s)).collect();
        Self {
            series,
            owners,
            series_ids,
            character_ids,
        }
    }

    /// Resolve a character to `(series id, position in that series)`.
    fn locate(&self, char_id: RecordId) -> Option<(RecordId, usize)> {
        let series_id = *self.owners.get(&char_id)?;
        let position = self
            .series
            .get(&series_id)?
            .characters
            .iter()
            .position(|c| c.id == char_id)?;
        Some((series_id, position))
    }

    fn character_mut(&mut self, char_id: RecordId) -> Option<&mut Character> {
        let (series_id, position) = self.locate(char_id)?;
        self.series
            .get_mut(&series_id)
            .and_then(|s| s.characters.get_mut(position))
    }

    fn create_series(&mut self, input: CreateSeries) -> Result<Series, CoreError> {
        let series = Series::from_create(self.series_ids.peek(), input)?;
        self.series_ids.allocate();
        self.series.insert(series.series_id, series.clone());
        Ok(series)
    }

    fn remove_series(&mut self, series_id: RecordId) -> Option<Series> {
        let removed = self.series.shift_remove(&series_id)?;
        for character in &removed.characters {
            self.owners.remove(&character.id);
        }
        Some(removed)
    }

    fn create_character(
        &mut self,
        series_id: RecordId,
        input: CreateCharacter,
    ) -> Result<Character, CoreError> {
        let series = self
            .series
            .get_mut(&series_id)
            .ok_or(CoreError::NotFound { entity: "Series" })?;
        let character = Character::from_create(self.character_ids.peek(), input)?;
        self.character_ids.allocate();
        series.characters.push(character.clone());
        self.owners.insert(character.id, series_id);
        Ok(character)
    }

    fn remove_character(&mut self, char_id: RecordId) -> bool {
        let Some((series_id, position)) = self.locate(char_id) else {
            return false;
        };
        if let Some(series) = self.series.get_mut(&series_id) {
            series.characters.remove(position);
        }
        self.owners.remove(&char_id);
        true
    }
}

/// Lock-guarded series table shared across request handlers.
pub struct SeriesStore {
    table: RwLock<SeriesTable>,
}

impl SeriesStore {
    /// Seed the store. Counters start past the largest seeded ids, raised to
    /// the configured floors.
    pub fn new(seed: Vec<Series>, floors: IdFloors) -> Self {
        Self {
            table: RwLock::new(SeriesTable::new(seed, floors)),
        }
    }

    pub async fn get_all_series_summaries(&self) -> Vec<SeriesSummary> {
        self.table
            .read()
            .await
            .series
            .values()
            .map(SeriesSummary::from)
            .collect()
    }

    pub async fn get_series(&self, series_id: &str) -> Option<Series> {
        let series_id = parse_id(series_id)?;
        self.table.read().await.series.get(&series_id).cloned()
    }

    pub async fn contains_series(&self, series_id: &str) -> bool {
        match parse_id(series_id) {
            Some(series_id) => self.table.read().await.series.contains_key(&series_id),
            None => false,
        }
    }

    /// `Some(vec![])` for an empty series, `None` when the series is missing.
    pub async fn get_characters_of_series(&self, series_id: &str) -> Option<Vec<Character>> {
        let series_id = parse_id(series_id)?;
        self.table
            .read()
            .await
            .series
            .get(&series_id)
            .map(|s| s.characters.clone())
    }

    pub async fn get_character_by_id(&self, char_id: &str) -> Option<Character> {
        let char_id = parse_id(char_id)?;
        let table = self.table.read().await;
        let (series_id, position) = table.locate(char_id)?;
        table
            .series
            .get(&series_id)
            .and_then(|s| s.characters.get(position))
            .cloned()
    }

    pub async fn create_series(&self, input: CreateSeries) -> Result<Series, CoreError> {
        self.table.write().await.create_series(input)
    }

    pub async fn update_series(&self, series_id: &str, patch: UpdateSeries) -> Option<Series> {
        let series_id = parse_id(series_id)?;
        let mut table = self.table.write().await;
        let series = table.series.get_mut(&series_id)?;
        series.apply_patch(patch);
        Some(series.clone())
    }

    /// Remove a series and, with it, every character it owns.
    pub async fn remove_series(&self, series_id: &str) -> bool {
        let Some(series_id) = parse_id(series_id) else {
            return false;
        };
        match self.table.write().await.remove_series(series_id) {
            Some(removed) => {
                tracing::debug!(
                    series_id,
                    purged = removed.characters.len(),
                    "Purged character index entries"
                );
                true
            }
            None => false,
        }
    }

    /// Fails with `NotFound` for an unknown (or unparseable) series id, and
    /// with `Validation` when the payload lacks a name.
    pub async fn create_character(
        &self,
        series_id: &str,
        input: CreateCharacter,
    ) -> Result<Character, CoreError> {
        let series_id = parse_id(series_id).ok_or(CoreError::NotFound { entity: "Series" })?;
        self.table
            .write()
            .await
            .create_character(series_id, input)
    }

    pub async fn update_character(
        &self,
        char_id: &str,
        patch: UpdateCharacter,
    ) -> Option<Character> {
        let char_id = parse_id(char_id)?;
        let mut table = self.table.write().await;
        let character = table.character_mut(char_id)?;
        character.apply_patch(patch);
        Some(character.clone())
    }

    /// Remove a character from its owning series. The series itself stays.
    pub async fn remove_character(&self, char_id: &str) -> bool {
        match parse_id(char_id) {
            Some(char_id) => self.table.write().await.remove_character(char_id),
            None => false,
        }
    }

    pub async fn series_count(&self) -> usize {
        self.table.read().await.series.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use tokio::task::JoinSet;

    use super::*;
    use crate::seed;

    fn seeded() -> SeriesStore {
        SeriesStore::new(seed::series(), IdFloors::default())
    }

    fn new_series(title: &str, short: &str) -> CreateSeries {
        CreateSeries {
            title: Some(title.to_string()),
            short: Some(short.to_string()),
        }
    }

    fn new_character(name: &str) -> CreateCharacter {
        CreateCharacter {
            name: Some(name.to_string()),
            ability: Some("B".to_string()),
            image: None,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_character_creates_share_one_counter() {
        let store = Arc::new(seeded());
        let mut tasks = JoinSet::new();
        for n in 0..40 {
            let store = Arc::clone(&store);
            let series_id = if n % 2 == 0 { "1" } else { "2" };
            tasks.spawn(async move {
                let character = store
                    .create_character(series_id, new_character(&format!("c{n}")))
                    .await
                    .unwrap();
                (series_id, character.id)
            });
        }

        let mut ids = HashSet::new();
        while let Some(joined) = tasks.join_next().await {
            let (series_id, char_id) = joined.unwrap();
            assert!(ids.insert(char_id), "duplicate character id handed out");
            let owned = store.get_characters_of_series(series_id).await.unwrap();
            assert!(owned.iter().any(|c| c.id == char_id));
        }
        assert_eq!(ids.len(), 40);
        assert_eq!(ids.iter().min(), Some(&209));
        assert_eq!(ids.iter().max(), Some(&248));

        let summaries = store.get_all_series_summaries().await;
        assert_eq!(summaries[0].character_count, 9 + 20);
        assert_eq!(summaries[1].character_count, 8 + 20);
        for id in ids {
            assert!(store.get_character_by_id(&id.to_string()).await.is_some());
        }
    }

    #[tokio::test]
    async fn summaries_count_live_characters() {
        let store = seeded();
        let summaries = store.get_all_series_summaries().await;
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].character_count, 9);
        assert_eq!(summaries[1].character_count, 8);

        assert!(store.remove_character("101").await);
        let summaries = store.get_all_series_summaries().await;
        assert_eq!(summaries[0].character_count, 8);
    }

    #[tokio::test]
    async fn new_series_has_empty_characters_and_next_id() {
        let store = seeded();
        let series = store.create_series(new_series("T", "S")).await.unwrap();
        assert_eq!(series.series_id, 3);
        assert!(series.characters.is_empty());

        let id = series.series_id.to_string();
        assert_eq!(store.get_characters_of_series(&id).await, Some(vec![]));
        assert_eq!(store.get_characters_of_series("999").await, None);
    }

    #[tokio::test]
    async fn create_series_without_title_fails() {
        let store = seeded();
        let err = store
            .create_series(CreateSeries::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert_eq!(store.series_count().await, 2);
    }

    #[tokio::test]
    async fn character_ids_are_global_and_default_image() {
        let store = seeded();
        let first = store.create_character("1", new_character("A")).await.unwrap();
        let second = store.create_character("2", new_character("B")).await.unwrap();
        assert_eq!(first.id, 209);
        assert_eq!(second.id, 210);
        assert_eq!(first.image, "default.png");
    }

    #[tokio::test]
    async fn character_floor_is_honoured() {
        let floors = IdFloors {
            series: None,
            character: Some(300),
        };
        let store = SeriesStore::new(seed::series(), floors);
        let character = store.create_character("1", new_character("A")).await.unwrap();
        assert_eq!(character.id, 300);
    }

    #[tokio::test]
    async fn create_character_under_missing_series_is_not_found() {
        let store = seeded();
        let err = store
            .create_character("42", new_character("A"))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Series" });

        let err = store
            .create_character("abc", new_character("A"))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Series" });
    }

    #[tokio::test]
    async fn missing_series_wins_over_invalid_payload() {
        let store = seeded();
        let err = store
            .create_character("42", CreateCharacter::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { .. });

        let err = store
            .create_character("1", CreateCharacter::default())
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[tokio::test]
    async fn update_series_touches_only_supplied_fields() {
        let store = seeded();
        let patch = UpdateSeries {
            title: Some("New".into()),
            short: None,
        };
        let series = store.update_series("1", patch).await.unwrap();
        assert_eq!(series.title, "New");
        assert_eq!(series.short, "TH06");
        assert_eq!(series.characters.len(), 9);

        let patch = UpdateSeries {
            title: Some(String::new()),
            short: Some("X".into()),
        };
        let series = store.update_series("1", patch).await.unwrap();
        assert_eq!(series.title, "New");
        assert_eq!(series.short, "X");
    }

    #[tokio::test]
    async fn removing_series_cascades_to_characters() {
        let store = seeded();
        let series = store.create_series(new_series("T", "S")).await.unwrap();
        let sid = series.series_id.to_string();
        let mut char_ids = Vec::new();
        for name in ["A", "B", "C"] {
            let c = store.create_character(&sid, new_character(name)).await.unwrap();
            char_ids.push(c.id.to_string());
        }

        assert!(store.remove_series(&sid).await);
        for id in &char_ids {
            assert_eq!(store.get_character_by_id(id).await, None);
            assert!(store.update_character(id, UpdateCharacter::default()).await.is_none());
            assert!(!store.remove_character(id).await);
        }
        assert_eq!(store.get_characters_of_series(&sid).await, None);
        assert!(!store.remove_series(&sid).await);
    }

    #[tokio::test]
    async fn seeded_series_cascade() {
        let store = seeded();
        assert!(store.remove_series("2").await);
        for id in 201..=208 {
            assert!(store.get_character_by_id(&id.to_string()).await.is_none());
        }
        assert!(store.get_character_by_id("101").await.is_some());
    }

    #[tokio::test]
    async fn update_character_merges_and_keeps_id() {
        let store = seeded();
        let patch = UpdateCharacter {
            ability: Some("new ability".into()),
            ..Default::default()
        };
        let character = store.update_character("205", patch).await.unwrap();
        assert_eq!(character.id, 205);
        assert_eq!(character.ability, "new ability");
        assert_eq!(character.image, "youmu_07.png");

        let stored = store.get_character_by_id("205").await.unwrap();
        assert_eq!(stored, character);
    }

    #[tokio::test]
    async fn remove_character_leaves_series() {
        let store = seeded();
        assert!(store.remove_character("205").await);
        assert!(store.get_character_by_id("205").await.is_none());
        assert!(store.get_series("2").await.is_some());
        assert_eq!(store.get_characters_of_series("2").await.unwrap().len(), 7);
        assert!(!store.remove_character("205").await);
    }

    #[tokio::test]
    async fn index_survives_removal_shifting_positions() {
        let store = seeded();
        assert!(store.remove_character("101").await);
        let last = store.get_character_by_id("109").await.unwrap();
        assert_eq!(last.id, 109);
    }
}
