//! The generic record table backing every flat resource.

use indexmap::IndexMap;
use tristore_core::error::CoreError;
use tristore_core::types::{RecordId, MAX_RECORD_ID};

/// A record shape that can live in an [`EntityStore`](crate::EntityStore).
///
/// `Patch` lists only the mutable fields, so the identifier can never be
/// changed through an update payload.
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in not-found messages (`"data"`, `"game"`, ...).
    const RESOURCE: &'static str;

    type Create: Send;
    type Patch: Send;

    fn id(&self) -> RecordId;

    /// Validate `input` and build the record under `id`.
    fn from_create(id: RecordId, input: Self::Create) -> Result<Self, CoreError>;

    /// Overwrite every field present in `patch`, keeping the rest.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Strictly increasing id allocator. Retired ids are never handed out again.
#[derive(Debug, Clone)]
pub struct IdCounter {
    next: RecordId,
}

impl IdCounter {
    /// Start one past the largest existing id (1 for none), raised to
    /// `floor` when given. The floor is capped at [`MAX_RECORD_ID`].
    pub fn starting_after<I>(existing: I, floor: Option<RecordId>) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let derived = existing.into_iter().max().map_or(1, |max| max + 1);
        let next = floor.map_or(derived, |f| derived.max(f.min(MAX_RECORD_ID)));
        Self { next }
    }

    /// The id the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> RecordId {
        self.next
    }

    pub fn allocate(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Insertion-ordered id → record map plus its counter.
#[derive(Debug, Clone)]
pub struct Table<R: Record> {
    rows: IndexMap<RecordId, R>,
    ids: IdCounter,
}

impl<R: Record> Table<R> {
    pub fn new(seed: Vec<R>) -> Self {
        let ids = IdCounter::starting_after(seed.iter().map(Record::id), None);
        let rows = seed.into_iter().map(|r| (r.id(), r)).collect();
        Self { rows, ids }
    }

    pub fn all(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.rows.get(&id)
    }

    /// Build and append a record. A rejected payload does not consume an id.
    pub fn insert(&mut self, input: R::Create) -> Result<R, CoreError> {
        let record = R::from_create(self.ids.peek(), input)?;
        let id = self.ids.allocate();
        self.rows.insert(id, record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: RecordId, patch: R::Patch) -> Option<R> {
        let record = self.rows.get_mut(&id)?;
        record.apply_patch(patch);
        Some(record.clone())
    }

    pub fn remove(&mut self, id: RecordId) -> bool {
        self.rows.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
