//! In-memory record store using DashMap

use dashmap::DashMap;

use crate::model::Record;

/// An in-memory table registry keyed by entity logical name.
///
/// The store hands out record snapshots; callers own what they receive, and
/// the view engine treats whatever snapshot it is given as authoritative.
/// Nothing here caches computed views.
///
/// # Example
///
/// ```
/// use jihadharini_lib::model::Record;
/// use jihadharini_lib::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// store.insert("mesh_nodes", vec![Record::new("mesh_nodes").set("name", "Kisumu Central Hub")]);
/// assert_eq!(store.snapshot("mesh_nodes").len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: DashMap<String, Vec<Record>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            tables: DashMap::new(),
        }
    }

    /// Replaces the record set for an entity.
    pub fn insert(&self, entity: impl Into<String>, records: Vec<Record>) {
        self.tables.insert(entity.into(), records);
    }

    /// Returns a snapshot of an entity's records; unknown entities yield an
    /// empty snapshot.
    pub fn snapshot(&self, entity: &str) -> Vec<Record> {
        self.tables
            .get(entity)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Returns the number of records stored for an entity.
    pub fn count(&self, entity: &str) -> usize {
        self.tables
            .get(entity)
            .map(|entry| entry.value().len())
            .unwrap_or(0)
    }

    /// Returns the registered entity names.
    pub fn entities(&self) -> Vec<String> {
        self.tables
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Returns the number of registered entities.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no entity is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
