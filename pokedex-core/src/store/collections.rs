//! The collection store — durable favorites and team lists.
//!
//! Each collection is persisted as one JSON array under a fixed key; every
//! mutation rewrites the whole array. Reads fail open: an absent, unreadable
//! or malformed stored value is treated as an empty collection and heals on
//! the next write.

use tracing::{debug, warn};

use crate::config::CollectionsConfig;
use crate::error::Result;
use crate::store::kv::KeyValueStore;
use crate::types::{Collection, CollectionItem};

/// Membership operations over the two user collections, generic over the
/// storage backend.
#[derive(Debug)]
pub struct CollectionStore<S: KeyValueStore> {
    backend: S,
    team_capacity: usize,
}

impl<S: KeyValueStore> CollectionStore<S> {
    /// Create a store over the given backend with the default team capacity.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            team_capacity: Collection::TEAM_CAPACITY,
        }
    }

    /// Create a store over the given backend, taking limits from config.
    pub fn with_config(backend: S, config: &CollectionsConfig) -> Self {
        Self {
            backend,
            team_capacity: config.team_capacity,
        }
    }

    /// Capacity limit for `collection`, or `None` for unbounded collections.
    fn capacity_of(&self, collection: Collection) -> Option<usize> {
        match collection {
            Collection::Favorites => None,
            Collection::Team => Some(self.team_capacity),
        }
    }

    /// All items in `collection`, in insertion order.
    ///
    /// Never fails: a missing key, a backend read error, or a stored value
    /// that does not parse as a `CollectionItem` array all yield an empty
    /// list.
    pub fn items(&self, collection: Collection) -> Vec<CollectionItem> {
        let raw = match self.backend.get(collection.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(%collection, error = %e, "Failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(%collection, error = %e, "Stored collection is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Whether an item with `id` is in `collection`.
    pub fn contains(&self, collection: Collection, id: u32) -> bool {
        self.items(collection).iter().any(|item| item.id == id)
    }

    /// Number of items in `collection`.
    pub fn len(&self, collection: Collection) -> usize {
        self.items(collection).len()
    }

    /// Whether `collection` holds no items.
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.items(collection).is_empty()
    }

    /// Add `item` to `collection`, appending at the end.
    ///
    /// Idempotent: if the id is already present, returns `Ok(true)` without
    /// touching storage. A bounded collection at capacity rejects a new id
    /// with `Ok(false)` and leaves storage unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] only on backend write failures.
    pub fn add(&self, collection: Collection, item: CollectionItem) -> Result<bool> {
        let mut items = self.items(collection);

        if items.iter().any(|existing| existing.id == item.id) {
            return Ok(true);
        }

        if let Some(capacity) = self.capacity_of(collection) {
            if items.len() >= capacity {
                debug!(%collection, id = item.id, capacity, "Collection full, rejecting add");
                return Ok(false);
            }
        }

        debug!(%collection, id = item.id, name = %item.name, "Adding to collection");
        items.push(item);
        self.write(collection, &items)?;
        Ok(true)
    }

    /// Remove the item with `id` from `collection`; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] only on backend write failures.
    pub fn remove(&self, collection: Collection, id: u32) -> Result<()> {
        let mut items = self.items(collection);
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Ok(());
        }

        debug!(%collection, id, "Removed from collection");
        self.write(collection, &items)
    }

    /// Flip membership of `item` in `collection`.
    ///
    /// Returns the membership state after the call: `Ok(true)` if the item
    /// is now present, `Ok(false)` if it was removed or rejected at
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] only on backend write failures.
    pub fn toggle(&self, collection: Collection, item: CollectionItem) -> Result<bool> {
        if self.contains(collection, item.id) {
            self.remove(collection, item.id)?;
            Ok(false)
        } else {
            self.add(collection, item)
        }
    }

    /// Serialize and rewrite the whole list for `collection`.
    fn write(&self, collection: Collection, items: &[CollectionItem]) -> Result<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| crate::StoreError::Serialization(e.to_string()))?;
        self.backend.put(collection.storage_key(), &json)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
