//! Core type definitions for the collection store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lightweight creature record held in a collection.
///
/// This is the shape persisted to storage; it carries just enough to render
/// a card without another API round-trip. `types` is absent from records
/// written by older favorites lists, so it defaults to empty on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Numeric Pokédex id, unique within a collection.
    pub id: u32,
    /// Species name, lowercase.
    pub name: String,
    /// Sprite URL.
    pub image: String,
    /// Elemental type tags, in slot order.
    #[serde(default)]
    pub types: Vec<String>,
}

/// The two user collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Unbounded list of favorite creatures.
    Favorites,
    /// Battle team, capped at [`Collection::TEAM_CAPACITY`] entries.
    Team,
}

impl Collection {
    /// Default maximum number of team members; `CollectionsConfig` can
    /// override the limit the store enforces.
    pub const TEAM_CAPACITY: usize = 6;

    /// Fixed storage key for this collection.
    ///
    /// The two literal keys (separator mismatch included) are the ones the
    /// shipped web client wrote, so existing data stays readable.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Collection::Favorites => "pokemon-favorites",
            Collection::Team => "pokemon_team",
        }
    }

    /// Default capacity limit, or `None` for unbounded collections.
    #[must_use]
    pub fn capacity(self) -> Option<usize> {
        match self {
            Collection::Favorites => None,
            Collection::Team => Some(Self::TEAM_CAPACITY),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Favorites => write!(f, "favorites"),
            Collection::Team => write!(f, "team"),
        }
    }
}
