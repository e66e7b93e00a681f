//! # Pokédex Core Library
//!
//! Persistent user collections for a Pokédex client.
//!
//! Two named collections exist: **Favorites** (unbounded) and **Team**
//! (capped at six members). Each is a durable, ordered list of lightweight
//! [`CollectionItem`] records, stored as one JSON array per collection on a
//! pluggable [`store::KeyValueStore`] backend — in-memory for tests, SQLite
//! for production.
//!
//! ## Contract
//!
//! - Insertion order is display order; ids are unique per collection.
//! - Adds are idempotent; the team rejects a seventh distinct member.
//! - Reads fail open: missing or malformed stored data is an empty list.
//! - Last writer wins; there is no cross-process conflict detection.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::PokedexConfig;
pub use error::StoreError;
pub use store::{CollectionStore, KeyValueStore, MemoryStore, SqliteStore};
pub use types::{Collection, CollectionItem};
