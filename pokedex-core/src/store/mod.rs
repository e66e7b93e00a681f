//! Storage: pluggable key-value backends and the collection store on top.

pub mod collections;
pub mod kv;

pub use collections::CollectionStore;
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
