//! Pluggable key-value storage backends.
//!
//! The collection store never talks to a concrete backend directly; it goes
//! through [`KeyValueStore`] so tests run against [`MemoryStore`] and
//! production uses [`SqliteStore`]. The SQLite schema is intentionally
//! simple:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS kv_entries (
//!     key        TEXT PRIMARY KEY,
//!     value      TEXT NOT NULL,
//!     updated_at TEXT NOT NULL
//! );
//! ```
//!
//! One row per collection, the whole serialized list in `value`. Keeping
//! JSON in a TEXT column keeps the schema stable across record-shape
//! changes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags};
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::Result;

/// A string-keyed, string-valued store.
///
/// Implementations are expected to be last-writer-wins: concurrent writers
/// sharing the same backing file can silently lose updates, and callers
/// accept that.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] on backend failures.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] on backend failures.
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] on backend failures.
    fn delete(&self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

/// SQLite-backed store, one row per key.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv_entries (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

impl SqliteStore {
    /// Open (or create) an SQLite database at `path`.
    ///
    /// The schema is automatically created if it does not exist.
    /// WAL mode is enabled when `wal_mode` is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Database`] on SQLite failures.
    pub fn open<P: AsRef<Path>>(path: P, wal_mode: bool) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&db_path, flags)?;

        if wal_mode {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        }
        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

        conn.execute_batch(SCHEMA)?;

        info!(
            path = %db_path.display(),
            wal = wal_mode,
            "Collection storage opened"
        );

        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    /// Open the database named by `config.path`, honoring `config.wal_mode`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Database`] on SQLite failures.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        Self::open(&config.path, config.wal_mode)
    }

    /// Open an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Database`] on SQLite failures.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: PathBuf::from(":memory:"),
        })
    }

    /// Return the path to the database file (or `:memory:`).
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached("SELECT value FROM kv_entries WHERE key = ?1")?;

        let value = match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(v) => Some(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.lock().execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value, now],
        )?;

        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .lock()
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn backends() -> Vec<Box<dyn KeyValueStore>> {
        vec![
            Box::new(MemoryStore::new()),
            Box::new(SqliteStore::open_in_memory().expect("open")),
        ]
    }

    #[test]
    fn get_absent_is_none() {
        for store in backends() {
            assert!(store.get("missing").expect("get").is_none());
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        for store in backends() {
            store.put("k", "[1,2,3]").expect("put");
            assert_eq!(store.get("k").expect("get").as_deref(), Some("[1,2,3]"));
        }
    }

    #[test]
    fn put_overwrites() {
        for store in backends() {
            store.put("k", "old").expect("put");
            store.put("k", "new").expect("put");
            assert_eq!(store.get("k").expect("get").as_deref(), Some("new"));
        }
    }

    #[test]
    fn delete_is_idempotent() {
        for store in backends() {
            store.put("k", "v").expect("put");
            store.delete("k").expect("delete");
            store.delete("k").expect("delete again");
            assert!(store.get("k").expect("get").is_none());
        }
    }

    #[test]
    fn file_backed_store_persists_across_opens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("collections.db");

        {
            let store = SqliteStore::open(&db_path, true).expect("open");
            store.put("pokemon_team", r#"[{"id":1}]"#).expect("put");
        }

        let store = SqliteStore::open(&db_path, true).expect("reopen");
        assert_eq!(
            store.get("pokemon_team").expect("get").as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn from_config_opens_the_configured_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("configured.db");
        let config = StorageConfig {
            path: db_path.to_string_lossy().into_owned(),
            ..StorageConfig::default()
        };

        let store = SqliteStore::from_config(&config).expect("open");
        store.put("k", "v").expect("put");
        assert_eq!(store.db_path(), db_path.as_path());
        assert!(db_path.exists());
    }
}
