//! Configuration for the Pokédex client and collection store.
//!
//! Maps directly to `pokedex.toml`.

use serde::{Deserialize, Serialize};

/// Top-level Pokédex configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PokedexConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Collection storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Collection limits.
    #[serde(default)]
    pub collections: CollectionsConfig,
}

impl PokedexConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `StoreError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::StoreError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hard timeout for any API call in milliseconds.
    #[serde(default = "default_10000")]
    pub request_timeout_ms: u64,
    /// Entries per catalogue page.
    #[serde(default = "default_12")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: 10_000,
            page_size: 12,
        }
    }
}

/// Collection storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend: "sqlite" or "memory".
    #[serde(default = "default_sqlite")]
    pub backend: String,
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Use WAL mode for concurrent reads.
    #[serde(default = "default_true")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            path: default_db_path(),
            wal_mode: true,
        }
    }
}

/// Collection limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// Maximum entries in the team collection.
    #[serde(default = "default_6")]
    pub team_capacity: usize,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self { team_capacity: 6 }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_base_url() -> String { "https://pokeapi.co/api/v2".to_string() }
fn default_sqlite() -> String { "sqlite".to_string() }
fn default_db_path() -> String { "pokedex.db".to_string() }
fn default_6() -> usize { 6 }
fn default_12() -> u32 { 12 }
fn default_10000() -> u64 { 10_000 }
