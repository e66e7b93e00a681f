//! The Pokédex API client — typed fetches against the public REST API.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::types::{EvolutionChain, PokemonDetail, ResourcePage, Species, TypeInfo};

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// The main API client.
///
/// Cheap to clone (the underlying HTTP client is reference-counted). There
/// is no retry logic anywhere: a failed request is reported to the caller,
/// whose only recovery is to invoke the operation again.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for PokedexClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS)
    }
}

impl PokedexClient {
    /// Create a client against `base_url` with a per-request timeout.
    ///
    /// Callers holding a `pokedex-core` config feed `api.base_url` and
    /// `api.request_timeout_ms` here.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Typed fetches
    // ------------------------------------------------------------------

    /// Fetch a creature's detail record by name or numeric id.
    ///
    /// The query is trimmed and lowercased, matching what the API expects
    /// for names.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the creature does not exist; transport,
    /// timeout and decode failures otherwise.
    pub async fn pokemon(&self, name_or_id: &str) -> Result<PokemonDetail> {
        let query = name_or_id.trim().to_lowercase();
        let url = format!("{}/pokemon/{query}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch a creature's detail record by full URL.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PokedexClient::pokemon`].
    pub async fn pokemon_by_url(&self, url: &str) -> Result<PokemonDetail> {
        self.get_json(url).await
    }

    /// Fetch a species record by full URL (from a detail record's `species`
    /// reference).
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the species does not exist; transport,
    /// timeout and decode failures otherwise.
    pub async fn species_by_url(&self, url: &str) -> Result<Species> {
        self.get_json(url).await
    }

    /// Fetch an evolution-chain tree by full URL (from a species record).
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the chain does not exist; transport,
    /// timeout and decode failures otherwise.
    pub async fn evolution_chain_by_url(&self, url: &str) -> Result<EvolutionChain> {
        self.get_json(url).await
    }

    /// Fetch an elemental type's damage relations.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for an unknown type name; transport, timeout
    /// and decode failures otherwise.
    pub async fn type_info(&self, name: &str) -> Result<TypeInfo> {
        let query = name.trim().to_lowercase();
        let url = format!("{}/type/{query}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch one page of the creature catalogue.
    ///
    /// # Errors
    ///
    /// Transport, timeout and decode failures.
    pub async fn page(&self, limit: u32, offset: u32) -> Result<ResourcePage> {
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        self.get_json(&url).await
    }

    // ------------------------------------------------------------------
    // Sprite URL helpers
    // ------------------------------------------------------------------

    /// Conventional CDN URL of the default sprite for a Pokédex id.
    #[must_use]
    pub fn sprite_url(id: &str) -> String {
        format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
    }

    /// Conventional CDN URL of the high-resolution "home" sprite.
    #[must_use]
    pub fn home_sprite_url(id: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/{id}.png"
        )
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    /// GET `url` and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "API request");
        let start = Instant::now();

        let response = self.http.get(url).timeout(self.timeout).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(url, "Resource not found");
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(url, %status, "API returned error status");
            return Err(ApiError::Transport(format!("HTTP {status}")));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(url, elapsed_ms = start.elapsed().as_millis() as u64, "API response decoded");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = PokedexClient::new("https://pokeapi.co/api/v2/", 5000);
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
    }

    #[test]
    fn sprite_urls_follow_cdn_convention() {
        assert_eq!(
            PokedexClient::sprite_url("25"),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
        );
        assert!(PokedexClient::home_sprite_url("25").ends_with("/other/home/25.png"));
    }
}
