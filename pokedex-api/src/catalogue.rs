//! Catalogue browsing — paginated list pages hydrated with detail records,
//! and species varieties (alternate forms).
//!
//! Both operations fan out one detail fetch per entry and join in entry
//! order. A failed entry is dropped with a warning instead of failing the
//! whole page; the caller renders what survived.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::client::PokedexClient;
use crate::error::Result;
use crate::types::{PokemonDetail, PokemonForm, Species};

impl PokedexClient {
    /// One catalogue page, hydrated: fetches the page of references, then
    /// every entry's detail record concurrently, joined in page order.
    ///
    /// # Errors
    ///
    /// Fails only if the page fetch itself fails or the token is cancelled;
    /// individual hydration failures drop that entry.
    pub async fn page_details(
        &self,
        limit: u32,
        offset: u32,
        cancel: &CancelToken,
    ) -> Result<Vec<PokemonDetail>> {
        cancel.check()?;
        let page = self.page(limit, offset).await?;

        cancel.check()?;
        let fetches = page.results.iter().map(|entry| self.pokemon_by_url(&entry.url));
        let results = join_all(fetches).await;

        cancel.check()?;
        let details = keep_hydrated(results);
        debug!(
            limit,
            offset,
            requested = page.results.len(),
            hydrated = details.len(),
            "Catalogue page hydrated"
        );
        Ok(details)
    }

    /// All forms of a species, hydrated with sprite and typing.
    ///
    /// # Errors
    ///
    /// Fails only on cancellation; individual form fetch failures drop that
    /// form.
    pub async fn varieties(
        &self,
        species: &Species,
        cancel: &CancelToken,
    ) -> Result<Vec<PokemonForm>> {
        cancel.check()?;
        let fetches = species
            .varieties
            .iter()
            .map(|v| self.pokemon_by_url(&v.pokemon.url));
        let results = join_all(fetches).await;

        cancel.check()?;
        Ok(keep_hydrated(results)
            .into_iter()
            .map(|detail| PokemonForm {
                name: detail.name.clone(),
                image: detail.sprites.best_front().map(str::to_string),
                types: detail.type_names(),
            })
            .collect())
    }
}

/// Keep successful fetches in order; log and drop the failures.
fn keep_hydrated(results: Vec<Result<PokemonDetail>>) -> Vec<PokemonDetail> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(error = %e, "Dropping entry that failed to hydrate");
                None
            }
        })
        .collect()
}
