//! The evolution-chain resolver.
//!
//! Given a detail record's species URL, produces the full evolutionary line
//! as ordered [`EvolutionLink`]s, each annotated with its elemental types.
//!
//! The pipeline is: species → chain tree → pre-order flatten → concurrent
//! per-stage type enrichment → fan-in, in that order. A top-level fetch
//! failure aborts the whole operation with no partial result; a per-stage
//! enrichment failure degrades that one stage to an empty type list.
//!
//! Branching chains (Eevee and friends) are enumerated in full: every child
//! is visited in declaration order. Total latency of the enrichment step is
//! bounded by the slowest single fetch, not their sum.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::client::PokedexClient;
use crate::error::Result;
use crate::types::{EvolutionLink, EvolutionNode, NamedResource, PokemonDetail};

/// Flatten an evolution tree into its species references, pre-order: the
/// node itself first, then each branch in declaration order.
#[must_use]
pub fn flatten_chain(root: &EvolutionNode) -> Vec<NamedResource> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect(node: &EvolutionNode, out: &mut Vec<NamedResource>) {
    out.push(node.species.clone());
    for child in &node.evolves_to {
        collect(child, out);
    }
}

/// Resolve the full evolutionary line reachable from `species_url`.
///
/// Enrichment fetches for the flattened stages run concurrently and are
/// joined back in traversal order. The token is checked at every stage
/// boundary; a cancelled resolve returns [`crate::ApiError::Cancelled`] and
/// discards whatever was already fetched.
///
/// A species with no evolution-chain reference resolves to an empty line.
///
/// # Errors
///
/// Propagates the species or chain fetch failure (including
/// [`crate::ApiError::NotFound`]) as a failure of the whole operation.
pub async fn resolve_evolution_line(
    client: &PokedexClient,
    species_url: &str,
    cancel: &CancelToken,
) -> Result<Vec<EvolutionLink>> {
    cancel.check()?;
    let species = client.species_by_url(species_url).await?;

    let Some(chain_ref) = species.evolution_chain else {
        debug!(species_url, "Species has no evolution chain");
        return Ok(Vec::new());
    };

    cancel.check()?;
    let chain = client.evolution_chain_by_url(&chain_ref.url).await?;
    let stages = flatten_chain(&chain.chain);
    debug!(species_url, stages = stages.len(), "Flattened evolution chain");

    // Fan out one detail fetch per stage; join preserves traversal order.
    cancel.check()?;
    let fetches = stages.iter().map(|stage| client.pokemon(&stage.name));
    let results = join_all(fetches).await;

    cancel.check()?;
    Ok(merge_links(&stages, results))
}

/// Join enrichment results back onto the flattened stages.
///
/// A failed enrichment keeps the stage but leaves its `types` empty.
fn merge_links(
    stages: &[NamedResource],
    results: Vec<Result<PokemonDetail>>,
) -> Vec<EvolutionLink> {
    stages
        .iter()
        .zip(results)
        .map(|(stage, result)| {
            let types = match result {
                Ok(detail) => detail.type_names(),
                Err(e) => {
                    warn!(species = %stage.name, error = %e, "Type enrichment failed, leaving types empty");
                    Vec::new()
                }
            };
            EvolutionLink {
                species_name: stage.name.clone(),
                id: stage.resource_id().unwrap_or_default().to_string(),
                types,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
