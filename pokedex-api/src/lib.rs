//! # pokedex-api — Remote API client
//!
//! Typed async access to the public Pokémon REST API:
//!
//! - catalogue pages, hydrated with per-entry detail records
//! - creature detail, species and alternate-form records
//! - evolution chains, flattened and enriched with type tags
//! - elemental type damage relations
//!
//! All multi-request operations fan out their independent fetches and join
//! the results in the original order, so total latency is bounded by the
//! slowest single request. Callers pass a [`CancelToken`] into multi-stage
//! operations; a superseded call returns [`ApiError::Cancelled`] rather than
//! racing a discarded result.
//!
//! Remote payloads are treated as an untrusted contract: missing fields
//! decode to defaults instead of failing.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cancel;
pub mod catalogue;
pub mod client;
pub mod error;
pub mod evolution;
pub mod types;

pub use cancel::CancelToken;
pub use client::PokedexClient;
pub use error::ApiError;
pub use evolution::{flatten_chain, resolve_evolution_line};
pub use types::{
    EvolutionChain, EvolutionLink, EvolutionNode, NamedResource, PokemonDetail, PokemonForm,
    ResourcePage, Species, TypeInfo,
};
