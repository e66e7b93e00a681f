//! Wire types for the remote API.
//!
//! The API performs no schema versioning and its payloads are treated as an
//! untrusted external contract: every field that could plausibly be absent
//! carries `#[serde(default)]`, and unknown fields are ignored. A partial
//! payload decodes to a partial value rather than a decode error.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

/// A named pointer to a remote resource.
///
/// The numeric identifier is not a field of its own; by API convention it is
/// embedded in the URL as the second-to-last path segment
/// (`.../pokemon-species/133/` → `"133"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, lowercase.
    #[serde(default)]
    pub name: String,
    /// Canonical URL of the resource.
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Extract the identifier embedded in the URL path.
    ///
    /// Returns `None` when the URL has no second-to-last segment or that
    /// segment is empty.
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        let segments: Vec<&str> = self.url.split('/').collect();
        match segments.len().checked_sub(2).map(|i| segments[i]) {
            Some(id) if !id.is_empty() => Some(id),
            _ => None,
        }
    }
}

/// A bare URL reference (used where the API omits the `name`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Canonical URL of the resource.
    #[serde(default)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Detail records
// ---------------------------------------------------------------------------

/// One slot of a creature's elemental typing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Slot number (1-based, display order).
    #[serde(default)]
    pub slot: u32,
    /// The elemental type.
    #[serde(default, rename = "type")]
    pub kind: NamedResource,
}

/// One base-stat entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value of the stat.
    #[serde(default)]
    pub base_stat: u32,
    /// Which stat this is.
    #[serde(default)]
    pub stat: NamedResource,
}

/// One ability entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability.
    #[serde(default)]
    pub ability: NamedResource,
    /// Whether this is a hidden ability.
    #[serde(default)]
    pub is_hidden: bool,
}

/// Sprite URLs, with the nested high-resolution variants the API buries
/// under `other.home`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front sprite.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternative sprite sets.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// Alternative sprite sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    /// The "home" high-resolution set.
    #[serde(default)]
    pub home: Option<FrontSprite>,
}

/// A sprite set with a front image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontSprite {
    /// Front image URL.
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// Best available front image: the high-resolution `other.home` variant
    /// when present, else the default sprite.
    #[must_use]
    pub fn best_front(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.home.as_ref())
            .and_then(|h| h.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

/// A full creature detail record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonDetail {
    /// Numeric Pokédex id.
    #[serde(default)]
    pub id: u32,
    /// Creature name, lowercase.
    #[serde(default)]
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Elemental typing, in slot order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Base stats.
    #[serde(default)]
    pub stats: Vec<StatValue>,
    /// Abilities.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Sprites,
    /// Reference to the species record (the road to the evolution chain).
    #[serde(default)]
    pub species: NamedResource,
}

impl PokemonDetail {
    /// Type names in slot order.
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Species & evolution
// ---------------------------------------------------------------------------

/// One alternate form of a species.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Variety {
    /// Whether this is the default form.
    #[serde(default)]
    pub is_default: bool,
    /// Reference to the form's detail record.
    #[serde(default)]
    pub pokemon: NamedResource,
}

/// A species record (only the parts this client reads).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Species {
    /// Reference to the species' evolution-chain tree.
    #[serde(default)]
    pub evolution_chain: Option<ResourceRef>,
    /// Alternate forms of this species.
    #[serde(default)]
    pub varieties: Vec<Variety>,
}

/// A node in the evolution tree. Leaves have an empty `evolves_to`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionNode {
    /// The species at this stage.
    #[serde(default)]
    pub species: NamedResource,
    /// Stages this species evolves into, in declaration order.
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

/// An evolution-chain response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionChain {
    /// Root of the evolution tree.
    #[serde(default)]
    pub chain: EvolutionNode,
}

/// A flattened, enriched stage of an evolutionary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionLink {
    /// Species name at this stage.
    pub species_name: String,
    /// Identifier parsed from the species URL.
    pub id: String,
    /// Elemental type tags; empty when enrichment failed for this stage.
    pub types: Vec<String>,
}

/// An alternate form, hydrated with sprite and typing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonForm {
    /// Form name.
    pub name: String,
    /// Best available sprite, if any.
    pub image: Option<String>,
    /// Elemental type tags.
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// Type matchups
// ---------------------------------------------------------------------------

/// Damage relations of one elemental type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    /// Types this type takes double damage from.
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    /// Types this type deals double damage to.
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    /// Types this type takes half damage from.
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    /// Types this type deals half damage to.
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    /// Types this type takes no damage from.
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    /// Types this type deals no damage to.
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

/// An elemental type record (only the parts this client reads).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Attack/defence matchups for this type.
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

// ---------------------------------------------------------------------------
// Catalogue pages
// ---------------------------------------------------------------------------

/// One page of the paginated creature catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Total number of resources.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// The page's entries.
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
