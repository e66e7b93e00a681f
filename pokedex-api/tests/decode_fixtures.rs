//! Fixture decoding — realistic API payloads through the wire types and the
//! chain flattener, no network involved.

use pokedex_api::{flatten_chain, EvolutionChain, PokemonDetail, ResourcePage, Species, TypeInfo};

// Trimmed but structurally faithful excerpts of real API responses.

const BULBASAUR_CHAIN: &str = r#"{
    "id": 1,
    "baby_trigger_item": null,
    "chain": {
        "is_baby": false,
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
        "evolves_to": [{
            "is_baby": false,
            "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"},
            "evolves_to": [{
                "is_baby": false,
                "species": {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon-species/3/"},
                "evolves_to": []
            }]
        }]
    }
}"#;

const EEVEE_CHAIN: &str = r#"{
    "chain": {
        "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
        "evolves_to": [
            {"species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"}, "evolves_to": []},
            {"species": {"name": "jolteon", "url": "https://pokeapi.co/api/v2/pokemon-species/135/"}, "evolves_to": []},
            {"species": {"name": "flareon", "url": "https://pokeapi.co/api/v2/pokemon-species/136/"}, "evolves_to": []}
        ]
    }
}"#;

#[test]
fn linear_chain_fixture_flattens_to_three_stages() {
    let chain: EvolutionChain = serde_json::from_str(BULBASAUR_CHAIN).expect("decode");
    let stages = flatten_chain(&chain.chain);

    let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);

    let ids: Vec<&str> = stages.iter().filter_map(|s| s.resource_id()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn branching_chain_fixture_keeps_every_branch() {
    let chain: EvolutionChain = serde_json::from_str(EEVEE_CHAIN).expect("decode");
    let names: Vec<String> = flatten_chain(&chain.chain)
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(names, vec!["eevee", "vaporeon", "jolteon", "flareon"]);
}

#[test]
fn detail_fixture_decodes_stats_abilities_and_sprites() {
    let detail: PokemonDetail = serde_json::from_str(
        r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ],
            "abilities": [
                {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true, "slot": 3}
            ],
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
                "other": {
                    "home": {"front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/25.png"},
                    "official-artwork": {"front_default": "https://img/art.png"}
                }
            },
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#,
    )
    .expect("decode");

    assert_eq!(detail.type_names(), vec!["electric"]);
    assert_eq!(detail.stats[1].base_stat, 90);
    assert!(detail.abilities[1].is_hidden);
    assert_eq!(
        detail.sprites.best_front(),
        Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/25.png")
    );
    assert_eq!(detail.species.resource_id(), Some("25"));
}

#[test]
fn species_fixture_exposes_chain_url_and_varieties() {
    let species: Species = serde_json::from_str(
        r#"{
            "name": "pikachu",
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"},
            "varieties": [
                {"is_default": true, "pokemon": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"}},
                {"is_default": false, "pokemon": {"name": "pikachu-gmax", "url": "https://pokeapi.co/api/v2/pokemon/10199/"}}
            ]
        }"#,
    )
    .expect("decode");

    assert_eq!(
        species.evolution_chain.as_ref().map(|c| c.url.as_str()),
        Some("https://pokeapi.co/api/v2/evolution-chain/10/")
    );
    assert_eq!(species.varieties.len(), 2);
    assert!(!species.varieties[1].is_default);
}

#[test]
fn type_fixture_decodes_damage_relations() {
    let info: TypeInfo = serde_json::from_str(
        r#"{
            "name": "electric",
            "damage_relations": {
                "double_damage_from": [{"name": "ground", "url": "https://pokeapi.co/api/v2/type/5/"}],
                "double_damage_to": [
                    {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"},
                    {"name": "water", "url": "https://pokeapi.co/api/v2/type/11/"}
                ],
                "half_damage_from": [{"name": "steel", "url": "https://pokeapi.co/api/v2/type/9/"}],
                "half_damage_to": [{"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}],
                "no_damage_from": [],
                "no_damage_to": [{"name": "ground", "url": "https://pokeapi.co/api/v2/type/5/"}]
            }
        }"#,
    )
    .expect("decode");

    let relations = &info.damage_relations;
    assert_eq!(relations.double_damage_from[0].name, "ground");
    assert_eq!(relations.double_damage_to.len(), 2);
    assert!(relations.no_damage_from.is_empty());
}

#[test]
fn page_fixture_decodes_pagination_links() {
    let page: ResourcePage = serde_json::from_str(
        r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=12&limit=12",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#,
    )
    .expect("decode");

    assert_eq!(page.count, 1302);
    assert!(page.next.is_some());
    assert!(page.previous.is_none());
    assert_eq!(page.results[1].resource_id(), Some("2"));
}
