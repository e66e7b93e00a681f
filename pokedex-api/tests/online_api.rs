//! Online API tests — opt-in, against the live public API.
//!
//! ## Usage
//!
//! - **Offline (default):** every test here is skipped; CI stays hermetic.
//! - **Online:** set `POKEDEX_ONLINE_TESTS=1` to actually hit the API and
//!   verify the wire types against reality.

use pokedex_api::{resolve_evolution_line, ApiError, CancelToken, PokedexClient};

fn online() -> bool {
    std::env::var("POKEDEX_ONLINE_TESTS").as_deref() == Ok("1")
}

#[tokio::test]
async fn fetches_a_detail_record() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let detail = client.pokemon("Pikachu ").await.expect("fetch pikachu");
    assert_eq!(detail.id, 25);
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.type_names(), vec!["electric"]);
    assert!(detail.sprites.best_front().is_some());
}

#[tokio::test]
async fn unknown_name_is_not_found() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let err = client.pokemon("missingno").await.expect_err("no such creature");
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn resolves_a_linear_evolution_line() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let detail = client.pokemon("bulbasaur").await.expect("fetch");
    let line = resolve_evolution_line(&client, &detail.species.url, &CancelToken::new())
        .await
        .expect("resolve");

    let names: Vec<&str> = line.iter().map(|l| l.species_name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    assert!(line.iter().all(|l| !l.types.is_empty()));
}

#[tokio::test]
async fn resolves_a_branching_evolution_line_in_full() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let detail = client.pokemon("eevee").await.expect("fetch");
    let line = resolve_evolution_line(&client, &detail.species.url, &CancelToken::new())
        .await
        .expect("resolve");

    // Every Eeveelution, not just the first branch.
    assert!(line.len() > 3, "expected the full branch set, got {}", line.len());
    assert_eq!(line[0].species_name, "eevee");
}

#[tokio::test]
async fn hydrates_a_catalogue_page() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let details = client
        .page_details(12, 0, &CancelToken::new())
        .await
        .expect("hydrate page");
    assert_eq!(details.len(), 12);
    assert_eq!(details[0].name, "bulbasaur");
}

#[tokio::test]
async fn fetches_type_matchups() {
    if !online() {
        return;
    }
    let client = PokedexClient::default();

    let info = client.type_info("electric").await.expect("fetch type");
    assert!(info
        .damage_relations
        .double_damage_from
        .iter()
        .any(|t| t.name == "ground"));
}
