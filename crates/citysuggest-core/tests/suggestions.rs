// crates/citysuggest-core/tests/suggestions.rs
//
// End-to-end queries against the bundled sample gazetteer.

use citysuggest_core::{CityQuery, CityRepository, Suggestions};

fn repository() -> CityRepository {
    CityRepository::load().expect("bundled sample dataset loads")
}

fn find(q: &str) -> Suggestions {
    repository().find_ranked_suggestions(&CityQuery::new(q))
}

fn first_name(found: &Suggestions) -> &str {
    &found.first().expect("at least one suggestion").name
}

#[test]
fn sample_dataset_is_not_empty() {
    let repo = repository();
    assert!(!repo.is_empty());
    assert_eq!(repo.stats().records, 12);
}

#[test]
fn exact_name() {
    let found = find("Québec");
    assert_eq!(first_name(&found), "Québec, 10, CA");
    assert_eq!(found.suggestions[0].score, 1.0);
}

#[test]
fn exact_lower_case_name() {
    assert!(first_name(&find("québec")).contains("Québec"));
}

#[test]
fn partial_name() {
    let found = find("lond");
    assert_eq!(first_name(&found), "London, 08, CA");
    assert_eq!(found.len(), 4);
    assert_eq!(found.suggestions[3].name, "Londonderry, NH, US");
}

#[test]
fn ascii_name() {
    assert_eq!(first_name(&find("levis")), "Lévis, 10, CA");
}

#[test]
fn partial_alternate_name() {
    let found = find("udad ti Que");
    assert_eq!(first_name(&found), "Québec, 10, CA");
    assert_eq!(found.suggestions[0].score, (11.0_f64 / 16.0) as f32);
}

#[test]
fn non_latin_alternate_name() {
    let found = find("Монреаль");
    assert_eq!(first_name(&found), "Montréal, 10, CA");
    assert_eq!(found.suggestions[0].score, 1.0);
}

#[test]
fn inexistent_name() {
    let found = find("SomeRandomCityInTheMiddleOfNowhere");
    assert!(found.is_empty());
    assert_eq!(found.to_json(false).unwrap(), r#"{"suggestions":[]}"#);
}

#[test]
fn empty_name() {
    assert!(find("").is_empty());
}

#[test]
fn appends_admin1_and_country_code() {
    assert!(first_name(&find("Québec")).ends_with(", 10, CA"));
}

#[test]
fn short_row_uses_defaults() {
    let found = find("nowhere");
    assert_eq!(found.len(), 1);
    let s = &found.suggestions[0];
    assert_eq!(s.name, "Nowhere, -, -");
    assert_eq!((s.latitude, s.longitude), (0.0, 0.0));
}

#[test]
fn position_prefers_nearest_homonym() {
    let repo = repository();
    let q = CityQuery::new("London")
        .with_latitude("37.0")
        .with_longitude("-84.0");
    let found = repo.find_ranked_suggestions(&q);
    assert_eq!(first_name(&found), "London, KY, US");
    assert!(found.suggestions[0].score < 1.0);
}

#[test]
fn malformed_position_is_ignored() {
    let repo = repository();
    let q = CityQuery::new("London")
        .with_latitude("north")
        .with_longitude("west");
    let found = repo.find_ranked_suggestions(&q);
    assert!(found.iter().take(3).all(|s| s.score == 1.0));
    assert_eq!(first_name(&found), "London, 08, CA");
}

#[test]
fn ranked_output_is_descending() {
    let found = find("on");
    assert!(found.len() > 3);
    assert!(found
        .suggestions
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn header_row_is_skipped() {
    assert!(find("alt_name").is_empty());
}
