//! Error handling example for citysuggest-rs
//!
//! This example demonstrates proper error handling and edge cases

use citysuggest_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citysuggest-rs Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing file ---");
    match CityRepository::load_from_path("does/not/exist.tsv", &LoadOptions::default()) {
        Ok(repo) => println!("  Unexpectedly loaded {} records", repo.len()),
        Err(SuggestError::NotFound(msg)) => println!("  Not found: {msg}"),
        Err(e) => {
            eprintln!("✗ Failed to load gazetteer: {e}");
            return Err(e);
        }
    }
    println!();

    let repo = CityRepository::load()?;

    // Example 2: Queries that match nothing
    println!("--- Example 2: Names that do not exist ---");
    for name in ["SomeRandomCityInTheMiddleOfNowhere", "", "zzz"] {
        let found = repo.find_ranked_suggestions(&CityQuery::new(name));
        println!("  {name:?}: {} suggestions", found.len());
    }
    println!();

    // Example 3: Malformed positions are ignored, not rejected
    println!("--- Example 3: Malformed position hints ---");
    let query = CityQuery::new("London")
        .with_latitude("north")
        .with_longitude("");
    for s in &repo.find_ranked_suggestions(&query) {
        println!("  {} score={}", s.name, s.score);
    }
    println!();

    // Example 4: Short rows fall back to defaults
    println!("--- Example 4: Sparse rows ---");
    for s in &repo.find_ranked_suggestions(&CityQuery::new("nowhere")) {
        println!("  {} ({}, {})", s.name, s.latitude, s.longitude);
    }

    Ok(())
}
