//! Basic usage example for citysuggest-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample gazetteer
//! - Ask for suggestions from a partial or accented name
//! - Weight suggestions by a position
//! - Use the in-process cache

use citysuggest_rs::prelude::*;

fn print_suggestions(title: &str, found: &Suggestions) {
    println!("--- {title} ---");
    if found.is_empty() {
        println!("(no suggestions)");
    }
    for (i, s) in found.iter().enumerate() {
        println!(
            "{}. {} ({:.5}, {:.5}) score={:.4}",
            i + 1,
            s.name,
            s.latitude,
            s.longitude,
            s.score
        );
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== citysuggest-rs Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let repo = CityRepository::load()?;
    let stats = repo.stats();
    println!(
        "✓ Loaded {} records from {} countries\n",
        stats.records, stats.countries
    );

    // Example 1: exact accented name
    let found = repo.find_ranked_suggestions(&CityQuery::new("Québec"));
    print_suggestions("Example 1: Exact name", &found);

    // Example 2: fragment, matched against primary names
    let found = repo.find_ranked_suggestions(&CityQuery::new("lond"));
    print_suggestions("Example 2: Partial name", &found);

    // Example 3: unaccented spelling, matched against the ASCII name
    let found = repo.find_ranked_suggestions(&CityQuery::new("levis"));
    print_suggestions("Example 3: ASCII name", &found);

    // Example 4: fragment of an alternate name
    let found = repo.find_ranked_suggestions(&CityQuery::new("udad ti que"));
    print_suggestions("Example 4: Alternate name", &found);

    // Example 5: same name, different places
    let query = CityQuery::new("London")
        .with_latitude("37.1")
        .with_longitude("-84.1");
    let found = repo.find_ranked_suggestions(&query);
    print_suggestions("Example 5: Near Kentucky", &found);

    // Example 6: wire format
    println!("--- Example 6: JSON ---");
    let found = repo.find_ranked_suggestions(&CityQuery::new("toronto"));
    match found.to_json(true) {
        Ok(json) => println!("{json}\n"),
        Err(e) => eprintln!("could not render JSON: {e}"),
    }

    // Example 7: Using the cache
    println!("--- Example 7: Cache usage ---");
    let start = std::time::Instant::now();
    let _again = CityRepository::load()?;
    println!("Second load (shared record set): {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
