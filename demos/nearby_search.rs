use geo::{Distance, Haversine};
use geohash_query::{GeoHash, MAX_PRECISION, Point, QueryPlanner};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see query planning)
    env_logger::init();

    println!("=== Geohash Query - Nearby Search ===\n");

    let places = [
        ("Ferry Building", Point::new(-122.3937, 37.7955)),
        ("Coit Tower", Point::new(-122.4058, 37.8024)),
        ("Union Square", Point::new(-122.4075, 37.7880)),
        ("Golden Gate Park", Point::new(-122.4862, 37.7694)),
        ("Oakland City Hall", Point::new(-122.2727, 37.8053)),
        ("Palo Alto", Point::new(-122.1430, 37.4419)),
    ];

    // Any ordered key-value store works; keys are full-precision geohashes
    let mut store: BTreeMap<String, (&str, Point)> = BTreeMap::new();
    for (name, point) in places {
        let hash = GeoHash::from_point(&point, MAX_PRECISION)?;
        println!("   {:<18} -> {}", name, hash);
        store.insert(hash.to_string(), (name, point));
    }

    let center = Point::new(-122.4194, 37.7749);
    let radius = 3_000.0;
    let planner = QueryPlanner::new();
    let queries = planner.queries_for_location(&center, radius)?;

    println!(
        "\n{} range queries for {}m around {}:",
        queries.len(),
        radius,
        planner.encode_point(&center)?
    );
    for query in &queries {
        println!("   {}", query);
    }

    println!("\nCandidates:");
    for query in &queries {
        let range = query.start_value().to_string()..query.end_value().to_string();
        for (_, (name, point)) in store.range(range) {
            let distance = Haversine.distance(center, *point);
            let status = if distance <= radius { "match" } else { "filtered" };
            println!("   {:<18} {:>8.0}m  {}", name, distance, status);
        }
    }

    Ok(())
}
