use geohash_query::prelude::*;
use geohash_query::{END_SENTINEL, MAX_PRECISION, join_queries};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pairs(queries: &GeoHashQuerySet) -> Vec<(String, String)> {
    queries
        .iter()
        .map(|q| (q.start_value().to_string(), q.end_value().to_string()))
        .collect()
}

#[test]
fn test_encode_and_validate() {
    let hash = encode_geohash(37.7749, -122.4194, 10).unwrap();
    assert_eq!(hash.as_str().len(), 10);
    assert!(is_valid_geohash(hash.as_str()));
    assert!(hash.as_str().starts_with("9q8yy"));

    assert!(!is_valid_geohash("abc!23"));
    assert!(!is_valid_geohash(""));
    assert!(!is_valid_geohash("9q8yya"));
}

#[test]
fn test_encode_matches_reference_implementation() {
    let cities = [
        (40.7128, -74.0060),
        (51.5074, -0.1278),
        (48.8566, 2.3522),
        (35.6762, 139.6503),
        (-33.8688, 151.2093),
        (-23.5505, -46.6333),
        (37.7749, -122.4194),
        (55.7558, 37.6173),
    ];

    for (latitude, longitude) in cities {
        for precision in [1, 5, 8, 10] {
            let ours = encode_geohash(latitude, longitude, precision).unwrap();
            let reference = geohash::encode(
                geohash::Coord {
                    x: longitude,
                    y: latitude,
                },
                precision,
            )
            .unwrap();
            assert_eq!(ours.as_str(), reference, "({}, {}) @ {}", latitude, longitude, precision);
        }
    }
}

#[test]
fn test_decoded_bounds_contain_point() {
    let hash = encode_geohash(-33.8688, 151.2093, 9).unwrap();
    let bounds = hash.bounds();
    assert!(bounds.min().x <= 151.2093 && 151.2093 <= bounds.max().x);
    assert!(bounds.min().y <= -33.8688 && -33.8688 <= bounds.max().y);
}

#[test]
fn test_zero_radius_contains_center() {
    init_logger();
    let center = Point::new(-122.4194, 37.7749);
    let queries = queries_for_location(&center, 0.0).unwrap();
    assert_eq!(queries.len(), 1);

    let hash = encode_geohash(37.7749, -122.4194, MAX_PRECISION).unwrap();
    assert!(queries.contains_geohash(&hash));
    assert_eq!(queries.iter().next().unwrap().start_value(), hash.as_str());
}

#[test]
fn test_one_kilometer_around_san_francisco() {
    init_logger();
    let center = Point::new(-122.4194, 37.7749);
    let queries = queries_for_location(&center, 1000.0).unwrap();
    assert_eq!(
        pairs(&queries),
        vec![("9q8yy0".to_string(), format!("9q8yy{}", END_SENTINEL))]
    );
    assert!(queries.contains_point(&center).unwrap());
    assert!(!queries.contains_point(&Point::new(-73.9857, 40.7484)).unwrap());
}

#[test]
fn test_box_across_antimeridian() {
    init_logger();
    let bbox = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
    let queries = queries_for_bounding_box(&bbox).unwrap();
    assert_eq!(
        pairs(&queries),
        vec![
            ("2n".to_string(), "2s".to_string()),
            ("80".to_string(), "84".to_string()),
            ("rw".to_string(), "r~".to_string()),
            ("x8".to_string(), "xd".to_string()),
        ]
    );

    assert!(queries.contains_point(&Point::new(179.9, 5.0)).unwrap());
    assert!(queries.contains_point(&Point::new(-179.9, -5.0)).unwrap());
    assert!(!queries.contains_point(&Point::new(0.0, 0.0)).unwrap());
}

#[test]
fn test_full_width_box_is_one_query() {
    let bbox = GeoBoundingBox::new(-180.0, -5.0, 180.0, 5.0);
    let queries = queries_for_bounding_box(&bbox).unwrap();
    assert_eq!(
        pairs(&queries),
        vec![("0".to_string(), END_SENTINEL.to_string())]
    );
}

#[test]
fn test_region_query() {
    let region = CoordinateRegion::new(Point::new(2.3522, 48.8566), 0.2, 0.3);
    let queries = queries_for_region(&region).unwrap();
    assert!(!queries.is_empty());
    assert!(queries.is_fully_joined());
    assert!(queries.contains_point(&Point::new(2.3522, 48.8566)).unwrap());
    assert!(queries.contains_point(&Point::new(2.21, 48.76)).unwrap());
    assert!(queries.contains_point(&Point::new(2.49, 48.95)).unwrap());
}

#[test]
fn test_join_is_idempotent() {
    let center = Point::new(139.6503, 35.6762);
    let queries = queries_for_location(&center, 25_000.0).unwrap();
    let again = join_queries(queries.clone());
    assert_eq!(again, queries);
}

#[test]
fn test_touching_prefix_ranges_are_merged() {
    let center = Point::new(44.6745, -28.4679);
    let queries = queries_for_location(&center, 2074.7).unwrap();
    assert!(queries.is_fully_joined());
    assert!(queries.contains_point(&center).unwrap());

    let ranges: Vec<(u128, u128)> = queries.iter().filter_map(|q| q.bit_range()).collect();
    assert_eq!(ranges.len(), queries.len());
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            assert!(a.1 < b.0 || b.1 < a.0, "{:?} touches {:?} in {:?}", a, b, queries);
        }
    }
}

#[test]
fn test_planner_without_merge_is_superset() {
    let center = Point::new(-0.1278, 51.5074);
    let planner = QueryPlanner::builder().merge_queries(false).build().unwrap();
    let unmerged = planner.queries_for_location(&center, 5_000.0).unwrap();
    let merged = queries_for_location(&center, 5_000.0).unwrap();

    assert!(merged.len() <= unmerged.len());
    assert_eq!(unmerged.clone().joined(), merged);
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        encode_geohash(91.0, 0.0, 10),
        Err(GeoHashError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        encode_geohash(0.0, 0.0, 23),
        Err(GeoHashError::InvalidPrecision(23))
    ));
    assert!(matches!(
        queries_for_location(&Point::new(0.0, 0.0), f64::NAN),
        Err(GeoHashError::InvalidDistance(_))
    ));
    assert!(matches!(
        queries_for_region(&CoordinateRegion::new(Point::new(0.0, 0.0), 1.0, -1.0)),
        Err(GeoHashError::InvalidSpan { .. })
    ));
}

#[test]
fn test_query_set_json() {
    let queries = queries_for_location(&Point::new(-122.4194, 37.7749), 1000.0).unwrap();
    let json = serde_json::to_string(&queries).unwrap();
    let back: GeoHashQuerySet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, queries);
}
