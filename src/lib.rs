//! GeoHash encoding and range-query planning for location lookups.
//!
//! Points are stored under their geohash string; a search area becomes a
//! small set of string ranges that a sorted key-value store can scan.
//!
//! ```rust
//! use geohash_query::{Point, encode_geohash, queries_for_location};
//!
//! let hash = encode_geohash(37.7749, -122.4194, 10)?;
//! assert_eq!(hash.as_str().len(), 10);
//!
//! let center = Point::new(-122.4194, 37.7749);
//! let queries = queries_for_location(&center, 1000.0)?;
//! for query in &queries {
//!     println!("scan {} .. {}", query.start_value(), query.end_value());
//! }
//! assert!(queries.contains_geohash(&hash));
//! # Ok::<(), geohash_query::GeoHashError>(())
//! ```

pub mod base32;
pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod geohash;
pub mod planner;
pub mod query;
pub mod types;

pub use builder::QueryPlannerBuilder;
pub use config::Config;
pub use error::{GeoHashError, Result};
pub use geohash::{DEFAULT_PRECISION, GeoHash, MAX_BITS, MAX_PRECISION};
pub use planner::QueryPlanner;
pub use query::{END_SENTINEL, GeoHashQuery, GeoHashQuerySet, join_queries};
pub use types::{CoordinateRegion, CoordinateSpan, GeoBoundingBox};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode a coordinate as a geohash of `precision` characters (1-22).
///
/// # Errors
///
/// * `InvalidCoordinate` if latitude or longitude is out of range
/// * `InvalidPrecision` if precision is outside 1-22
pub fn encode_geohash(latitude: f64, longitude: f64, precision: usize) -> Result<GeoHash> {
    GeoHash::encode(latitude, longitude, precision)
}

/// Whether `s` is a non-empty string of geohash base32 characters.
pub fn is_valid_geohash(s: &str) -> bool {
    GeoHash::is_valid(s)
}

/// Merged queries covering every point within `radius` meters of `center`.
pub fn queries_for_location(center: &Point, radius: f64) -> Result<GeoHashQuerySet> {
    QueryPlanner::new().queries_for_location(center, radius)
}

/// Merged queries covering a map region.
pub fn queries_for_region(region: &CoordinateRegion) -> Result<GeoHashQuerySet> {
    QueryPlanner::new().queries_for_region(region)
}

/// Merged queries covering a bounding box.
pub fn queries_for_bounding_box(bbox: &GeoBoundingBox) -> Result<GeoHashQuerySet> {
    QueryPlanner::new().queries_for_bounding_box(bbox)
}

/// Common imports
pub mod prelude {

    pub use crate::{GeoHashError, QueryPlanner, QueryPlannerBuilder, Result};

    pub use crate::{GeoHash, GeoHashQuery, GeoHashQuerySet};

    pub use crate::{CoordinateRegion, CoordinateSpan, GeoBoundingBox};

    pub use crate::{
        encode_geohash, is_valid_geohash, queries_for_bounding_box, queries_for_location,
        queries_for_region,
    };

    pub use crate::Config;

    pub use geo::Point;
}
