//! Geographic input types shared with the `geohash-query-types` crate.

pub use geohash_query_types::bbox::{GeoBoundingBox, wrap_longitude};
pub use geohash_query_types::region::{CoordinateRegion, CoordinateSpan};
