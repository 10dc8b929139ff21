//! # geohash-query-types
//!
//! Region types consumed by the geohash range-query planner.
//!
//! - **Bounding box types**: `GeoBoundingBox`, a west/south/east/north box that
//!   may cross the antimeridian
//! - **Region types**: `CoordinateRegion` and `CoordinateSpan`, a center point
//!   with latitude/longitude extents as used by map views
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geohash_query_types::bbox::GeoBoundingBox;
//! use geohash_query_types::region::CoordinateRegion;
//! use geo::Point;
//!
//! // A map view centered on San Francisco
//! let region = CoordinateRegion::new(Point::new(-122.4194, 37.7749), 0.2, 0.2);
//! let bbox = region.bounding_box();
//! assert!(bbox.contains_point(&Point::new(-122.45, 37.8)));
//!
//! // A box spanning the antimeridian splits into two halves
//! let pacific = GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0);
//! assert_eq!(pacific.split_antimeridian().len(), 2);
//! ```

pub mod bbox;
pub mod region;
