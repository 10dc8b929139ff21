//! Entry point tying the codec and the decomposer to a configuration.

use crate::builder::QueryPlannerBuilder;
use crate::compute::decompose;
use crate::config::Config;
use crate::error::{GeoHashError, Result};
use crate::geohash::GeoHash;
use crate::query::GeoHashQuerySet;
use crate::types::{CoordinateRegion, GeoBoundingBox};
use geo::Point;

/// Plans geohash range queries for circles and map regions.
///
/// A planner holds only its configuration; it is cheap to clone and safe to
/// share between threads.
///
/// # Examples
///
/// ```rust
/// use geohash_query::QueryPlanner;
/// use geo::Point;
///
/// let planner = QueryPlanner::new();
/// let center = Point::new(-122.4194, 37.7749);
/// let queries = planner.queries_for_location(&center, 1000.0)?;
///
/// let hash = planner.encode_point(&center)?;
/// assert!(queries.contains_geohash(&hash));
/// # Ok::<(), geohash_query::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryPlanner {
    config: Config,
}

impl QueryPlanner {
    /// Create a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> QueryPlannerBuilder {
        QueryPlannerBuilder::new()
    }

    /// Create a planner from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(GeoHashError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub(crate) fn from_validated(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encode a coordinate at the configured default precision.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<GeoHash> {
        GeoHash::encode(latitude, longitude, self.config.default_precision)
    }

    /// Encode a point (x = longitude, y = latitude) at the configured default
    /// precision.
    pub fn encode_point(&self, point: &Point) -> Result<GeoHash> {
        GeoHash::from_point(point, self.config.default_precision)
    }

    /// Queries covering every point within `radius` meters of `center`.
    ///
    /// The result is a superset of the circle; callers filter candidates by
    /// exact distance.
    pub fn queries_for_location(&self, center: &Point, radius: f64) -> Result<GeoHashQuerySet> {
        let queries = decompose::cover_location(center, radius)?;
        Ok(self.finish(queries))
    }

    /// Queries covering a map region given by center and span.
    pub fn queries_for_region(&self, region: &CoordinateRegion) -> Result<GeoHashQuerySet> {
        let queries = decompose::cover_region(region)?;
        Ok(self.finish(queries))
    }

    /// Queries covering a bounding box, which may cross the antimeridian.
    pub fn queries_for_bounding_box(&self, bbox: &GeoBoundingBox) -> Result<GeoHashQuerySet> {
        let queries = decompose::cover_bounding_box(bbox)?;
        Ok(self.finish(queries))
    }

    fn finish(&self, queries: GeoHashQuerySet) -> GeoHashQuerySet {
        if self.config.merge_queries {
            queries.joined()
        } else {
            queries
        }
    }
}
