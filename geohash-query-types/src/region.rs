use crate::bbox::{GeoBoundingBox, wrap_longitude};
use geo::Point;
use serde::{Deserialize, Serialize};

/// Latitude and longitude extents of a map region, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    /// Total north-to-south extent
    pub latitude_delta: f64,
    /// Total east-to-west extent
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A rectangular map region described by its center and span.
///
/// # Examples
///
/// ```
/// use geohash_query_types::region::CoordinateRegion;
/// use geo::Point;
///
/// let region = CoordinateRegion::new(Point::new(0.0, 0.0), 10.0, 20.0);
/// let bbox = region.bounding_box();
/// assert_eq!(bbox.west, -10.0);
/// assert_eq!(bbox.north, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRegion {
    /// Region center (x = longitude, y = latitude)
    pub center: Point,
    /// Region extents
    pub span: CoordinateSpan,
}

impl CoordinateRegion {
    /// Create a region from a center point and total latitude/longitude extents.
    pub fn new(center: Point, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            span: CoordinateSpan::new(latitude_delta, longitude_delta),
        }
    }

    /// Create a region from a center point and a span.
    pub fn from_span(center: Point, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// The edges of this region.
    ///
    /// Latitudes are clamped to the poles. Longitudes are wrapped onto
    /// `[-180, 180]`, so a region straddling the antimeridian yields a box with
    /// `west > east`. Spans of 360° or more cover every longitude.
    pub fn bounding_box(&self) -> GeoBoundingBox {
        let lat = self.center.y();
        let lon = self.center.x();
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lon = self.span.longitude_delta / 2.0;

        let north = (lat + half_lat).min(90.0);
        let south = (lat - half_lat).max(-90.0);

        if self.span.longitude_delta >= 360.0 {
            return GeoBoundingBox::full_width(south, north);
        }

        GeoBoundingBox::new(
            wrap_longitude(lon - half_lon),
            south,
            wrap_longitude(lon + half_lon),
            north,
        )
    }
}
