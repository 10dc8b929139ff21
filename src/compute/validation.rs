//! Validation for coordinates, precisions, distances and regions.

use crate::error::{GeoHashError, Result};
use crate::geohash::MAX_PRECISION;
use crate::types::{CoordinateSpan, GeoBoundingBox};
use geo::Point;

/// Validates a latitude/longitude pair.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geohash_query::compute::validation::validate_coordinate;
///
/// assert!(validate_coordinate(40.7128, -74.0060).is_ok());
/// assert!(validate_coordinate(95.0, -74.0).is_err());
/// assert!(validate_coordinate(40.0, 200.0).is_err());
/// ```
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !longitude.is_finite() {
        log::warn!("Rejecting coordinate with non-finite values");
        return Err(GeoHashError::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoHashError::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    Ok(())
}

/// Validates a 2D point (x = longitude, y = latitude).
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    validate_coordinate(point.y(), point.x())
}

/// Validates a geohash precision in characters.
pub fn validate_precision(precision: usize) -> Result<()> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GeoHashError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Validates a distance in meters: finite and non-negative.
pub fn validate_distance(meters: f64) -> Result<()> {
    if !meters.is_finite() {
        log::warn!("Rejecting non-finite distance");
        return Err(GeoHashError::InvalidDistance(meters));
    }
    if meters < 0.0 {
        return Err(GeoHashError::InvalidDistance(meters));
    }
    Ok(())
}

/// Validates a region span: both deltas finite and non-negative.
pub fn validate_span(span: &CoordinateSpan) -> Result<()> {
    let valid = |delta: f64| delta.is_finite() && delta >= 0.0;
    if !valid(span.latitude_delta) || !valid(span.longitude_delta) {
        return Err(GeoHashError::InvalidSpan {
            latitude_delta: span.latitude_delta,
            longitude_delta: span.longitude_delta,
        });
    }
    Ok(())
}

/// Validates a bounding box: all edges in range and `south <= north`.
///
/// `west > east` is accepted and means the box crosses the antimeridian.
pub fn validate_bounding_box(bbox: &GeoBoundingBox) -> Result<()> {
    validate_coordinate(bbox.south, bbox.west)?;
    validate_coordinate(bbox.north, bbox.east)?;

    if bbox.south > bbox.north {
        return Err(GeoHashError::InvalidSpan {
            latitude_delta: bbox.height(),
            longitude_delta: bbox.width(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(validate_coordinate(90.0, 180.0).is_ok());
        assert!(validate_coordinate(-90.0, -180.0).is_ok());
        assert!(validate_coordinate(90.0001, 0.0).is_err());
        assert!(validate_coordinate(0.0, -180.0001).is_err());
        assert!(validate_coordinate(f64::INFINITY, 0.0).is_err());
        assert!(validate_coordinate(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_point_uses_x_as_longitude() {
        assert!(validate_geographic_point(&Point::new(170.0, 80.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(80.0, 170.0)).is_err());
    }

    #[test]
    fn test_precision() {
        assert!(validate_precision(1).is_ok());
        assert!(validate_precision(22).is_ok());
        assert_eq!(validate_precision(0), Err(GeoHashError::InvalidPrecision(0)));
        assert_eq!(
            validate_precision(23),
            Err(GeoHashError::InvalidPrecision(23))
        );
    }

    #[test]
    fn test_distance() {
        assert!(validate_distance(0.0).is_ok());
        assert!(validate_distance(1000.0).is_ok());
        assert!(validate_distance(-1.0).is_err());
        assert!(validate_distance(f64::NAN).is_err());
        assert!(validate_distance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_span() {
        assert!(validate_span(&CoordinateSpan::new(0.0, 0.0)).is_ok());
        assert!(validate_span(&CoordinateSpan::new(10.0, 400.0)).is_ok());
        assert!(validate_span(&CoordinateSpan::new(-1.0, 1.0)).is_err());
        assert!(validate_span(&CoordinateSpan::new(1.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_bounding_box() {
        assert!(validate_bounding_box(&GeoBoundingBox::new(-10.0, -5.0, 10.0, 5.0)).is_ok());
        assert!(validate_bounding_box(&GeoBoundingBox::new(170.0, -5.0, -170.0, 5.0)).is_ok());
        assert!(validate_bounding_box(&GeoBoundingBox::new(-10.0, 5.0, 10.0, -5.0)).is_err());
        assert!(validate_bounding_box(&GeoBoundingBox::new(-190.0, 0.0, 10.0, 5.0)).is_err());
    }
}
