//! Decomposition of circles and boxes into covering geohash queries.
//!
//! The pipeline is the same for every input shape:
//!
//! 1. pick a bit depth whose cells are no smaller than half the box,
//! 2. split boxes that cross the antimeridian into an eastern and a western part,
//! 3. sample the corners, edge midpoints and center of each part and turn the
//!    cell under every sample into a prefix query,
//! 4. optionally merge the queries (see [`join_queries`](crate::query::join_queries)).
//!
//! With cells at least half the box in each direction, every cell touching
//! the box contains one of the three samples along each axis, so the union of
//! the sampled cells covers the whole box.

use crate::compute::geo_utils::{
    bits_for_bounding_box, bits_for_region, cell_size_degrees, meters_to_latitude_degrees,
    meters_to_longitude_degrees, precision_for_bits, wrap_longitude,
};
use crate::compute::validation::{
    validate_bounding_box, validate_distance, validate_geographic_point, validate_span,
};
use crate::error::Result;
use crate::geohash::GeoHash;
use crate::query::{GeoHashQuery, GeoHashQuerySet};
use crate::types::{CoordinateRegion, GeoBoundingBox};
use geo::Point;

/// Unmerged queries covering every point within `radius` meters of `center`
/// (x = longitude, y = latitude).
///
/// # Errors
///
/// * `InvalidCoordinate` if `center` is out of range
/// * `InvalidDistance` if `radius` is negative or not finite
pub fn cover_location(center: &Point, radius: f64) -> Result<GeoHashQuerySet> {
    validate_geographic_point(center)?;
    validate_distance(radius)?;

    let bits = bits_for_bounding_box(center, radius).max(1);
    let bbox = location_bounding_box(center, radius);
    log::debug!(
        "Covering {}m around ({}, {}) starting at {} bits",
        radius,
        center.y(),
        center.x(),
        bits
    );

    cover_box(&bbox, bits)
}

/// Unmerged queries covering a map region.
///
/// # Errors
///
/// * `InvalidCoordinate` if the region center is out of range
/// * `InvalidSpan` if either delta is negative or not finite
pub fn cover_region(region: &CoordinateRegion) -> Result<GeoHashQuerySet> {
    validate_geographic_point(&region.center)?;
    validate_span(&region.span)?;
    cover_bounding_box(&region.bounding_box())
}

/// Unmerged queries covering a bounding box, which may cross the antimeridian.
///
/// # Errors
///
/// * `InvalidCoordinate` if an edge is out of range
/// * `InvalidSpan` if `south > north`
pub fn cover_bounding_box(bbox: &GeoBoundingBox) -> Result<GeoHashQuerySet> {
    validate_bounding_box(bbox)?;
    let bits = bits_for_region(bbox.height(), bbox.width());
    cover_box(bbox, bits)
}

/// The box spanned by a circle: latitude clamped at the poles, longitude
/// widened by the larger of the deltas at its northern and southern edge.
pub fn location_bounding_box(center: &Point, radius: f64) -> GeoBoundingBox {
    let (latitude, longitude) = (center.y(), center.x());
    let latitude_delta = meters_to_latitude_degrees(radius);
    let north = (latitude + latitude_delta).min(90.0);
    let south = (latitude - latitude_delta).max(-90.0);

    let longitude_delta = meters_to_longitude_degrees(radius, north)
        .max(meters_to_longitude_degrees(radius, south));
    if longitude_delta >= 180.0 {
        return GeoBoundingBox::full_width(south, north);
    }

    GeoBoundingBox::new(
        wrap_longitude(longitude - longitude_delta),
        south,
        wrap_longitude(longitude + longitude_delta),
        north,
    )
}

fn cover_box(bbox: &GeoBoundingBox, bits: u32) -> Result<GeoHashQuerySet> {
    let bits = coarsen_to_cover(bits, bbox.height() / 2.0, bbox.width() / 2.0);
    let precision = precision_for_bits(bits);
    let parts = bbox.split_antimeridian();
    if parts.len() > 1 {
        log::debug!(
            "Splitting box at the antimeridian: west {} east {}",
            bbox.west,
            bbox.east
        );
    }

    let mut queries = GeoHashQuerySet::new();
    for part in &parts {
        for (latitude, longitude) in sample_points(part) {
            let hash = GeoHash::encode(latitude, longitude, precision)?;
            queries.insert(GeoHashQuery::for_geohash(&hash, bits));
        }
    }

    log::debug!("Built {} queries at {} bits", queries.len(), bits);
    Ok(queries)
}

/// Reduce `bits` until one cell is at least `half_height` by `half_width`
/// degrees.
fn coarsen_to_cover(mut bits: u32, half_height: f64, half_width: f64) -> u32 {
    while bits > 1 {
        let (cell_height, cell_width) = cell_size_degrees(bits);
        if cell_height >= half_height && cell_width >= half_width {
            break;
        }
        bits -= 1;
    }
    bits
}

/// Corners, edge midpoints and center of a box that does not cross the
/// antimeridian, as (latitude, longitude).
fn sample_points(part: &GeoBoundingBox) -> [(f64, f64); 9] {
    let latitudes = [part.south, (part.south + part.north) / 2.0, part.north];
    let longitudes = [part.west, (part.west + part.east) / 2.0, part.east];

    let mut points = [(0.0, 0.0); 9];
    for (i, &latitude) in latitudes.iter().enumerate() {
        for (j, &longitude) in longitudes.iter().enumerate() {
            points[i * 3 + j] = (latitude, longitude);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::MAX_PRECISION;

    #[test]
    fn test_location_box_is_symmetric() {
        let bbox = location_bounding_box(&Point::new(10.0, 20.0), 10_000.0);
        assert!((bbox.north - 20.0 - (20.0 - bbox.south)).abs() < 1e-9);
        assert!((bbox.east - 10.0 - (10.0 - bbox.west)).abs() < 1e-9);
        assert!(!bbox.crosses_antimeridian());
    }

    #[test]
    fn test_location_box_wraps() {
        let bbox = location_bounding_box(&Point::new(179.99, 0.0), 5_000.0);
        assert!(bbox.crosses_antimeridian());
        assert!(bbox.west > 179.0);
        assert!(bbox.east < -179.0);
    }

    #[test]
    fn test_location_box_at_pole() {
        let bbox = location_bounding_box(&Point::new(0.0, 90.0), 1_000.0);
        assert!(bbox.is_full_width());
        assert_eq!(bbox.north, 90.0);
    }

    #[test]
    fn test_zero_radius_uses_point_cell() {
        let center = Point::new(-122.4194, 37.7749);
        let queries = cover_location(&center, 0.0).unwrap();
        assert_eq!(queries.len(), 1);

        let hash = GeoHash::from_point(&center, MAX_PRECISION).unwrap();
        let query = queries.iter().next().unwrap();
        assert_eq!(query.start_value(), hash.as_str());
        assert!(query.contains(&hash));
    }

    #[test]
    fn test_coarsen() {
        assert_eq!(coarsen_to_cover(110, 0.0, 0.0), 110);
        assert_eq!(coarsen_to_cover(10, 5.0, 10.0), 10);
        assert_eq!(coarsen_to_cover(10, 6.0, 10.0), 9);
        assert_eq!(coarsen_to_cover(30, 90.0, 180.0), 2);
        assert_eq!(coarsen_to_cover(30, 90.0, 360.0), 1);
    }

    #[test]
    fn test_sample_points() {
        let points = sample_points(&GeoBoundingBox::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[4], (10.0, 5.0));
        assert_eq!(points[8], (20.0, 10.0));
    }

    #[test]
    fn test_antimeridian_box_has_both_sides() {
        let queries = cover_bounding_box(&GeoBoundingBox::new(170.0, -10.0, -170.0, 10.0)).unwrap();
        assert!(queries.contains_point(&Point::new(175.0, 0.0)).unwrap());
        assert!(queries.contains_point(&Point::new(-175.0, 0.0)).unwrap());
        assert!(!queries.contains_point(&Point::new(0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_invalid_input() {
        assert!(cover_location(&Point::new(0.0, 91.0), 10.0).is_err());
        assert!(cover_location(&Point::new(0.0, 0.0), -1.0).is_err());
        assert!(cover_region(&CoordinateRegion::new(Point::new(0.0, 0.0), -1.0, 1.0)).is_err());
        assert!(cover_bounding_box(&GeoBoundingBox::new(0.0, 10.0, 1.0, 0.0)).is_err());
    }
}
