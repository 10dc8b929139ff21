//! Meter/degree conversions and geohash bit-depth selection.

use crate::base32::BITS_PER_CHAR;
use crate::geohash::MAX_BITS;
use std::f64::consts::PI;

pub use geohash_query_types::bbox::wrap_longitude;

/// Length of one degree of latitude, in meters.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 110_574.0;

/// Length of a meridian great circle, in meters.
pub const EARTH_MERIDIONAL_CIRCUMFERENCE: f64 = 40_007_860.0;

/// WGS84 equatorial radius, in meters.
pub const EARTH_EQ_RADIUS: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
pub const E2: f64 = 0.00669447819799;

/// Meters-per-degree below this are treated as zero (the poles).
pub const EPSILON: f64 = 1e-12;

/// Convert a north-south distance to degrees of latitude.
#[inline]
pub fn meters_to_latitude_degrees(distance: f64) -> f64 {
    distance / METERS_PER_DEGREE_LATITUDE
}

/// Convert an east-west distance to degrees of longitude at `latitude`.
///
/// Uses the WGS84 radius of curvature, so a degree of longitude shrinks
/// towards the poles. The result is capped at 360; at the poles any positive
/// distance spans the full circle.
///
/// # Examples
///
/// ```
/// use geohash_query::compute::geo_utils::meters_to_longitude_degrees;
///
/// assert!((meters_to_longitude_degrees(111_320.0, 0.0) - 1.0).abs() < 1e-5);
/// assert_eq!(meters_to_longitude_degrees(1000.0, 90.0), 360.0);
/// assert_eq!(meters_to_longitude_degrees(0.0, 90.0), 0.0);
/// ```
pub fn meters_to_longitude_degrees(distance: f64, latitude: f64) -> f64 {
    let radians = latitude.to_radians();
    let numerator = radians.cos() * EARTH_EQ_RADIUS * PI / 180.0;
    let denominator = 1.0 / (1.0 - E2 * radians.sin() * radians.sin()).sqrt();
    let meters_per_degree = numerator * denominator;

    if meters_per_degree < EPSILON {
        if distance > 0.0 { 360.0 } else { 0.0 }
    } else {
        (distance / meters_per_degree).min(360.0)
    }
}

fn bits_for_latitude(resolution: f64) -> f64 {
    (EARTH_MERIDIONAL_CIRCUMFERENCE / 2.0 / resolution)
        .log2()
        .min(f64::from(MAX_BITS))
}

fn bits_for_longitude(resolution: f64, latitude: f64) -> f64 {
    let degrees = meters_to_longitude_degrees(resolution, latitude);
    if degrees.abs() > 0.0 {
        (360.0 / degrees).log2().max(1.0)
    } else {
        // zero-sized cells: deepest level
        f64::from(MAX_BITS)
    }
}

/// Number of geohash bits whose cells are still at least `size` meters in both
/// directions around `center` (x = longitude, y = latitude).
///
/// Latitude bits come from the meridional circumference. Longitude bits are
/// evaluated at the northern and southern edge of the box, since a degree of
/// longitude has a different length at each. Bits alternate longitude first,
/// so an even total splits evenly and an odd one carries one extra longitude
/// bit. The result never exceeds [`MAX_BITS`]; a zero size selects the maximum.
///
/// # Examples
///
/// ```
/// use geohash_query::compute::geo_utils::bits_for_bounding_box;
/// use geo::Point;
///
/// assert_eq!(bits_for_bounding_box(&Point::new(0.0, 35.0), 1000.0), 28);
/// assert_eq!(bits_for_bounding_box(&Point::new(0.0, 75.0), 2000.0), 23);
/// ```
pub fn bits_for_bounding_box(center: &geo::Point, size: f64) -> u32 {
    let latitude_delta = meters_to_latitude_degrees(size);
    let north = (center.y() + latitude_delta).min(90.0);
    let south = (center.y() - latitude_delta).max(-90.0);

    let bits_latitude = bits_for_latitude(size).floor().max(0.0) * 2.0;
    let bits_longitude_north = bits_for_longitude(size, north).floor().max(1.0) * 2.0 - 1.0;
    let bits_longitude_south = bits_for_longitude(size, south).floor().max(1.0) * 2.0 - 1.0;

    bits_latitude
        .min(bits_longitude_north)
        .min(bits_longitude_south)
        .min(f64::from(MAX_BITS)) as u32
}

/// Number of geohash bits whose cells are at least half of a region's extent
/// in both directions. Always at least 1.
///
/// Spans are in degrees; a zero span selects the maximum depth.
pub fn bits_for_region(latitude_span: f64, longitude_span: f64) -> u32 {
    let max = f64::from(MAX_BITS);
    let bits_latitude = (180.0 / (latitude_span / 2.0)).log2().floor().clamp(0.0, max) * 2.0;
    let bits_longitude =
        (360.0 / (longitude_span / 2.0)).log2().floor().clamp(1.0, max) * 2.0 - 1.0;

    bits_latitude.min(bits_longitude).clamp(1.0, max) as u32
}

/// Height and width, in degrees, of a cell described by `bits` bits.
pub fn cell_size_degrees(bits: u32) -> (f64, f64) {
    let longitude_bits = bits.div_ceil(2) as i32;
    let latitude_bits = (bits / 2) as i32;
    (
        180.0 / 2f64.powi(latitude_bits),
        360.0 / 2f64.powi(longitude_bits),
    )
}

/// Geohash length, in characters, needed to carry `bits` bits.
#[inline]
pub fn precision_for_bits(bits: u32) -> usize {
    bits.div_ceil(BITS_PER_CHAR) as usize
}
