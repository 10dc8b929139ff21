//! Compute layer for geohash query planning.
//!
//! This module holds the numeric side of the crate, separate from the codec
//! and the query types:
//! - Distance and bit-depth math on the reference ellipsoid
//! - Decomposition of circles and boxes into prefix queries
//! - Input validation

pub mod decompose;
pub mod geo_utils;
pub mod validation;
