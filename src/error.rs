//! Error types for geohash encoding and query planning.

use thiserror::Error;

/// Errors raised while validating input to the codec or the query planner.
///
/// Every variant describes rejected input: none are retryable and no partial
/// results accompany them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoHashError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or non-finite
    #[error("invalid coordinate (latitude {latitude}, longitude {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Precision outside [1, 22]
    #[error("geohash precision must be between 1 and 22, got {0}")]
    InvalidPrecision(usize),

    /// Empty, over-long, or containing a character outside the geohash alphabet
    #[error("invalid geohash string: {0:?}")]
    InvalidGeoHashString(String),

    /// A single symbol outside the base32 alphabet
    #[error("invalid base32 character: {0:?}")]
    InvalidCharacter(char),

    /// A value that does not fit in one base32 symbol
    #[error("base32 value out of range [0, 31]: {0}")]
    ValueOutOfRange(u32),

    /// Negative or non-finite distance
    #[error("distance must be finite and non-negative, got {0}")]
    InvalidDistance(f64),

    /// Negative or non-finite region span
    #[error("invalid region span (latitude delta {latitude_delta}, longitude delta {longitude_delta})")]
    InvalidSpan {
        latitude_delta: f64,
        longitude_delta: f64,
    },

    /// Two queries that neither overlap nor touch
    #[error("cannot join queries {0} and {1}")]
    InvalidQueryJoin(String, String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeoHashError>;
