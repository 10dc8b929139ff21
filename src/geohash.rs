//! Geohash values: encoding coordinates into base32 cells and parsing them back.

use crate::base32::{self, BITS_PER_CHAR};
use crate::compute::validation::{validate_coordinate, validate_precision};
use crate::error::{GeoHashError, Result};
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Precision used when none is given.
pub const DEFAULT_PRECISION: usize = 10;

/// Longest supported geohash, in characters.
pub const MAX_PRECISION: usize = 22;

/// Total bits of a geohash at maximum precision.
pub const MAX_BITS: u32 = MAX_PRECISION as u32 * BITS_PER_CHAR;

/// An immutable geohash.
///
/// Holds the base32 string together with the interleaved bit pattern it
/// encodes (5 bits per character, longitude bit first). Equality and ordering
/// follow the string, which for equal-length hashes matches the numeric order
/// of the bit patterns.
///
/// # Examples
///
/// ```
/// use geohash_query::GeoHash;
///
/// let hash = GeoHash::encode(37.7853074, -122.4054274, 10).unwrap();
/// assert_eq!(hash.as_str(), "9q8yywe56g");
///
/// let parsed: GeoHash = "9q8yywe56g".parse().unwrap();
/// assert_eq!(parsed, hash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash {
    value: String,
    bits: u128,
}

impl GeoHash {
    /// Encode a coordinate into a geohash of `precision` characters.
    ///
    /// # Errors
    ///
    /// * `InvalidPrecision` if `precision` is outside `[1, 22]`
    /// * `InvalidCoordinate` if the latitude is outside `[-90, 90]`, the
    ///   longitude outside `[-180, 180]`, or either is not finite
    pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<Self> {
        validate_precision(precision)?;
        validate_coordinate(latitude, longitude)?;

        let mut lat_range = (-90.0_f64, 90.0_f64);
        let mut lon_range = (-180.0_f64, 180.0_f64);
        let mut bits = 0u128;

        for i in 0..precision as u32 * BITS_PER_CHAR {
            let (value, range) = if i % 2 == 0 {
                (longitude, &mut lon_range)
            } else {
                (latitude, &mut lat_range)
            };
            let mid = (range.0 + range.1) / 2.0;
            bits <<= 1;
            if value > mid {
                bits |= 1;
                range.0 = mid;
            } else {
                range.1 = mid;
            }
        }

        Ok(Self {
            value: base32::encode_bits(bits, precision),
            bits,
        })
    }

    /// Encode a coordinate at [`DEFAULT_PRECISION`].
    pub fn with_default_precision(latitude: f64, longitude: f64) -> Result<Self> {
        Self::encode(latitude, longitude, DEFAULT_PRECISION)
    }

    /// Encode a `geo::Point` (x = longitude, y = latitude).
    pub fn from_point(point: &Point, precision: usize) -> Result<Self> {
        Self::encode(point.y(), point.x(), precision)
    }

    /// Parse and validate a geohash string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeoHashString` for empty strings, strings longer than
    /// [`MAX_PRECISION`], or strings containing symbols outside the alphabet.
    pub fn parse(s: &str) -> Result<Self> {
        if !Self::is_valid(s) {
            return Err(GeoHashError::InvalidGeoHashString(s.to_string()));
        }
        let bits = base32::decode_str(s)?;
        Ok(Self {
            value: s.to_string(),
            bits,
        })
    }

    /// Whether `s` is a well-formed geohash.
    ///
    /// ```
    /// use geohash_query::GeoHash;
    ///
    /// assert!(GeoHash::is_valid("9q8yy"));
    /// assert!(!GeoHash::is_valid("abc!23"));
    /// assert!(!GeoHash::is_valid(""));
    /// ```
    pub fn is_valid(s: &str) -> bool {
        (1..=MAX_PRECISION).contains(&s.len()) && s.chars().all(base32::is_base32_char)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of characters.
    pub fn precision(&self) -> usize {
        self.value.len()
    }

    /// The interleaved bit pattern, right-aligned.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Number of significant bits in [`bits`](Self::bits).
    pub fn bit_len(&self) -> u32 {
        self.precision() as u32 * BITS_PER_CHAR
    }

    /// The leading `count` bits of the pattern, right-aligned.
    ///
    /// `count` is capped at [`bit_len`](Self::bit_len).
    pub fn prefix_bits(&self, count: u32) -> u128 {
        let count = count.min(self.bit_len());
        self.bits >> (self.bit_len() - count)
    }

    /// The cell this geohash denotes (x = longitude, y = latitude).
    pub fn bounds(&self) -> Rect {
        let mut lat_range = (-90.0_f64, 90.0_f64);
        let mut lon_range = (-180.0_f64, 180.0_f64);
        let len = self.bit_len();

        for i in 0..len {
            let range = if i % 2 == 0 {
                &mut lon_range
            } else {
                &mut lat_range
            };
            let mid = (range.0 + range.1) / 2.0;
            if (self.bits >> (len - 1 - i)) & 1 == 1 {
                range.0 = mid;
            } else {
                range.1 = mid;
            }
        }

        Rect::new(
            geo::coord! { x: lon_range.0, y: lat_range.0 },
            geo::coord! { x: lon_range.1, y: lat_range.1 },
        )
    }

    /// Center of the cell; an approximation of the encoded coordinate.
    pub fn center(&self) -> Point {
        self.bounds().center().into()
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for GeoHash {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = GeoHashError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<GeoHash> for String {
    fn from(hash: GeoHash) -> Self {
        hash.value
    }
}
