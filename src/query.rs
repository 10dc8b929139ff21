//! Geohash range queries and sets of them.
//!
//! A [`GeoHashQuery`] is a half-open string range `[start, end)` selecting every
//! geohash that shares one bit prefix. Because base32 symbols sort in the same
//! order as their values, such a range can be handed directly to any ordered
//! key-value store.

use crate::base32::{self, BITS_PER_CHAR};
use crate::error::{GeoHashError, Result};
use crate::geohash::{GeoHash, MAX_BITS, MAX_PRECISION};
use geo::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

/// Sorts after every base32 symbol; `prefix + END_SENTINEL` is one past the
/// last geohash starting with `prefix`.
pub const END_SENTINEL: char = '~';

/// A half-open range `[start_value, end_value)` of geohash strings.
///
/// # Examples
///
/// ```
/// use geohash_query::{GeoHash, GeoHashQuery};
///
/// let hash = GeoHash::parse("64m9yn96mx").unwrap();
/// let query = GeoHashQuery::for_geohash(&hash, 10);
/// assert_eq!(query.start_value(), "64");
/// assert_eq!(query.end_value(), "65");
/// assert!(query.contains(&hash));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GeoHashQuery {
    start_value: String,
    end_value: String,
}

impl GeoHashQuery {
    /// Create a query from its boundary strings.
    ///
    /// The strings are taken as-is; `start_value` should sort before
    /// `end_value`.
    pub fn new(start_value: impl Into<String>, end_value: impl Into<String>) -> Self {
        Self {
            start_value: start_value.into(),
            end_value: end_value.into(),
        }
    }

    /// The range of all geohashes sharing the first `bits` bits of `hash`.
    ///
    /// `bits` is clamped to `[1, 110]`. When `hash` is shorter than the
    /// characters needed for `bits`, the range covers everything prefixed by
    /// the whole hash.
    pub fn for_geohash(hash: &GeoHash, bits: u32) -> Self {
        let bits = bits.clamp(1, MAX_BITS);
        let precision = bits.div_ceil(BITS_PER_CHAR) as usize;
        if hash.precision() < precision {
            return Self::new(hash.as_str(), format!("{hash}{END_SENTINEL}"));
        }
        Self::from_prefix(hash.prefix_bits(bits), bits)
    }

    /// The range of all geohashes whose leading `bits` bits equal `prefix`.
    ///
    /// The prefix is padded with zero bits to a whole character for the start
    /// value. The end value adds one at the last significant bit; when that
    /// carries out of the final character, the end becomes the shared base
    /// followed by [`END_SENTINEL`].
    pub fn from_prefix(prefix: u128, bits: u32) -> Self {
        let bits = bits.clamp(1, MAX_BITS);
        let precision = bits.div_ceil(BITS_PER_CHAR);
        let unused_bits = precision * BITS_PER_CHAR - bits;

        let prefix = prefix & ((1u128 << bits) - 1);
        let start = prefix << unused_bits;
        let end = start + (1u128 << unused_bits);
        let base = start >> BITS_PER_CHAR;

        let start_value = base32::encode_bits(start, precision as usize);
        let end_value = if end >> BITS_PER_CHAR != base {
            let mut value = base32::encode_bits(base, precision as usize - 1);
            value.push(END_SENTINEL);
            value
        } else {
            base32::encode_bits(end, precision as usize)
        };

        Self {
            start_value,
            end_value,
        }
    }

    /// Inclusive lower bound.
    pub fn start_value(&self) -> &str {
        &self.start_value
    }

    /// Exclusive upper bound.
    pub fn end_value(&self) -> &str {
        &self.end_value
    }

    /// Whether `hash` falls inside `[start_value, end_value)`.
    ///
    /// Hashes at least as long as the query's bounds compare correctly; a
    /// shorter hash denotes a larger cell and only matches when its string
    /// itself lies in the range.
    pub fn contains(&self, hash: &GeoHash) -> bool {
        self.start_value.as_str() <= hash.as_str() && hash.as_str() < self.end_value.as_str()
    }

    /// Whether this query and `other` overlap, touch end to start, or one
    /// contains the other.
    ///
    /// For geohash bounds, touching is decided in bit-prefix space, so an end
    /// of `p~` touches the start of the prefix following `p`.
    pub fn can_join_with(&self, other: &GeoHashQuery) -> bool {
        self.union(other).is_some()
    }

    /// The smallest query covering both this one and `other`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQueryJoin` if [`can_join_with`](Self::can_join_with)
    /// does not hold.
    pub fn join_with(&self, other: &GeoHashQuery) -> Result<GeoHashQuery> {
        self.union(other)
            .ok_or_else(|| GeoHashError::InvalidQueryJoin(self.to_string(), other.to_string()))
    }

    /// The covered interval of 110-bit geohash values, or `None` when either
    /// bound is not a geohash string (optionally ending in [`END_SENTINEL`]).
    ///
    /// ```
    /// use geohash_query::GeoHashQuery;
    ///
    /// let (start, end) = GeoHashQuery::new("kfzy0", "kfzy0~").bit_range().unwrap();
    /// let (next, _) = GeoHashQuery::new("kfzy1", "kfzy2").bit_range().unwrap();
    /// assert_eq!(end, next);
    /// assert!(start < end);
    /// ```
    pub fn bit_range(&self) -> Option<(u128, u128)> {
        if self.start_value.is_empty() {
            return None;
        }
        let start = aligned_value(&self.start_value, 0)?;
        let end = match self.end_value.strip_suffix(END_SENTINEL) {
            Some(prefix) => aligned_value(prefix, 1)?,
            None => aligned_value(&self.end_value, 0)?,
        };
        Some((start, end))
    }

    fn union(&self, other: &GeoHashQuery) -> Option<GeoHashQuery> {
        match (self.bit_range(), other.bit_range()) {
            (Some((start, end)), Some((other_start, other_end))) => {
                if start > other_end || other_start > end {
                    return None;
                }
                let start_value = if start <= other_start {
                    &self.start_value
                } else {
                    &other.start_value
                };
                let end_value = if end >= other_end {
                    &self.end_value
                } else {
                    &other.end_value
                };
                Some(Self::new(start_value, end_value))
            }
            _ => self.union_by_string(other),
        }
    }

    /// Join on plain string order, for bounds outside the geohash alphabet.
    fn union_by_string(&self, other: &GeoHashQuery) -> Option<GeoHashQuery> {
        if self.start_value > other.end_value || other.start_value > self.end_value {
            return None;
        }
        Some(Self::new(
            self.start_value.as_str().min(other.start_value.as_str()),
            self.end_value.as_str().max(other.end_value.as_str()),
        ))
    }
}

/// `s` as a geohash value plus `increment`, left-aligned to [`MAX_BITS`].
fn aligned_value(s: &str, increment: u128) -> Option<u128> {
    let value = base32::decode_str(s).ok()? + increment;
    Some(value << (MAX_BITS - s.len() as u32 * BITS_PER_CHAR))
}

impl fmt::Display for GeoHashQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_value, self.end_value)
    }
}

/// A duplicate-free set of queries that together cover a region.
///
/// Iteration order is the ordering of [`GeoHashQuery`], so results are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoHashQuerySet {
    queries: BTreeSet<GeoHashQuery>,
}

impl GeoHashQuerySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query; returns `false` if it was already present.
    pub fn insert(&mut self, query: GeoHashQuery) -> bool {
        self.queries.insert(query)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, GeoHashQuery> {
        self.queries.iter()
    }

    pub fn contains(&self, query: &GeoHashQuery) -> bool {
        self.queries.contains(query)
    }

    /// Whether any query in the set contains `hash`.
    pub fn contains_geohash(&self, hash: &GeoHash) -> bool {
        self.queries.iter().any(|query| query.contains(hash))
    }

    /// Whether any query in the set contains the geohash of `point`
    /// (x = longitude, y = latitude).
    ///
    /// The point is encoded at maximum precision, which compares correctly
    /// against queries of every depth.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        let hash = GeoHash::from_point(point, MAX_PRECISION)?;
        Ok(self.contains_geohash(&hash))
    }

    /// Merge joinable queries until no pair can be joined.
    pub fn joined(self) -> Self {
        join_queries(self.queries)
    }

    /// Whether no two queries in the set can be joined.
    ///
    /// Geohash queries are compared as 110-bit intervals; sorted by start,
    /// each must begin strictly after every earlier one ends.
    pub fn is_fully_joined(&self) -> bool {
        let ranges: Option<Vec<(u128, u128)>> =
            self.queries.iter().map(GeoHashQuery::bit_range).collect();
        if let Some(mut ranges) = ranges {
            ranges.sort_unstable();
            let mut reached: Option<u128> = None;
            for (start, end) in ranges {
                if reached.is_some_and(|reached| start <= reached) {
                    return false;
                }
                reached = Some(reached.map_or(end, |reached| reached.max(end)));
            }
            return true;
        }

        let queries: Vec<&GeoHashQuery> = self.queries.iter().collect();
        queries.iter().enumerate().all(|(i, query)| {
            queries[i + 1..]
                .iter()
                .all(|other| !query.can_join_with(other))
        })
    }
}

/// Merge queries into a set in which no two members can be joined.
///
/// Each join may enable further joins, so scanning restarts after every merge
/// until a full pass finds nothing to combine.
pub fn join_queries<I>(queries: I) -> GeoHashQuerySet
where
    I: IntoIterator<Item = GeoHashQuery>,
{
    let mut pending: SmallVec<[GeoHashQuery; 18]> = queries.into_iter().collect();
    let before = pending.len();

    'scan: loop {
        for i in 0..pending.len() {
            for j in (i + 1)..pending.len() {
                if let Some(joined) = pending[i].union(&pending[j]) {
                    pending.swap_remove(j);
                    pending[i] = joined;
                    continue 'scan;
                }
            }
        }
        break;
    }

    log::debug!("Joined {} queries into {}", before, pending.len());
    pending.into_iter().collect()
}

impl FromIterator<GeoHashQuery> for GeoHashQuerySet {
    fn from_iter<T: IntoIterator<Item = GeoHashQuery>>(iter: T) -> Self {
        Self {
            queries: iter.into_iter().collect(),
        }
    }
}

impl Extend<GeoHashQuery> for GeoHashQuerySet {
    fn extend<T: IntoIterator<Item = GeoHashQuery>>(&mut self, iter: T) {
        self.queries.extend(iter);
    }
}

impl IntoIterator for GeoHashQuerySet {
    type Item = GeoHashQuery;
    type IntoIter = btree_set::IntoIter<GeoHashQuery>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeoHashQuerySet {
    type Item = &'a GeoHashQuery;
    type IntoIter = btree_set::Iter<'a, GeoHashQuery>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}
