//! Base32 symbol table used by geohash strings.
//!
//! The alphabet is the standard geohash one: digits followed by lowercase
//! letters without `a`, `i`, `l` and `o`. Symbols appear in ascending ASCII
//! order, so comparing two equal-length geohash strings lexicographically gives
//! the same answer as comparing their bit patterns numerically.

use crate::error::{GeoHashError, Result};
use crate::geohash::MAX_PRECISION;

/// Number of bits carried by one base32 symbol.
pub const BITS_PER_CHAR: u32 = 5;

/// The 32 symbols, indexed by value.
pub const BASE32_CHARS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < BASE32_CHARS.len() {
        table[BASE32_CHARS[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Get the symbol for a 5-bit value.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `value > 31`.
///
/// # Examples
///
/// ```
/// use geohash_query::base32::value_to_char;
///
/// assert_eq!(value_to_char(0).unwrap(), '0');
/// assert_eq!(value_to_char(10).unwrap(), 'b');
/// assert!(value_to_char(32).is_err());
/// ```
pub fn value_to_char(value: u32) -> Result<char> {
    BASE32_CHARS
        .get(value as usize)
        .map(|&b| b as char)
        .ok_or(GeoHashError::ValueOutOfRange(value))
}

/// Get the 5-bit value of a symbol.
///
/// # Errors
///
/// Returns `InvalidCharacter` if `c` is not in the alphabet. Uppercase letters
/// are rejected.
pub fn char_to_value(c: char) -> Result<u8> {
    let index = c as usize;
    if index >= DECODE_TABLE.len() || DECODE_TABLE[index] == INVALID {
        return Err(GeoHashError::InvalidCharacter(c));
    }
    Ok(DECODE_TABLE[index])
}

/// Whether `c` belongs to the alphabet.
#[inline]
pub fn is_base32_char(c: char) -> bool {
    char_to_value(c).is_ok()
}

/// Render the low `chars * 5` bits of `value` as symbols, most significant first.
pub fn encode_bits(value: u128, chars: usize) -> String {
    (0..chars)
        .rev()
        .map(|i| {
            let shift = i as u32 * BITS_PER_CHAR;
            BASE32_CHARS[((value >> shift) & 0x1f) as usize] as char
        })
        .collect()
}

/// Parse a symbol string back into its packed bit pattern.
///
/// # Errors
///
/// * `InvalidGeoHashString` if `s` is longer than [`MAX_PRECISION`]
/// * `InvalidCharacter` for a symbol outside the alphabet
pub fn decode_str(s: &str) -> Result<u128> {
    if s.len() > MAX_PRECISION {
        return Err(GeoHashError::InvalidGeoHashString(s.to_string()));
    }
    s.chars().try_fold(0u128, |acc, c| {
        Ok((acc << BITS_PER_CHAR) | u128::from(char_to_value(c)?))
    })
}
