//! Binary-to-real decoding.
//!
//! A chromosome of `L` bits is read as an unsigned big-endian integer
//! `v in [0, 2^L - 1]` and mapped linearly onto the search interval:
//!
//! ```text
//! position = min + v / (2^L - 1) * (max - min)
//! ```
//!
//! The mapping is monotone in `v`. All-zero genes decode to exactly `min`
//! and all-one genes to exactly `max`.

use crate::interval::SearchInterval;

/// Largest integer representable with `length` bits, `2^length - 1`.
///
/// `length` must be in `1..=64`.
#[inline]
pub fn max_encoded(length: usize) -> u64 {
    debug_assert!((1..=64).contains(&length));
    u64::MAX >> (64 - length)
}

/// Reads `genes` as a big-endian unsigned integer.
///
/// Only the last 64 bits contribute if more are supplied.
pub fn genes_to_int(genes: &[bool]) -> u64 {
    genes
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Decodes `genes` into a position inside `interval`.
///
/// # Examples
///
/// ```
/// use u_scalaropt::ga::decode;
/// use u_scalaropt::SearchInterval;
///
/// let interval = SearchInterval::new(0.0, 15.0).unwrap();
/// let x = decode(&[true, true, true, false], &interval);
/// assert!((x - 14.0).abs() < 1e-12);
/// ```
pub fn decode(genes: &[bool], interval: &SearchInterval) -> f64 {
    if genes.is_empty() {
        return interval.min();
    }
    let max_value = max_encoded(genes.len().min(64));
    let value = genes_to_int(genes);
    if value == max_value {
        return interval.max();
    }
    let t = value as f64 / max_value as f64;
    interval.clamp(interval.min() + t * interval.span())
}
