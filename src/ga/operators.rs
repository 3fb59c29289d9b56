//! Bit-string genetic operators.
//!
//! - [`single_point_crossover`]: prefix from one parent, suffix from the other
//! - [`bit_flip_mutation`]: independent per-bit flips
//!
//! Both operate on `&[bool]` gene slices and never touch the parents.

use crate::random::unit;
use rand::Rng;

/// Single-point crossover applied with probability `rate`.
///
/// When applied, a cut point `c` is drawn uniformly from `[1, n - 1]` and the
/// child takes `parent1[..c]` followed by `parent2[c..]`. Otherwise, and
/// always for one-bit chromosomes, the child is a clone of `parent1`.
///
/// The rate draw happens on every call so the RNG stream does not depend
/// on chromosome length.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rate: f64,
    rng: &mut R,
) -> Vec<bool> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if unit(rng) >= rate || n < 2 {
        return parent1.to_vec();
    }

    let cut = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Flips each bit independently with probability `rate`, in place.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) {
    for bit in genes.iter_mut() {
        if unit(rng) < rate {
            *bit = !*bit;
        }
    }
}
