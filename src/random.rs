//! Random-number helpers.
//!
//! Every optimizer owns a private [`StdRng`]. Nothing in this crate uses a
//! process-global generator, so two optimizers seeded alike replay the same
//! run regardless of what else is executing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh one when absent.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Uniform draw from `[0, 1)`.
#[inline]
pub fn unit<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(unit(&mut a).to_bits(), unit(&mut b).to_bits());
        }
    }

    #[test]
    fn test_unit_range() {
        let mut rng = create_rng(42);
        for _ in 0..10_000 {
            let u = unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_optional_seed() {
        let mut a = rng_from_seed(Some(3));
        let mut b = create_rng(3);
        assert_eq!(unit(&mut a).to_bits(), unit(&mut b).to_bits());
    }
}
