//! Parent selection.
//!
//! The GA uses tournament selection with a fixed size of 3: draw three
//! chromosomes uniformly **with replacement** and keep the fittest.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Chromosome;
use rand::Rng;

/// Number of contestants per tournament.
pub const TOURNAMENT_SIZE: usize = 3;

/// Returns the index of the tournament winner.
///
/// Fitness is maximized. On equal fitness the earliest drawn contestant
/// wins. Returns `None` for an empty population.
pub fn tournament<R: Rng>(population: &[Chromosome], rng: &mut R) -> Option<usize> {
    tournament_of_size(population, TOURNAMENT_SIZE, rng)
}

fn tournament_of_size<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> Option<usize> {
    let n = population.len();
    if n == 0 {
        return None;
    }

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    Some(best_idx)
}
