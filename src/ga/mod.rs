//! Binary-coded Genetic Algorithm.
//!
//! Each chromosome is a fixed-length bit string decoded into a position on
//! the search interval. One call to
//! [`GeneticAlgorithm::run_generation`] replaces the whole population:
//!
//! 1. The single fittest chromosome is copied unchanged (elitism).
//! 2. Every other slot gets a child of two tournament winners
//!    (size 3, with replacement), produced by single-point crossover and
//!    per-bit mutation, and evaluated immediately.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, chromosome length, interval, rates, seed
//! - [`GeneticAlgorithm`]: The optimizer state machine
//! - [`Chromosome`]: Genes plus their decoded [`Evaluation`]
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod encoding;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, MAX_CHROMOSOME_LENGTH};
pub use encoding::{decode, genes_to_int, max_encoded};
pub use runner::GeneticAlgorithm;
pub use selection::{tournament, TOURNAMENT_SIZE};
pub use types::{Chromosome, Evaluation};
