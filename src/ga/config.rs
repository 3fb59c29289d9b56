//! GA configuration.
//!
//! [`GaConfig`] holds every parameter fixed for the lifetime of a run.

use crate::error::{OptimError, Result};
use crate::interval::SearchInterval;

/// Longest chromosome whose integer value fits a `u64`.
pub const MAX_CHROMOSOME_LENGTH: usize = 64;

/// Configuration for the binary-coded Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_scalaropt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.chromosome_length, 16);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_scalaropt::ga::GaConfig;
/// use u_scalaropt::SearchInterval;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_chromosome_length(24)
///     .with_interval(SearchInterval::new(-5.0, 5.0).unwrap())
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation. At least 2.
    pub population_size: usize,

    /// Bits per chromosome, `1..=64`.
    ///
    /// More bits give a finer position grid (`span / (2^L - 1)`) but each
    /// bit flip then moves a candidate less.
    pub chromosome_length: usize,

    /// Interval the chromosomes decode into.
    pub interval: SearchInterval,

    /// Probability that a child is produced by single-point crossover
    /// rather than cloned from its first parent.
    pub crossover_rate: f64,

    /// Independent per-bit flip probability applied to every child.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a new seed at every initialization.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            chromosome_length: 16,
            interval: SearchInterval::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the search interval.
    pub fn with_interval(mut self, interval: SearchInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(OptimError::PopulationTooSmall {
                min: 2,
                actual: self.population_size,
            });
        }
        if self.chromosome_length == 0 || self.chromosome_length > MAX_CHROMOSOME_LENGTH {
            return Err(OptimError::InvalidChromosomeLength(self.chromosome_length));
        }
        self.interval.validate()?;
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimError::InvalidRate { name, value })
    }
}
