//! Error type shared by both optimizers.

use thiserror::Error;

/// Errors reported by optimizer initialization and stepping.
///
/// Configuration problems are rejected at `initialize` time so that no
/// optimizer ever holds state built from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// Population (or pack) is smaller than the algorithm requires.
    #[error("population size must be at least {min}, got {actual}")]
    PopulationTooSmall {
        /// Smallest accepted size.
        min: usize,
        /// Size that was requested.
        actual: usize,
    },

    /// Chromosome length outside `1..=64`.
    #[error("chromosome length must be between 1 and 64 bits, got {0}")]
    InvalidChromosomeLength(usize),

    /// Interval bounds are not finite, not ordered, or span too wide.
    #[error("invalid search interval [{min}, {max}]")]
    InvalidInterval {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// A probability parameter outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidRate {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// GWO decay horizon of zero iterations.
    #[error("max_iterations must be at least 1")]
    ZeroMaxIterations,

    /// Session generation budget of zero.
    #[error("max_generations must be at least 1")]
    InvalidMaxGenerations,

    /// Stepping an optimizer that was never initialized.
    #[error("optimizer has not been initialized")]
    NotInitialized,

    /// Unrecognized test function name.
    #[error("unknown test function `{0}`")]
    UnknownFunction(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptimError>;
