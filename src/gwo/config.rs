//! GWO configuration.

use crate::error::{OptimError, Result};
use crate::interval::SearchInterval;

/// Number of leaders (alpha, beta, delta); also the smallest valid pack.
pub const LEADER_COUNT: usize = 3;

/// Configuration for the Grey Wolf Optimizer.
///
/// # Examples
///
/// ```
/// use u_scalaropt::gwo::GwoConfig;
///
/// let config = GwoConfig::default()
///     .with_wolves_count(30)
///     .with_max_iterations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GwoConfig {
    /// Pack size. At least [`LEADER_COUNT`].
    pub wolves_count: usize,

    /// Interval every wolf is clamped into.
    pub interval: SearchInterval,

    /// Horizon of the linear decay `a = 2 - 2 * generation / max_iterations`.
    ///
    /// This only shapes the exploration schedule; the optimizer keeps
    /// stepping past it, with `a` turning negative.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            wolves_count: 50,
            interval: SearchInterval::default(),
            max_iterations: 100,
            seed: None,
        }
    }
}

impl GwoConfig {
    /// Sets the pack size.
    pub fn with_wolves_count(mut self, n: usize) -> Self {
        self.wolves_count = n;
        self
    }

    /// Sets the search interval.
    pub fn with_interval(mut self, interval: SearchInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the decay horizon.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.wolves_count < LEADER_COUNT {
            return Err(OptimError::PopulationTooSmall {
                min: LEADER_COUNT,
                actual: self.wolves_count,
            });
        }
        if self.max_iterations == 0 {
            return Err(OptimError::ZeroMaxIterations);
        }
        self.interval.validate()
    }
}
