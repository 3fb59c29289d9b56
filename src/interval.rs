//! Closed search interval shared by both optimizers.

use crate::error::{OptimError, Result};
use rand::Rng;

/// The feasible domain `[min, max]` for every candidate position.
///
/// Construction guarantees `min < max`, both finite, and a finite span.
///
/// ```
/// use u_scalaropt::SearchInterval;
///
/// let interval = SearchInterval::new(-10.0, 10.0).unwrap();
/// assert_eq!(interval.span(), 20.0);
/// assert_eq!(interval.clamp(12.5), 10.0);
/// assert!(SearchInterval::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchInterval {
    min: f64,
    max: f64,
}

impl SearchInterval {
    /// Creates an interval, rejecting empty, reversed or non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let interval = Self { min, max };
        interval.validate()?;
        Ok(interval)
    }

    /// Checks the invariants. Needed again after deserialization.
    pub fn validate(&self) -> Result<()> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && (self.max - self.min).is_finite();
        if ok {
            Ok(())
        } else {
            Err(OptimError::InvalidInterval {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps `x` into the interval. NaN maps to `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }

    /// Uniform sample from `[min, max)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..self.max)
    }
}

impl Default for SearchInterval {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}
