//! Objective functions to be minimized.
//!
//! Optimizers take a `&dyn Objective`. Any `Fn(f64) -> f64` qualifies, as do
//! the built-in [`TestFunction`]s.

use crate::error::OptimError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A scalar function `f: R -> R` to be minimized.
///
/// Implementations should be pure: optimizers call `evaluate` once per
/// candidate per generation and assume repeated calls agree.
pub trait Objective {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Fixed set of one-dimensional benchmark functions.
///
/// ```
/// use u_scalaropt::{Objective, TestFunction};
///
/// assert_eq!(TestFunction::Sphere.evaluate(3.0), 9.0);
/// assert_eq!("rastrigin".parse::<TestFunction>().unwrap(), TestFunction::Rastrigin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestFunction {
    /// `x^2`, minimum 0 at 0.
    #[default]
    Sphere,

    /// `x^2 - 10 cos(2 pi x) + 10`, minimum 0 at 0, local minima near
    /// every integer.
    Rastrigin,

    /// `x^2 - 2`, minimum -2 at 0.
    OffsetSphere,
}

impl TestFunction {
    /// All variants in display order.
    pub const ALL: [TestFunction; 3] = [
        TestFunction::Sphere,
        TestFunction::Rastrigin,
        TestFunction::OffsetSphere,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            TestFunction::Sphere => "Sphere",
            TestFunction::Rastrigin => "Rastrigin",
            TestFunction::OffsetSphere => "Offset Sphere",
        }
    }
}

impl Objective for TestFunction {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            TestFunction::Sphere => x * x,
            TestFunction::Rastrigin => x * x - 10.0 * (2.0 * PI * x).cos() + 10.0,
            TestFunction::OffsetSphere => x * x - 2.0,
        }
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestFunction {
    type Err = OptimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "sphere" => Ok(TestFunction::Sphere),
            "rastrigin" => Ok(TestFunction::Rastrigin),
            "offsetsphere" => Ok(TestFunction::OffsetSphere),
            _ => Err(OptimError::UnknownFunction(s.to_string())),
        }
    }
}
