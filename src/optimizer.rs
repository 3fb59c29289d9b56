//! The contract shared by [`GeneticAlgorithm`](crate::ga::GeneticAlgorithm)
//! and [`GreyWolfOptimizer`](crate::gwo::GreyWolfOptimizer).

use crate::error::Result;
use crate::interval::SearchInterval;
use crate::objective::Objective;

/// A generation-stepped population optimizer over a scalar interval.
///
/// Initialization is algorithm specific (each takes its own config) and is
/// therefore not part of this trait. Everything a driver needs after that is.
pub trait Optimizer {
    /// Refreshes fitness values (and leaders, where applicable) without
    /// advancing the generation counter.
    fn evaluate_fitness(&mut self, objective: &dyn Objective);

    /// Advances exactly one generation.
    ///
    /// Fails with [`OptimError::NotInitialized`](crate::OptimError::NotInitialized)
    /// if no configuration was ever accepted.
    fn run_generation(&mut self, objective: &dyn Objective) -> Result<()>;

    /// Positions of the current best candidates, best first.
    fn best_positions(&self) -> Vec<f64>;

    /// Number of completed generations since the last initialization.
    fn current_generation(&self) -> usize;

    /// Active search interval, if initialized.
    fn interval(&self) -> Option<SearchInterval>;
}
