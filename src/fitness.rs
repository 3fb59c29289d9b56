//! Fitness convention.
//!
//! Objectives are minimized, but both optimizers rank candidates by a
//! *fitness* that is maximized: `fitness = -objective(x)`. NaN objective
//! values become `-inf` fitness, so comparisons stay transitive and a NaN
//! candidate never wins a tournament or a leader slot.

use crate::objective::Objective;

/// Fitness assigned to candidates that have not been evaluated, and the
/// sentinel for empty leader slots.
pub const WORST_FITNESS: f64 = f64::NEG_INFINITY;

/// Converts an objective value into a fitness.
#[inline]
pub fn fitness_from_objective(value: f64) -> f64 {
    if value.is_nan() {
        WORST_FITNESS
    } else {
        -value
    }
}

/// Evaluates `objective` at `x` and returns the fitness.
#[inline]
pub fn evaluate(objective: &dyn Objective, x: f64) -> f64 {
    fitness_from_objective(objective.evaluate(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation() {
        assert_eq!(fitness_from_objective(49.0), -49.0);
        assert_eq!(fitness_from_objective(-2.0), 2.0);
    }

    #[test]
    fn test_nan_is_worst() {
        assert_eq!(fitness_from_objective(f64::NAN), WORST_FITNESS);
        assert_eq!(fitness_from_objective(f64::INFINITY), WORST_FITNESS);
        assert_eq!(fitness_from_objective(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_evaluate() {
        let f = |x: f64| x.sqrt();
        assert_eq!(evaluate(&f, 4.0), -2.0);
        assert_eq!(evaluate(&f, -1.0), WORST_FITNESS);
    }
}
