//! Generation-stepped Grey Wolf Optimizer.

use super::config::GwoConfig;
use super::types::{Leaders, Wolf};
use crate::error::{OptimError, Result};
use crate::fitness;
use crate::interval::SearchInterval;
use crate::objective::Objective;
use crate::optimizer::Optimizer;
use crate::random::{rng_from_seed, unit};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace, warn};

/// Grey Wolf Optimizer over a scalar interval.
///
/// The pack is updated in place. Each generation first re-ranks the pack to
/// find alpha, beta and delta, then moves every wolf to the mean of three
/// points drawn around those leaders, clamped into the interval.
///
/// # Usage
///
/// ```
/// use u_scalaropt::gwo::{GreyWolfOptimizer, GwoConfig};
/// use u_scalaropt::TestFunction;
///
/// let mut gwo = GreyWolfOptimizer::with_config(GwoConfig::default().with_seed(42)).unwrap();
/// for _ in 0..50 {
///     gwo.run_generation(&TestFunction::Sphere).unwrap();
/// }
/// let best = gwo.best_positions();
/// assert_eq!(best.len(), 3);
/// assert!(best[0].abs() < 0.5);
/// ```
///
/// # References
///
/// Mirjalili, Mirjalili & Lewis (2014), "Grey Wolf Optimizer"
#[derive(Debug, Clone)]
pub struct GreyWolfOptimizer {
    config: Option<GwoConfig>,
    wolves: Vec<Wolf>,
    leaders: Leaders,
    generation: usize,
    rng: StdRng,
}

impl Default for GreyWolfOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GreyWolfOptimizer {
    /// Creates an uninitialized optimizer with an empty pack.
    pub fn new() -> Self {
        Self {
            config: None,
            wolves: Vec::new(),
            leaders: Leaders::default(),
            generation: 0,
            rng: rng_from_seed(None),
        }
    }

    /// Creates and initializes an optimizer in one go.
    pub fn with_config(config: GwoConfig) -> Result<Self> {
        let mut gwo = Self::new();
        gwo.initialize(config)?;
        Ok(gwo)
    }

    /// Re-seeds and scatters a new pack uniformly over the interval.
    ///
    /// Leaders are cleared and the generation counter reset to 0. On error
    /// the optimizer is left untouched.
    pub fn initialize(&mut self, config: GwoConfig) -> Result<()> {
        config.validate()?;

        self.rng = rng_from_seed(config.seed);
        self.generation = 0;
        self.leaders = Leaders::default();
        self.wolves = (0..config.wolves_count)
            .map(|_| Wolf::unevaluated(config.interval.sample(&mut self.rng)))
            .collect();

        debug!(
            wolves_count = config.wolves_count,
            max_iterations = config.max_iterations,
            min = config.interval.min(),
            max = config.interval.max(),
            "gwo initialized"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Scores every wolf and recomputes the leaders from scratch.
    ///
    /// Leaders of a previous call are discarded before the scan, so they
    /// always describe the pack as it is now.
    pub fn evaluate_fitness(&mut self, objective: &dyn Objective) {
        let mut leaders = Leaders::default();
        for wolf in &mut self.wolves {
            wolf.fitness = fitness::evaluate(objective, wolf.position);
            leaders.offer(*wolf);
        }
        if leaders.alpha != self.leaders.alpha {
            trace!(alpha = ?leaders.alpha, "alpha changed");
        }
        self.leaders = leaders;
    }

    /// Exploration parameter for the current generation.
    ///
    /// Decays linearly from 2 and is not floored at 0.
    pub fn decay(&self) -> f64 {
        let max_iterations = self.config.as_ref().map_or(1, |c| c.max_iterations);
        2.0 - 2.0 * self.generation as f64 / max_iterations as f64
    }

    /// Re-ranks the pack and moves every wolf toward the leaders.
    ///
    /// Each wolf draws `r1, r2` for alpha, then beta, then delta, six draws in
    /// all. For leader position `L`: `A = 2a*r1 - a`, `C = 2*r2`,
    /// `D = |C*L - x|`, `X_L = L - A*D`. The new position is the mean of the
    /// three `X_L`, clamped into the interval.
    pub fn run_generation(&mut self, objective: &dyn Objective) -> Result<()> {
        let interval = self
            .config
            .as_ref()
            .map(|c| c.interval)
            .ok_or(OptimError::NotInitialized)?;

        self.evaluate_fitness(objective);
        let a = self.decay();

        match self.leaders.attractors() {
            Some(attractors) => {
                for wolf in &mut self.wolves {
                    let mut sum = 0.0;
                    for leader in attractors {
                        sum += hunt(leader, wolf.position, a, &mut self.rng);
                    }
                    wolf.position = interval.clamp(sum / 3.0);
                }
            }
            None => warn!(
                generation = self.generation,
                "no wolf has finite fitness; pack left in place"
            ),
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            a,
            alpha_fitness = self.leaders.alpha.map(|w| w.fitness),
            "gwo generation complete"
        );
        Ok(())
    }

    /// `[alpha, beta, delta]` positions from the latest evaluation.
    ///
    /// Empty before the first evaluation. Always three entries afterwards
    /// unless the objective returned NaN or `+inf` for most of the pack.
    pub fn best_positions(&self) -> Vec<f64> {
        self.leaders.ranked().map(|w| w.position).collect()
    }

    /// Current leaders.
    pub fn leaders(&self) -> &Leaders {
        &self.leaders
    }

    /// Current pack, in creation order.
    pub fn wolves(&self) -> &[Wolf] {
        &self.wolves
    }

    /// Completed generations since the last initialization.
    pub fn current_generation(&self) -> usize {
        self.generation
    }

    /// Active configuration, if initialized.
    pub fn config(&self) -> Option<&GwoConfig> {
        self.config.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn set_positions(&mut self, positions: &[f64]) {
        self.wolves = positions.iter().copied().map(Wolf::unevaluated).collect();
    }
}

impl Optimizer for GreyWolfOptimizer {
    fn evaluate_fitness(&mut self, objective: &dyn Objective) {
        GreyWolfOptimizer::evaluate_fitness(self, objective);
    }

    fn run_generation(&mut self, objective: &dyn Objective) -> Result<()> {
        GreyWolfOptimizer::run_generation(self, objective)
    }

    fn best_positions(&self) -> Vec<f64> {
        GreyWolfOptimizer::best_positions(self)
    }

    fn current_generation(&self) -> usize {
        self.generation
    }

    fn interval(&self) -> Option<SearchInterval> {
        self.config.as_ref().map(|c| c.interval)
    }
}

/// Candidate position pulled toward (or pushed past) one leader.
#[inline]
fn hunt<R: Rng>(leader: f64, position: f64, a: f64, rng: &mut R) -> f64 {
    let r1 = unit(rng);
    let r2 = unit(rng);
    let big_a = 2.0 * a * r1 - a;
    let big_c = 2.0 * r2;
    let distance = (big_c * leader - position).abs();
    leader - big_a * distance
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::TestFunction;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn three_wolves() -> GreyWolfOptimizer {
        let config = GwoConfig::default()
            .with_wolves_count(3)
            .with_interval(SearchInterval::new(0.0, 4.0).unwrap())
            .with_seed(42);
        let mut gwo = GreyWolfOptimizer::with_config(config).unwrap();
        gwo.set_positions(&[2.0, 1.0, 3.0]);
        gwo
    }

    #[test]
    fn test_uninitialized_state() {
        let mut gwo = GreyWolfOptimizer::new();
        assert!(gwo.best_positions().is_empty());
        assert_eq!(gwo.current_generation(), 0);
        assert_eq!(
            gwo.run_generation(&TestFunction::Sphere),
            Err(OptimError::NotInitialized)
        );
    }

    #[test]
    fn test_initialized_but_unevaluated_has_no_best() {
        let gwo = GreyWolfOptimizer::with_config(GwoConfig::default().with_seed(1)).unwrap();
        assert_eq!(gwo.wolves().len(), 50);
        assert!(gwo.best_positions().is_empty());
    }

    #[test]
    fn test_alpha_minimizes_objective() {
        let mut gwo = three_wolves();
        gwo.evaluate_fitness(&|x: f64| x);
        assert_eq!(gwo.best_positions(), vec![1.0, 2.0, 3.0]);
        assert_eq!(gwo.leaders().alpha.unwrap().fitness, -1.0);
        assert_eq!(gwo.current_generation(), 0);
    }

    #[test]
    fn test_leaders_rescanned_not_retained() {
        let mut gwo = three_wolves();
        gwo.evaluate_fitness(&|x: f64| x);
        assert_eq!(gwo.leaders().alpha.unwrap().position, 1.0);

        // Move the pack so every wolf is worse than the old alpha
        gwo.set_positions(&[3.5, 3.0, 2.5]);
        gwo.evaluate_fitness(&|x: f64| x);
        assert_eq!(gwo.best_positions(), vec![2.5, 3.0, 3.5]);
    }

    #[test]
    fn test_initialize_clears_leaders() {
        let mut gwo = three_wolves();
        gwo.evaluate_fitness(&|x: f64| x);
        assert_eq!(gwo.best_positions().len(), 3);

        gwo.initialize(GwoConfig::default().with_seed(2)).unwrap();
        assert!(gwo.best_positions().is_empty());
        assert_eq!(gwo.leaders(), &Leaders::default());
    }

    #[test]
    fn test_decay_schedule() {
        let mut gwo = GreyWolfOptimizer::with_config(
            GwoConfig::default().with_max_iterations(4).with_seed(3),
        )
        .unwrap();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(gwo.decay());
            gwo.run_generation(&TestFunction::Sphere).unwrap();
        }
        assert_eq!(seen, vec![2.0, 1.5, 1.0, 0.5, 0.0, -0.5]);
    }

    #[test]
    fn test_hunt_matches_formula() {
        let mut a_rng = create_rng(17);
        let mut b_rng = create_rng(17);
        let (leader, position, a) = (1.25, -3.0, 1.5);

        let got = hunt(leader, position, a, &mut a_rng);

        let r1: f64 = b_rng.random_range(0.0..1.0);
        let r2: f64 = b_rng.random_range(0.0..1.0);
        let big_a = 2.0 * a * r1 - a;
        let d = (2.0 * r2 * leader - position).abs();
        assert_eq!(got, leader - big_a * d);
    }

    #[test]
    fn test_zero_decay_collapses_onto_leaders() {
        // With a = 0, A = 0 and every X_L equals its leader
        let mut gwo = three_wolves();
        gwo.generation = 100;
        gwo.run_generation(&|x: f64| x).unwrap();
        for wolf in gwo.wolves() {
            assert!((wolf.position - 2.0).abs() < 1e-12, "got {}", wolf.position);
        }
        assert_eq!(gwo.current_generation(), 101);
    }

    #[test]
    fn test_nan_pack_stays_put() {
        let mut gwo = three_wolves();
        gwo.run_generation(&|_: f64| f64::NAN).unwrap();
        let positions: Vec<f64> = gwo.wolves().iter().map(|w| w.position).collect();
        assert_eq!(positions, vec![2.0, 1.0, 3.0]);
        assert!(gwo.best_positions().is_empty());
        assert_eq!(gwo.current_generation(), 1);
    }

    #[test]
    fn test_converges_on_offset_sphere() {
        let mut gwo = GreyWolfOptimizer::with_config(GwoConfig::default().with_seed(42)).unwrap();
        for _ in 0..100 {
            gwo.run_generation(&TestFunction::OffsetSphere).unwrap();
        }
        let alpha = gwo.best_positions()[0];
        assert!(alpha.abs() < 1e-2, "expected alpha near 0, got {alpha}");
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = || {
            let mut gwo =
                GreyWolfOptimizer::with_config(GwoConfig::default().with_seed(9)).unwrap();
            for _ in 0..20 {
                gwo.run_generation(&TestFunction::Rastrigin).unwrap();
            }
            gwo.wolves().to_vec()
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_positions_clamped_and_leaders_ordered(
            wolves in 3usize..30,
            min in -50.0f64..50.0,
            width in 0.01f64..100.0,
            max_iterations in 1usize..20,
            seed in any::<u64>(),
        ) {
            let interval = SearchInterval::new(min, min + width).unwrap();
            let config = GwoConfig::default()
                .with_wolves_count(wolves)
                .with_interval(interval)
                .with_max_iterations(max_iterations)
                .with_seed(seed);
            let mut gwo = GreyWolfOptimizer::with_config(config).unwrap();

            for _ in 0..(2 * max_iterations) {
                gwo.run_generation(&TestFunction::Rastrigin).unwrap();

                prop_assert!(gwo.wolves().iter().all(|w| interval.contains(w.position)));
                prop_assert_eq!(gwo.wolves().len(), wolves);

                let ranked: Vec<f64> = gwo.leaders().ranked().map(|w| w.fitness).collect();
                prop_assert_eq!(ranked.len(), 3);
                prop_assert!(ranked[0] >= ranked[1] && ranked[1] >= ranked[2]);
            }
        }
    }
}
