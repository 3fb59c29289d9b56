//! Generation-stepped GA.
//!
//! [`GeneticAlgorithm`] holds a population of binary chromosomes and advances
//! it one generation per [`run_generation`](GeneticAlgorithm::run_generation):
//! elitism → tournament selection → crossover → mutation → evaluation.

use super::config::GaConfig;
use super::encoding::decode;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::tournament;
use super::types::{Chromosome, Evaluation};
use crate::error::{OptimError, Result};
use crate::fitness;
use crate::interval::SearchInterval;
use crate::objective::Objective;
use crate::optimizer::Optimizer;
use crate::random::rng_from_seed;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// Binary-coded Genetic Algorithm over a scalar interval.
///
/// # Usage
///
/// ```
/// use u_scalaropt::ga::{GaConfig, GeneticAlgorithm};
/// use u_scalaropt::TestFunction;
///
/// let mut ga = GeneticAlgorithm::new();
/// assert!(ga.best_positions().is_empty());
///
/// ga.initialize(GaConfig::default().with_seed(42)).unwrap();
/// ga.evaluate_fitness(&TestFunction::Sphere);
/// for _ in 0..50 {
///     ga.run_generation(&TestFunction::Sphere).unwrap();
/// }
/// assert_eq!(ga.current_generation(), 50);
/// assert!(ga.best_positions()[0].abs() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    config: Option<GaConfig>,
    population: Vec<Chromosome>,
    generation: usize,
    rng: StdRng,
}

impl Default for GeneticAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneticAlgorithm {
    /// Creates an uninitialized optimizer with an empty population.
    pub fn new() -> Self {
        Self {
            config: None,
            population: Vec::new(),
            generation: 0,
            rng: rng_from_seed(None),
        }
    }

    /// Creates and initializes an optimizer in one go.
    pub fn with_config(config: GaConfig) -> Result<Self> {
        let mut ga = Self::new();
        ga.initialize(config)?;
        Ok(ga)
    }

    /// Re-seeds and rebuilds the population from `config`.
    ///
    /// All prior chromosomes are discarded and the generation counter is
    /// reset to 0. New chromosomes are unevaluated. On error the optimizer is
    /// left untouched.
    pub fn initialize(&mut self, config: GaConfig) -> Result<()> {
        config.validate()?;

        self.rng = rng_from_seed(config.seed);
        self.generation = 0;
        self.population = (0..config.population_size)
            .map(|_| Chromosome::random(config.chromosome_length, &mut self.rng))
            .collect();

        debug!(
            population_size = config.population_size,
            chromosome_length = config.chromosome_length,
            min = config.interval.min(),
            max = config.interval.max(),
            "ga initialized"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Decodes and scores every chromosome.
    ///
    /// Does nothing before initialization.
    pub fn evaluate_fitness(&mut self, objective: &dyn Objective) {
        let Some(config) = &self.config else {
            return;
        };
        for chromosome in &mut self.population {
            let evaluation = evaluate(chromosome.genes(), &config.interval, objective);
            chromosome.set_evaluation(evaluation);
        }
    }

    /// Replaces the population with the next generation.
    ///
    /// The best chromosome is copied verbatim; the remaining
    /// `population_size - 1` slots are filled with evaluated offspring of
    /// tournament-selected parents. A population that was never evaluated is
    /// evaluated first so that the elite is chosen on real fitness.
    pub fn run_generation(&mut self, objective: &dyn Objective) -> Result<()> {
        let config = self.config.clone().ok_or(OptimError::NotInitialized)?;
        if self.population.iter().any(|c| c.evaluation().is_none()) {
            self.evaluate_fitness(objective);
        }

        let mut next_gen = Vec::with_capacity(config.population_size);
        if let Some(elite) = best_index(&self.population) {
            next_gen.push(self.population[elite].clone());
        }

        while next_gen.len() < config.population_size {
            let child = self.breed(&config, objective)?;
            trace!(
                position = child.position(),
                fitness = child.fitness(),
                "offspring"
            );
            next_gen.push(child);
        }

        self.population = next_gen;
        self.generation += 1;

        debug!(
            generation = self.generation,
            best_fitness = self.best().map(Chromosome::fitness),
            "ga generation complete"
        );
        Ok(())
    }

    /// Produces one evaluated child from two tournament winners.
    fn breed(&mut self, config: &GaConfig, objective: &dyn Objective) -> Result<Chromosome> {
        let p1 = tournament(&self.population, &mut self.rng).ok_or(OptimError::NotInitialized)?;
        let p2 = tournament(&self.population, &mut self.rng).ok_or(OptimError::NotInitialized)?;

        let mut genes = single_point_crossover(
            self.population[p1].genes(),
            self.population[p2].genes(),
            config.crossover_rate,
            &mut self.rng,
        );
        bit_flip_mutation(&mut genes, config.mutation_rate, &mut self.rng);

        let evaluation = evaluate(&genes, &config.interval, objective);
        let mut child = Chromosome::new(genes);
        child.set_evaluation(evaluation);
        Ok(child)
    }

    /// Position of the best evaluated chromosome, as a 0- or 1-element list.
    ///
    /// Ties go to the earliest chromosome in population order.
    pub fn best_positions(&self) -> Vec<f64> {
        self.best()
            .and_then(Chromosome::position)
            .into_iter()
            .collect()
    }

    /// The best evaluated chromosome, if any.
    pub fn best(&self) -> Option<&Chromosome> {
        best_index(&self.population)
            .map(|i| &self.population[i])
            .filter(|c| c.evaluation().is_some())
    }

    /// Completed generations since the last initialization.
    pub fn current_generation(&self) -> usize {
        self.generation
    }

    /// Current population, in insertion order.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Active configuration, if initialized.
    pub fn config(&self) -> Option<&GaConfig> {
        self.config.as_ref()
    }
}

impl Optimizer for GeneticAlgorithm {
    fn evaluate_fitness(&mut self, objective: &dyn Objective) {
        GeneticAlgorithm::evaluate_fitness(self, objective);
    }

    fn run_generation(&mut self, objective: &dyn Objective) -> Result<()> {
        GeneticAlgorithm::run_generation(self, objective)
    }

    fn best_positions(&self) -> Vec<f64> {
        GeneticAlgorithm::best_positions(self)
    }

    fn current_generation(&self) -> usize {
        self.generation
    }

    fn interval(&self) -> Option<SearchInterval> {
        self.config.as_ref().map(|c| c.interval)
    }
}

fn evaluate(genes: &[bool], interval: &SearchInterval, objective: &dyn Objective) -> Evaluation {
    let position = decode(genes, interval);
    Evaluation {
        position,
        fitness: fitness::evaluate(objective, position),
    }
}

/// Index of the first chromosome with maximal fitness.
fn best_index(population: &[Chromosome]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in population.iter().enumerate() {
        match best {
            Some(b) if c.fitness() <= population[b].fitness() => {}
            _ => best = Some(i),
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::TestFunction;
    use proptest::prelude::*;

    fn worked_example_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(4)
            .with_chromosome_length(4)
            .with_interval(SearchInterval::new(0.0, 15.0).unwrap())
            .with_crossover_rate(1.0)
            .with_mutation_rate(0.0)
            .with_seed(42)
    }

    #[test]
    fn test_uninitialized_state() {
        let mut ga = GeneticAlgorithm::new();
        assert!(ga.best_positions().is_empty());
        assert_eq!(ga.current_generation(), 0);
        assert!(ga.interval().is_none());

        ga.evaluate_fitness(&TestFunction::Sphere);
        assert!(ga.population().is_empty());
        assert_eq!(
            ga.run_generation(&TestFunction::Sphere),
            Err(OptimError::NotInitialized)
        );
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(1)).unwrap();
        let before = ga.population().to_vec();

        let err = ga
            .initialize(GaConfig::default().with_chromosome_length(0))
            .unwrap_err();
        assert_eq!(err, OptimError::InvalidChromosomeLength(0));
        assert_eq!(ga.population(), &before[..]);
    }

    #[test]
    fn test_initialized_but_unevaluated_has_no_best() {
        let ga = GeneticAlgorithm::with_config(worked_example_config()).unwrap();
        assert_eq!(ga.population().len(), 4);
        assert!(ga.population().iter().all(|c| c.genes().len() == 4));
        assert!(ga.best_positions().is_empty());
    }

    #[test]
    fn test_worked_example_fitness() {
        let mut ga = GeneticAlgorithm::with_config(worked_example_config()).unwrap();
        let objective = |x: f64| (x - 7.0).powi(2);
        ga.evaluate_fitness(&objective);

        for c in ga.population() {
            let e = c.evaluation().unwrap();
            let v = crate::ga::encoding::genes_to_int(c.genes()) as f64;
            assert!((e.position - v).abs() < 1e-9);
            assert!((e.fitness + (e.position - 7.0).powi(2)).abs() < 1e-9);
        }

        let genes = [true, true, true, false];
        let e = evaluate(&genes, &SearchInterval::new(0.0, 15.0).unwrap(), &objective);
        assert!((e.position - 14.0).abs() < 1e-9);
        assert!((e.fitness + 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_generation_counter() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(3)).unwrap();
        assert_eq!(ga.current_generation(), 0);

        ga.evaluate_fitness(&TestFunction::Sphere);
        assert_eq!(ga.current_generation(), 0);

        for expected in 1..=5 {
            ga.run_generation(&TestFunction::Sphere).unwrap();
            assert_eq!(ga.current_generation(), expected);
        }

        ga.initialize(GaConfig::default().with_seed(3)).unwrap();
        assert_eq!(ga.current_generation(), 0);
    }

    #[test]
    fn test_elitism_monotone() {
        let mut ga = GeneticAlgorithm::with_config(
            GaConfig::default().with_mutation_rate(0.3).with_seed(42),
        )
        .unwrap();
        ga.evaluate_fitness(&TestFunction::Rastrigin);

        let mut previous = ga.best().unwrap().fitness();
        for _ in 0..100 {
            ga.run_generation(&TestFunction::Rastrigin).unwrap();
            let current = ga.best().unwrap().fitness();
            assert!(
                current >= previous,
                "best fitness regressed: {current} < {previous}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_elite_is_first_in_next_generation() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(5)).unwrap();
        ga.evaluate_fitness(&TestFunction::Sphere);
        let elite = ga.best().unwrap().clone();

        ga.run_generation(&TestFunction::Sphere).unwrap();
        assert_eq!(ga.population()[0], elite);
    }

    #[test]
    fn test_run_generation_evaluates_fresh_population() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(8)).unwrap();
        ga.run_generation(&TestFunction::Sphere).unwrap();
        assert!(ga.population().iter().all(|c| c.evaluation().is_some()));
        assert_eq!(ga.best_positions().len(), 1);
    }

    #[test]
    fn test_converges_on_sphere() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(42)).unwrap();
        ga.evaluate_fitness(&TestFunction::Sphere);
        for _ in 0..100 {
            ga.run_generation(&TestFunction::Sphere).unwrap();
        }
        let best = ga.best_positions()[0];
        assert!(best.abs() < 0.1, "expected |x| < 0.1, got {best}");
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = || {
            let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(11)).unwrap();
            ga.evaluate_fitness(&TestFunction::Rastrigin);
            for _ in 0..20 {
                ga.run_generation(&TestFunction::Rastrigin).unwrap();
            }
            ga.population().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_nan_objective_never_elite() {
        let mut ga = GeneticAlgorithm::with_config(GaConfig::default().with_seed(2)).unwrap();
        // NaN for negative positions, Sphere otherwise
        let objective = |x: f64| if x < 0.0 { f64::NAN } else { x * x };
        ga.evaluate_fitness(&objective);
        for _ in 0..10 {
            ga.run_generation(&objective).unwrap();
            let best = ga.best_positions()[0];
            assert!(best >= 0.0, "NaN candidate became best at {best}");
        }
    }

    #[test]
    fn test_best_index_ties_first() {
        let mut pop = vec![Chromosome::new(vec![false]); 3];
        for (i, c) in pop.iter_mut().enumerate() {
            c.set_evaluation(Evaluation {
                position: i as f64,
                fitness: -1.0,
            });
        }
        assert_eq!(best_index(&pop), Some(0));
        assert_eq!(best_index(&[]), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_population_size_constant(
            size in 2usize..40,
            bits in 1usize..=64,
            crossover in 0.0f64..=1.0,
            mutation in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let config = GaConfig::default()
                .with_population_size(size)
                .with_chromosome_length(bits)
                .with_crossover_rate(crossover)
                .with_mutation_rate(mutation)
                .with_seed(seed);
            let mut ga = GeneticAlgorithm::with_config(config).unwrap();
            prop_assert_eq!(ga.population().len(), size);

            ga.evaluate_fitness(&TestFunction::Sphere);
            for _ in 0..5 {
                ga.run_generation(&TestFunction::Sphere).unwrap();
                prop_assert_eq!(ga.population().len(), size);
                prop_assert!(ga.population().iter().all(|c| c.genes().len() == bits));
            }
        }
    }
}
