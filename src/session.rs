//! Headless run control.
//!
//! [`Session`] is the part of an interactive front end that is not drawing:
//! it holds one GA and one GWO, knows which is active, and advances the
//! active one on each [`tick`](Session::tick) while running, up to a
//! generation budget. A renderer only needs [`Session::best_positions`] and
//! the objective.

use crate::error::{OptimError, Result};
use crate::ga::{GaConfig, GeneticAlgorithm};
use crate::gwo::{GreyWolfOptimizer, GwoConfig};
use crate::objective::Objective;
use crate::optimizer::Optimizer;
use tracing::{debug, info};

/// Which optimizer a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`GeneticAlgorithm`].
    #[default]
    Genetic,
    /// [`GreyWolfOptimizer`].
    GreyWolf,
}

/// Everything a control panel sets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Active algorithm.
    pub algorithm: Algorithm,
    /// GA parameters.
    pub ga: GaConfig,
    /// GWO parameters.
    pub gwo: GwoConfig,
    /// Running stops once this many generations are complete.
    pub max_generations: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            ga: GaConfig::default(),
            gwo: GwoConfig::default(),
            max_generations: 100,
        }
    }
}

impl SessionConfig {
    /// Validates both optimizer configs and the generation budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(OptimError::InvalidMaxGenerations);
        }
        self.ga.validate()?;
        self.gwo.validate()
    }
}

/// Best position of the active optimizer and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestSolution {
    /// Position of the top candidate.
    pub position: f64,
    /// `objective(position)`.
    pub value: f64,
}

/// Start/pause/step/reset control over a pair of optimizers.
///
/// ```
/// use u_scalaropt::session::{Session, SessionConfig};
/// use u_scalaropt::TestFunction;
///
/// let mut session = Session::new(SessionConfig::default(), TestFunction::Sphere).unwrap();
/// session.start();
/// while session.tick().unwrap() {}
/// assert_eq!(session.current_generation(), 100);
/// assert!(!session.is_running());
/// assert!(session.best_solution().unwrap().value < 0.01);
/// ```
pub struct Session<O: Objective> {
    config: SessionConfig,
    objective: O,
    ga: GeneticAlgorithm,
    gwo: GreyWolfOptimizer,
    running: bool,
    best_positions: Vec<f64>,
    history: Vec<f64>,
}

impl<O: Objective> Session<O> {
    /// Validates `config` and initializes both optimizers.
    ///
    /// The GA population is evaluated right away; the GWO pack is
    /// evaluated by its first generation.
    pub fn new(config: SessionConfig, objective: O) -> Result<Self> {
        config.validate()?;
        let mut ga = GeneticAlgorithm::with_config(config.ga.clone())?;
        ga.evaluate_fitness(&objective);
        let gwo = GreyWolfOptimizer::with_config(config.gwo.clone())?;

        Ok(Self {
            config,
            objective,
            ga,
            gwo,
            running: false,
            best_positions: Vec::new(),
            history: Vec::new(),
        })
    }

    /// Resumes ticking.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Suspends ticking.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flips between running and paused.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Whether [`tick`](Self::tick) will advance.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one generation if running. Returns whether one was run.
    ///
    /// Reaching `max_generations` stops the session.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }
        if self.current_generation() >= self.config.max_generations {
            self.running = false;
            return Ok(false);
        }
        self.step()?;
        if self.current_generation() >= self.config.max_generations {
            info!(generation = self.current_generation(), "generation budget reached");
            self.running = false;
        }
        Ok(true)
    }

    /// Runs one generation regardless of the running flag.
    pub fn step(&mut self) -> Result<()> {
        let objective = &self.objective;
        let optimizer: &mut dyn Optimizer = match self.config.algorithm {
            Algorithm::Genetic => &mut self.ga,
            Algorithm::GreyWolf => &mut self.gwo,
        };
        optimizer.run_generation(objective)?;
        self.best_positions = optimizer.best_positions();

        if let Some(&x) = self.best_positions.first() {
            self.history.push(self.objective.evaluate(x));
        }
        Ok(())
    }

    /// Stops and re-initializes the active optimizer.
    pub fn reset(&mut self) -> Result<()> {
        self.running = false;
        match self.config.algorithm {
            Algorithm::Genetic => {
                self.ga.initialize(self.config.ga.clone())?;
                self.ga.evaluate_fitness(&self.objective);
            }
            Algorithm::GreyWolf => self.gwo.initialize(self.config.gwo.clone())?,
        }
        self.best_positions.clear();
        self.history.clear();
        debug!(algorithm = ?self.config.algorithm, "session reset");
        Ok(())
    }

    /// Switches the active optimizer and resets it.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        self.config.algorithm = algorithm;
        self.reset()
    }

    /// Replaces the objective and resets, since old fitness values no
    /// longer apply.
    pub fn set_objective(&mut self, objective: O) -> Result<()> {
        self.objective = objective;
        self.reset()
    }

    /// Replaces the whole configuration and resets.
    ///
    /// Both optimizers are rebuilt so the inactive one also picks up its
    /// new parameters. On error nothing changes.
    pub fn reconfigure(&mut self, config: SessionConfig) -> Result<()> {
        config.validate()?;
        self.gwo.initialize(config.gwo.clone())?;
        self.ga.initialize(config.ga.clone())?;
        self.config = config;
        self.reset()
    }

    /// Best positions from the latest step, best first.
    pub fn best_positions(&self) -> &[f64] {
        &self.best_positions
    }

    /// The top position and its objective value.
    pub fn best_solution(&self) -> Option<BestSolution> {
        self.best_positions.first().map(|&position| BestSolution {
            position,
            value: self.objective.evaluate(position),
        })
    }

    /// Objective value of the top position after each step since the last
    /// reset.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Completed generations of the active optimizer.
    pub fn current_generation(&self) -> usize {
        match self.config.algorithm {
            Algorithm::Genetic => self.ga.current_generation(),
            Algorithm::GreyWolf => self.gwo.current_generation(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The objective being minimized.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// The GA, active or not.
    pub fn ga(&self) -> &GeneticAlgorithm {
        &self.ga
    }

    /// The GWO, active or not.
    pub fn gwo(&self) -> &GreyWolfOptimizer {
        &self.gwo
    }
}
