//! Population-based optimizers for bounded scalar objectives.
//!
//! Two generation-stepped algorithms minimize a user-supplied `f: R -> R`
//! over a closed interval:
//!
//! - **Genetic Algorithm (GA)**: binary-coded chromosomes, elitism,
//!   tournament selection, single-point crossover and bit-flip mutation.
//! - **Grey Wolf Optimizer (GWO)**: a pack led by its three fittest wolves,
//!   with a linearly decaying exploration parameter.
//!
//! Both implement [`Optimizer`], so a driver can hold either one, call
//! `run_generation` once per tick and hand `best_positions` to a renderer.
//! [`session::Session`] is such a driver without the rendering.
//!
//! Internally both rank candidates by *fitness* `= -objective(x)` (larger is
//! better); see [`fitness`].
//!
//! # Example
//!
//! ```
//! use u_scalaropt::ga::{GaConfig, GeneticAlgorithm};
//! use u_scalaropt::gwo::{GreyWolfOptimizer, GwoConfig};
//! use u_scalaropt::{Optimizer, SearchInterval};
//!
//! let interval = SearchInterval::new(-5.0, 5.0).unwrap();
//! let objective = |x: f64| (x - 1.5).powi(2);
//!
//! let mut optimizers: Vec<Box<dyn Optimizer>> = vec![
//!     Box::new(GeneticAlgorithm::with_config(
//!         GaConfig::default().with_interval(interval).with_seed(1),
//!     ).unwrap()),
//!     Box::new(GreyWolfOptimizer::with_config(
//!         GwoConfig::default().with_interval(interval).with_seed(1),
//!     ).unwrap()),
//! ];
//!
//! for optimizer in &mut optimizers {
//!     for _ in 0..60 {
//!         optimizer.run_generation(&objective).unwrap();
//!     }
//!     assert!((optimizer.best_positions()[0] - 1.5).abs() < 0.1);
//! }
//! ```

pub mod error;
pub mod fitness;
pub mod ga;
pub mod gwo;
pub mod interval;
pub mod objective;
pub mod optimizer;
pub mod random;
pub mod session;

pub use error::{OptimError, Result};
pub use interval::SearchInterval;
pub use objective::{Objective, TestFunction};
pub use optimizer::Optimizer;
