//! Grey Wolf Optimizer (GWO).
//!
//! A swarm method modelled on the hunting hierarchy of grey wolves. The three
//! fittest wolves (alpha, beta, delta) lead; every wolf moves to the mean of
//! three stochastic estimates of the prey position, one per leader. The
//! control parameter `a` decays linearly from 2, shifting the pack from
//! exploration (`|A| > 1`) to exploitation (`|A| < 1`).
//!
//! # References
//!
//! - Mirjalili, Mirjalili & Lewis (2014), "Grey Wolf Optimizer",
//!   *Advances in Engineering Software* 69

mod config;
mod runner;
mod types;

pub use config::{GwoConfig, LEADER_COUNT};
pub use runner::GreyWolfOptimizer;
pub use types::{Leaders, Wolf};
