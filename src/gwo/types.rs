//! Wolves and the leader hierarchy.

use crate::fitness::WORST_FITNESS;

/// A candidate in the pack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wolf {
    /// Current position.
    pub position: f64,

    /// Fitness from the latest evaluation; larger is better.
    pub fitness: f64,
}

impl Wolf {
    /// A wolf at `position` that has not been evaluated yet.
    pub fn unevaluated(position: f64) -> Self {
        Self {
            position,
            fitness: WORST_FITNESS,
        }
    }
}

/// The three best wolves of the latest evaluation, in rank order.
///
/// Slots hold copies, so they never refer to wolves of an earlier pack.
/// An empty slot behaves as fitness [`WORST_FITNESS`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Leaders {
    /// Best wolf.
    pub alpha: Option<Wolf>,
    /// Second best.
    pub beta: Option<Wolf>,
    /// Third best.
    pub delta: Option<Wolf>,
}

impl Leaders {
    /// Offers `wolf` to the hierarchy with cascading replacement.
    ///
    /// A wolf must be strictly fitter than a slot to take it, so among
    /// equals the first offered keeps the higher rank.
    pub fn offer(&mut self, wolf: Wolf) {
        if wolf.fitness > slot_fitness(self.alpha) {
            self.delta = self.beta;
            self.beta = self.alpha;
            self.alpha = Some(wolf);
        } else if wolf.fitness > slot_fitness(self.beta) {
            self.delta = self.beta;
            self.beta = Some(wolf);
        } else if wolf.fitness > slot_fitness(self.delta) {
            self.delta = Some(wolf);
        }
    }

    /// Filled slots in rank order.
    pub fn ranked(&self) -> impl Iterator<Item = Wolf> {
        [self.alpha, self.beta, self.delta].into_iter().flatten()
    }

    /// Attractor positions for the update step.
    ///
    /// An empty slot borrows the position of the next better leader.
    /// `None` when there is no alpha.
    pub fn attractors(&self) -> Option<[f64; 3]> {
        let alpha = self.alpha?.position;
        let beta = self.beta.map_or(alpha, |w| w.position);
        let delta = self.delta.map_or(beta, |w| w.position);
        Some([alpha, beta, delta])
    }
}

fn slot_fitness(slot: Option<Wolf>) -> f64 {
    slot.map_or(WORST_FITNESS, |w| w.fitness)
}
