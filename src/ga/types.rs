//! Chromosome representation.

use crate::fitness::WORST_FITNESS;
use rand::Rng;

/// Decoded position and fitness of a chromosome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Real value the genes decode to.
    pub position: f64,

    /// `-objective(position)`; larger is better.
    pub fitness: f64,
}

/// A fixed-length bit string plus its evaluation, once computed.
///
/// Bit 0 is the most significant bit of the encoded integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<bool>,
    evaluation: Option<Evaluation>,
}

impl Chromosome {
    /// Wraps a gene vector. The chromosome starts unevaluated.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            evaluation: None,
        }
    }

    /// Random chromosome with each bit set with probability 0.5.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self::new((0..length).map(|_| rng.random_bool(0.5)).collect())
    }

    /// The bit string.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Evaluation, if one has been computed.
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Decoded position, if evaluated.
    pub fn position(&self) -> Option<f64> {
        self.evaluation.map(|e| e.position)
    }

    /// Fitness, or [`WORST_FITNESS`] when not yet evaluated.
    pub fn fitness(&self) -> f64 {
        self.evaluation.map_or(WORST_FITNESS, |e| e.fitness)
    }

    pub(crate) fn set_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluation = Some(evaluation);
    }
}
