use super::{mutation, Annealer, Improvement, StopReason};
use crate::consts::MIN_TEMPERATURE;
use crate::key::Key;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct AnnealOutcome {
    pub key: Key,
    pub score: f64,
    pub iterations: usize,
    pub accepted: usize,
    pub perturbation_swaps: usize,
    pub final_temperature: f64,
    pub improvements: Vec<Improvement>,
    pub stop_reason: StopReason,
}

impl Annealer {
    /// Metropolis acceptance with a lateral band around zero.
    #[inline(always)]
    fn accepts(&mut self, delta: f64) -> bool {
        if delta > 0.0 {
            return true;
        }
        if self.params.lateral_moves && delta.abs() < self.params.lateral_epsilon {
            return true;
        }
        self.temperature > MIN_TEMPERATURE && self.rng.f64() < (delta / self.temperature).exp()
    }

    /// One swap trial followed by one cooling step.
    #[inline(always)]
    pub fn step(&mut self) {
        let (a, b) = mutation::random_pair(&mut self.rng);
        let delta = self.scorer.swap_delta(&self.key, a, b);

        if self.accepts(delta) {
            self.key.swap(a, b);
            self.score += delta;
            self.accepted += 1;
        }

        if self.score > self.best_score {
            self.best_score = self.score;
            self.best_key = self.key;
            self.stall = 0;
            self.improvements.push(Improvement {
                iteration: self.iterations,
                score: self.score,
            });
        } else {
            self.stall += 1;
        }

        self.temperature *= self.params.cooling_factor;
        self.iterations += 1;
    }

    /// Runs until the iteration budget is spent or the best score has not
    /// moved for more than `early_stall` iterations.
    pub fn run(mut self) -> AnnealOutcome {
        let mut stop_reason = StopReason::MaxIterations;

        while self.iterations < self.params.max_iterations {
            self.step();
            if self.stall > self.params.early_stall {
                stop_reason = StopReason::Stalled;
                break;
            }
        }

        self.best_key.assert_bijection();
        debug!(
            "Anneal done: {} iterations, {} accepted, best {:.4}, stop={}",
            self.iterations, self.accepted, self.best_score, stop_reason
        );

        AnnealOutcome {
            key: self.best_key,
            score: self.best_score,
            iterations: self.iterations,
            accepted: self.accepted,
            perturbation_swaps: self.params.perturbation_swaps,
            final_temperature: self.temperature,
            improvements: self.improvements,
            stop_reason,
        }
    }
}
