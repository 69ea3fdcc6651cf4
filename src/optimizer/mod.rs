pub mod anneal;
pub mod initialization;
pub mod mutation;
pub mod refine;
pub mod runner;

use crate::config::CrackConfig;
use crate::key::Key;
use crate::scorer::SwapScorer;
use fastrand::Rng;
use serde::Serialize;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

pub use self::anneal::AnnealOutcome;
pub use self::refine::{refine, RefineOutcome};
pub use self::runner::{CrackOptions, CrackOutcome, Cracker, NoProgress, ProgressCallback};

#[derive(Debug, Clone)]
pub struct AnnealParams {
    pub max_iterations: usize,
    pub initial_temperature: f64,
    pub cooling_factor: f64,
    pub early_stall: usize,
    pub lateral_moves: bool,
    pub lateral_epsilon: f64,
    pub perturbation_swaps: usize,
}

impl From<&CrackConfig> for AnnealParams {
    fn from(cfg: &CrackConfig) -> Self {
        Self {
            max_iterations: cfg.search.max_iterations,
            initial_temperature: cfg.search.initial_temperature,
            cooling_factor: cfg.search.cooling_factor,
            early_stall: cfg.search.early_stall,
            lateral_moves: cfg.search.lateral_moves,
            lateral_epsilon: cfg.search.lateral_epsilon,
            perturbation_swaps: cfg.search.perturbation_swaps,
        }
    }
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self::from(&CrackConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxIterations,
    Stalled,
}

/// A best-score improvement seen during one annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Improvement {
    pub iteration: usize,
    pub score: f64,
}

/// One annealing run over a single ciphertext. Owns its key and random
/// stream; the scorer is shared read-only between runs.
pub struct Annealer {
    pub scorer: Arc<SwapScorer>,
    pub params: AnnealParams,

    pub key: Key,
    pub score: f64,
    pub temperature: f64,
    pub stall: usize,

    pub best_key: Key,
    pub best_score: f64,
    pub improvements: Vec<Improvement>,

    pub iterations: usize,
    pub accepted: usize,

    pub rng: Rng,
}

impl Annealer {
    /// Perturbs `start` and scores it. `start` itself is not modified.
    pub fn new(scorer: Arc<SwapScorer>, params: AnnealParams, start: Key, mut rng: Rng) -> Self {
        let mut key = start;
        mutation::perturb(&mut key, &mut rng, params.perturbation_swaps);
        key.assert_bijection();

        let score = scorer.score(&key);
        let temperature = params.initial_temperature;

        Self {
            scorer,
            params,
            key,
            score,
            temperature,
            stall: 0,
            best_key: key,
            best_score: score,
            improvements: Vec::new(),
            iterations: 0,
            accepted: 0,
            rng,
        }
    }
}
