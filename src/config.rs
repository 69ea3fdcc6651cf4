use crate::consts::*;
use crate::error::{CfResult, CipherForgeError};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CrackConfig {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub model: ModelParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Independent annealing runs, executed in parallel
    #[arg(short = 'r', long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,

    /// Annealing iterations per restart
    #[arg(long, visible_alias = "iter", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    #[arg(long, default_value_t = DEFAULT_INITIAL_TEMPERATURE)]
    pub initial_temperature: f64,
    #[arg(long, default_value_t = DEFAULT_COOLING_FACTOR)]
    pub cooling_factor: f64,

    /// Stop a restart after this many iterations without a new best
    #[arg(long, default_value_t = DEFAULT_EARLY_STALL)]
    pub early_stall: usize,

    #[arg(long = "no-lateral", action = ArgAction::SetFalse)]
    pub lateral_moves: bool,
    #[arg(long, default_value_t = DEFAULT_LATERAL_EPSILON)]
    pub lateral_epsilon: f64,

    #[arg(long = "no-word-tie", action = ArgAction::SetFalse)]
    pub word_tiebreak: bool,

    #[arg(long = "no-refine", action = ArgAction::SetFalse)]
    pub refine: bool,

    /// Random swaps applied to the frequency key before annealing
    #[arg(long, default_value_t = DEFAULT_PERTURBATION_SWAPS)]
    pub perturbation_swaps: usize,

    /// Letters required before a restart is allowed to run
    #[arg(long, default_value_t = DEFAULT_MIN_LETTERS)]
    pub min_letters: usize,

    /// Plaintext letters ordered by expected frequency
    #[arg(long, default_value = ENGLISH_FREQUENCY_ORDER)]
    pub frequency_order: String,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling_factor: DEFAULT_COOLING_FACTOR,
            early_stall: DEFAULT_EARLY_STALL,
            lateral_moves: true,
            lateral_epsilon: DEFAULT_LATERAL_EPSILON,
            word_tiebreak: true,
            refine: true,
            perturbation_swaps: DEFAULT_PERTURBATION_SWAPS,
            min_letters: DEFAULT_MIN_LETTERS,
            frequency_order: ENGLISH_FREQUENCY_ORDER.to_string(),
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    // === FLOORS (log-likelihood of unseen n-grams) ===
    #[arg(long, default_value_t = DEFAULT_BIGRAM_FLOOR, allow_negative_numbers = true)]
    pub bigram_floor: f64,
    #[arg(long, default_value_t = DEFAULT_TRIGRAM_FLOOR, allow_negative_numbers = true)]
    pub trigram_floor: f64,
    #[arg(long, default_value_t = DEFAULT_QUADGRAM_FLOOR, allow_negative_numbers = true)]
    pub quadgram_floor: f64,

    // === MIXTURE WEIGHTS ===
    #[arg(long, default_value_t = DEFAULT_WEIGHT_BIGRAM)]
    pub weight_bigram: f64,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_TRIGRAM)]
    pub weight_trigram: f64,
    #[arg(long, default_value_t = DEFAULT_WEIGHT_QUADGRAM)]
    pub weight_quadgram: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            bigram_floor: DEFAULT_BIGRAM_FLOOR,
            trigram_floor: DEFAULT_TRIGRAM_FLOOR,
            quadgram_floor: DEFAULT_QUADGRAM_FLOOR,
            weight_bigram: DEFAULT_WEIGHT_BIGRAM,
            weight_trigram: DEFAULT_WEIGHT_TRIGRAM,
            weight_quadgram: DEFAULT_WEIGHT_QUADGRAM,
        }
    }
}

impl ModelParams {
    /// Floors in bigram, trigram, quadgram order.
    pub fn floors(&self) -> [f64; 3] {
        [self.bigram_floor, self.trigram_floor, self.quadgram_floor]
    }

    pub fn weights(&self) -> [f64; 3] {
        [self.weight_bigram, self.weight_trigram, self.weight_quadgram]
    }

    pub fn validate(&self) -> CfResult<()> {
        for (name, floor) in ["bigram", "trigram", "quadgram"].iter().zip(self.floors()) {
            if !floor.is_finite() || floor > 0.0 {
                return Err(CipherForgeError::Config(format!(
                    "{}_floor must be a finite log-likelihood <= 0 (got {})",
                    name, floor
                )));
            }
        }
        for (name, w) in ["bigram", "trigram", "quadgram"].iter().zip(self.weights()) {
            if !w.is_finite() || w < 0.0 {
                return Err(CipherForgeError::Config(format!(
                    "weight_{} must be finite and non-negative (got {})",
                    name, w
                )));
            }
        }
        Ok(())
    }
}

impl SearchParams {
    pub fn validate(&self) -> CfResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(CipherForgeError::Config(format!(
                "initial_temperature must be positive (got {})",
                self.initial_temperature
            )));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(CipherForgeError::Config(format!(
                "cooling_factor must lie in (0, 1) (got {})",
                self.cooling_factor
            )));
        }
        if !self.lateral_epsilon.is_finite() || self.lateral_epsilon < 0.0 {
            return Err(CipherForgeError::Config(format!(
                "lateral_epsilon must be finite and non-negative (got {})",
                self.lateral_epsilon
            )));
        }
        self.frequency_indices().map(|_| ())
    }

    pub fn frequency_indices(&self) -> CfResult<Vec<u8>> {
        parse_frequency_order(&self.frequency_order)
    }
}

/// Parses a plaintext frequency order into alphabet indices. Letters may be
/// missing but never repeated.
pub fn parse_frequency_order(text: &str) -> CfResult<Vec<u8>> {
    let mut seen = [false; ALPHABET_LEN];
    let mut order = Vec::with_capacity(ALPHABET_LEN);
    for ch in text.trim().chars() {
        let idx = crate::alphabet::letter_index(ch).ok_or_else(|| {
            CipherForgeError::Config(format!("frequency_order contains non-letter '{}'", ch))
        })?;
        if seen[idx as usize] {
            return Err(CipherForgeError::Config(format!(
                "frequency_order repeats '{}'",
                ch
            )));
        }
        seen[idx as usize] = true;
        order.push(idx);
    }
    Ok(order)
}

macro_rules! update_if_present {
    ($self:ident, $cli:ident, $matches:ident, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $self.$field = $cli.$field.clone();
            }
        )+
    };
}

impl SearchParams {
    /// Copies the search flags given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            restarts,
            max_iterations,
            initial_temperature,
            cooling_factor,
            early_stall,
            lateral_moves,
            lateral_epsilon,
            word_tiebreak,
            refine,
            perturbation_swaps,
            min_letters,
            frequency_order,
            seed,
        );
    }
}

impl ModelParams {
    /// Copies the model flags given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &ModelParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            bigram_floor,
            trigram_floor,
            quadgram_floor,
            weight_bigram,
            weight_trigram,
            weight_quadgram,
        );
    }
}

impl CrackConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> CfResult<()> {
        self.search.validate()?;
        self.model.validate()
    }

    /// Copies every value that was given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &CrackConfig, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.model.merge_from_cli(&cli.model, matches);
    }
}
