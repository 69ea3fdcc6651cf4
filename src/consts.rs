/// Size of the case-folded Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Canonical English letter order, most frequent first.
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Score returned for sequences too short to form a single bigram.
pub const SCORE_SENTINEL: f64 = -1e9;

/// Scores closer than this are treated as equal when picking a winner.
pub const TIE_TOLERANCE: f64 = 1e-12;

/// Below this temperature worsening moves are never accepted.
pub const MIN_TEMPERATURE: f64 = 1e-12;

/// A refinement swap must beat the current score by more than this.
pub const REFINE_EPSILON: f64 = 1e-12;

// Search defaults
pub const DEFAULT_RESTARTS: usize = 10;
pub const DEFAULT_MAX_ITERATIONS: usize = 25_000;
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 2.0;
pub const DEFAULT_COOLING_FACTOR: f64 = 0.9998;
pub const DEFAULT_EARLY_STALL: usize = 8_000;
pub const DEFAULT_LATERAL_EPSILON: f64 = 1e-12;
pub const DEFAULT_PERTURBATION_SWAPS: usize = 15;
pub const DEFAULT_MIN_LETTERS: usize = 100;

// Model defaults
pub const DEFAULT_BIGRAM_FLOOR: f64 = -10.0;
pub const DEFAULT_TRIGRAM_FLOOR: f64 = -12.0;
pub const DEFAULT_QUADGRAM_FLOOR: f64 = -15.0;
pub const DEFAULT_WEIGHT_BIGRAM: f64 = 0.2;
pub const DEFAULT_WEIGHT_TRIGRAM: f64 = 0.5;
pub const DEFAULT_WEIGHT_QUADGRAM: f64 = 0.3;
