use super::initialization::frequency_key;
use super::refine::refine;
use super::{AnnealParams, Annealer, StopReason};
use crate::alphabet::CipherSequence;
use crate::config::CrackConfig;
use crate::consts::TIE_TOLERANCE;
use crate::error::{CfResult, CipherForgeError};
use crate::key::Key;
use crate::scorer::{LanguageModel, SwapScorer};
use crate::words::word_coverage;
use fastrand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct CrackOptions {
    pub restarts: usize,
    pub seed: Option<u64>,
    pub refine: bool,
    pub word_tiebreak: bool,
    pub min_letters: usize,
    pub frequency_order: String,
    pub anneal: AnnealParams,
}

impl From<&CrackConfig> for CrackOptions {
    fn from(cfg: &CrackConfig) -> Self {
        Self {
            restarts: cfg.search.restarts,
            seed: cfg.search.seed,
            refine: cfg.search.refine,
            word_tiebreak: cfg.search.word_tiebreak,
            min_letters: cfg.search.min_letters,
            frequency_order: cfg.search.frequency_order.clone(),
            anneal: AnnealParams::from(cfg),
        }
    }
}

impl Default for CrackOptions {
    fn default() -> Self {
        Self::from(&CrackConfig::default())
    }
}

/// The finished result of one restart.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub restart: usize,
    pub key: Key,
    pub score: f64,
    pub plaintext: String,
    pub word_coverage: f64,
    pub iterations: usize,
    pub accepted: usize,
    pub refine_swaps: usize,
    pub stop_reason: StopReason,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartSummary {
    pub restart: usize,
    pub score: Option<f64>,
    pub word_coverage: Option<f64>,
    pub iterations: usize,
    pub accepted: usize,
    pub refine_swaps: usize,
    pub stop_reason: Option<StopReason>,
    pub error: Option<String>,
}

impl RestartSummary {
    fn from_result(restart: usize, result: &CfResult<ScoredCandidate>) -> Self {
        match result {
            Ok(c) => Self {
                restart,
                score: Some(c.score),
                word_coverage: Some(c.word_coverage),
                iterations: c.iterations,
                accepted: c.accepted,
                refine_swaps: c.refine_swaps,
                stop_reason: Some(c.stop_reason),
                error: None,
            },
            Err(e) => Self {
                restart,
                score: None,
                word_coverage: None,
                iterations: 0,
                accepted: 0,
                refine_swaps: 0,
                stop_reason: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrackOutcome {
    pub key: Key,
    pub plaintext: String,
    pub score: f64,
    pub mapping: String,
    pub word_coverage: f64,
    pub winner: usize,
    pub restarts: Vec<RestartSummary>,
}

/// Receives each restart's summary as soon as that restart finishes. Called
/// from worker threads, in completion order.
pub trait ProgressCallback: Send + Sync {
    fn on_restart(&self, summary: &RestartSummary, total: usize);
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_restart(&self, _summary: &RestartSummary, _total: usize) {}
}

pub struct Cracker {
    model: Arc<LanguageModel>,
    options: CrackOptions,
}

impl Cracker {
    pub fn new(model: Arc<LanguageModel>, options: CrackOptions) -> Self {
        Self { model, options }
    }

    pub fn options(&self) -> &CrackOptions {
        &self.options
    }

    /// Runs every restart in parallel and picks the winner. Restarts that fail
    /// are logged and left out; only a run with no survivors is an error.
    pub fn crack<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        callback: &CB,
    ) -> CfResult<CrackOutcome> {
        let opts = &self.options;
        let seq = CipherSequence::from_text(ciphertext);
        let plain_order = crate::config::parse_frequency_order(&opts.frequency_order)?;

        // 1. Shared, read-only setup
        let scorer = Arc::new(SwapScorer::new(self.model.clone(), &seq));
        let start = frequency_key(&seq, &plain_order);
        debug!(
            "Cracking {} letters, {} restarts, start key {}",
            seq.len(),
            opts.restarts,
            start
        );

        // 2. Fan out (collected in restart order)
        let results: Vec<CfResult<ScoredCandidate>> = (0..opts.restarts)
            .into_par_iter()
            .map(|restart| {
                let result = self.run_restart(restart, &seq, &scorer, start, ciphertext);
                let summary = RestartSummary::from_result(restart, &result);
                match &result {
                    Ok(c) => debug!(
                        "Restart {}/{} | score={:.4} | wordcov={:.3}",
                        restart + 1,
                        opts.restarts,
                        c.score,
                        c.word_coverage
                    ),
                    Err(e) => warn!("Restart {}/{} failed: {}", restart + 1, opts.restarts, e),
                }
                callback.on_restart(&summary, opts.restarts);
                result
            })
            .collect();

        // 3. Fold
        let summaries: Vec<RestartSummary> = results
            .iter()
            .enumerate()
            .map(|(i, r)| RestartSummary::from_result(i, r))
            .collect();
        let candidates: Vec<ScoredCandidate> =
            results.into_iter().filter_map(Result::ok).collect();

        let best_idx = select_best(&candidates, opts.word_tiebreak).ok_or(
            CipherForgeError::NoCandidates {
                restarts: opts.restarts,
            },
        )?;
        let best = &candidates[best_idx];

        info!(
            "Best: restart {} with score {:.4} ({} of {} restarts succeeded)",
            best.restart + 1,
            best.score,
            candidates.len(),
            opts.restarts
        );

        Ok(CrackOutcome {
            key: best.key,
            plaintext: best.plaintext.clone(),
            score: best.score,
            mapping: best.key.mapping_string(),
            word_coverage: best.word_coverage,
            winner: best.restart,
            restarts: summaries,
        })
    }

    fn run_restart(
        &self,
        restart: usize,
        seq: &CipherSequence,
        scorer: &Arc<SwapScorer>,
        start: Key,
        ciphertext: &str,
    ) -> CfResult<ScoredCandidate> {
        let opts = &self.options;
        if seq.len() < opts.min_letters {
            return Err(CipherForgeError::InputTooShort {
                restart,
                letters: seq.len(),
                minimum: opts.min_letters,
            });
        }

        let rng = match opts.seed {
            Some(s) => Rng::with_seed(s.wrapping_add(restart as u64)),
            None => Rng::new(),
        };

        let annealed = Annealer::new(scorer.clone(), opts.anneal.clone(), start, rng).run();

        let (key, refine_swaps) = if opts.refine {
            let refined = refine(scorer, annealed.key);
            (refined.key, refined.swaps)
        } else {
            (annealed.key, 0)
        };
        key.assert_bijection();

        let score = self.model.score(seq, &key);
        let plaintext = key.decode(ciphertext);
        let word_coverage = word_coverage(&plaintext);

        Ok(ScoredCandidate {
            restart,
            key,
            score,
            plaintext,
            word_coverage,
            iterations: annealed.iterations,
            accepted: annealed.accepted,
            refine_swaps,
            stop_reason: annealed.stop_reason,
        })
    }
}

/// `challenger` beats `incumbent` on a clearly higher score, or on a near-tie
/// with better word coverage when the tie-break is on.
fn beats(challenger: &ScoredCandidate, incumbent: &ScoredCandidate, word_tiebreak: bool) -> bool {
    if challenger.score > incumbent.score + TIE_TOLERANCE {
        return true;
    }
    if challenger.score < incumbent.score - TIE_TOLERANCE {
        return false;
    }
    word_tiebreak && challenger.word_coverage > incumbent.word_coverage
}

/// Index of the winning candidate. Remaining ties go to the earliest.
pub fn select_best(candidates: &[ScoredCandidate], word_tiebreak: bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in candidates.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if beats(c, &candidates[b], word_tiebreak) => best = Some(i),
            Some(_) => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(restart: usize, score: f64, word_coverage: f64) -> ScoredCandidate {
        ScoredCandidate {
            restart,
            key: Key::identity(),
            score,
            plaintext: String::new(),
            word_coverage,
            iterations: 0,
            accepted: 0,
            refine_swaps: 0,
            stop_reason: StopReason::MaxIterations,
        }
    }

    #[test]
    fn higher_score_wins() {
        let c = vec![candidate(0, -5.0, 0.9), candidate(1, -4.0, 0.1)];
        assert_eq!(select_best(&c, true), Some(1));
    }

    #[test]
    fn near_tie_goes_to_word_coverage() {
        let c = vec![candidate(0, -4.0, 0.2), candidate(1, -4.0 + 1e-14, 0.6)];
        assert_eq!(select_best(&c, true), Some(1));
        let c = vec![candidate(0, -4.0, 0.2), candidate(1, -4.0 - 1e-14, 0.6)];
        assert_eq!(select_best(&c, true), Some(1));
    }

    #[test]
    fn first_wins_remaining_ties() {
        let c = vec![candidate(0, -4.0, 0.6), candidate(1, -4.0, 0.2)];
        assert_eq!(select_best(&c, true), Some(0));
        let c = vec![candidate(0, -4.0, 0.2), candidate(1, -4.0, 0.6)];
        assert_eq!(select_best(&c, false), Some(0));
    }

    #[test]
    fn no_candidates_is_none() {
        assert_eq!(select_best(&[], true), None);
    }

    #[test]
    fn short_input_fails_every_restart() {
        let model = Arc::new(LanguageModel::english().unwrap());
        let options = CrackOptions {
            restarts: 3,
            seed: Some(1),
            ..CrackOptions::default()
        };
        let err = Cracker::new(model, options)
            .crack("Only twenty letters here", &NoProgress)
            .unwrap_err();
        assert!(matches!(err, CipherForgeError::NoCandidates { restarts: 3 }));
    }
}
