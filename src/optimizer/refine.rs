use crate::consts::{ALPHABET_LEN, REFINE_EPSILON};
use crate::key::Key;
use crate::scorer::SwapScorer;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RefineOutcome {
    pub key: Key,
    pub score: f64,
    /// Improving swaps applied.
    pub swaps: usize,
    /// Full or partial passes over the 325 pairs, including the final empty one.
    pub scans: usize,
}

/// First-improvement 2-opt: take the first pair swap that raises the score by
/// more than `REFINE_EPSILON`, apply it and rescan from the start. Ends at a
/// key no single swap improves by more than `REFINE_EPSILON`; gains below that
/// are treated as ties.
pub fn refine(scorer: &SwapScorer, start: Key) -> RefineOutcome {
    let mut key = start;
    let mut score = scorer.score(&key);
    let mut swaps = 0;
    let mut scans = 0;

    'scan: loop {
        scans += 1;
        for a in 0..ALPHABET_LEN {
            for b in (a + 1)..ALPHABET_LEN {
                let delta = scorer.swap_delta(&key, a, b);
                if delta > REFINE_EPSILON {
                    key.swap(a, b);
                    score += delta;
                    swaps += 1;
                    continue 'scan;
                }
            }
        }
        break;
    }

    key.assert_bijection();
    RefineOutcome {
        key,
        score,
        swaps,
        scans,
    }
}
