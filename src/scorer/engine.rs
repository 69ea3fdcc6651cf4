use super::types::{NGramOrder, OrderBreakdown, ScoreDetails};
use super::LanguageModel;
use crate::consts::{ALPHABET_LEN, SCORE_SENTINEL};
use crate::key::Key;

const N1: usize = ALPHABET_LEN;
const N2: usize = ALPHABET_LEN * ALPHABET_LEN;
const N3: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// The last three decoded symbols, oldest first.
#[derive(Default)]
struct Window {
    recent: [usize; 3],
    filled: usize,
}

impl Window {
    #[inline(always)]
    fn push(&mut self, symbol: usize) {
        self.recent = [self.recent[1], self.recent[2], symbol];
        if self.filled < 3 {
            self.filled += 1;
        }
    }
}

#[derive(Default)]
struct WindowTotals {
    sums: [f64; 3],
    counts: [usize; 3],
    hits: [usize; 3],
}

impl WindowTotals {
    #[inline(always)]
    fn add(&mut self, model: &LanguageModel, order: NGramOrder, packed: usize) {
        let slot = order.slot();
        let value = model.lookup(order, packed);
        self.sums[slot] += value;
        self.counts[slot] += 1;
        if value != model.floor(order) {
            self.hits[slot] += 1;
        }
    }

    fn mean(&self, slot: usize) -> f64 {
        if self.counts[slot] == 0 {
            0.0
        } else {
            self.sums[slot] / self.counts[slot] as f64
        }
    }
}

fn fold_windows(model: &LanguageModel, symbols: &[u8], key: &Key) -> WindowTotals {
    let (totals, _) = symbols.iter().fold(
        (WindowTotals::default(), Window::default()),
        |(mut totals, mut window), &s| {
            let cur = key.plain_index(s) as usize;
            let [q, t, b] = window.recent;
            if window.filled >= 1 {
                totals.add(model, NGramOrder::Bigram, b * N1 + cur);
            }
            if window.filled >= 2 {
                totals.add(model, NGramOrder::Trigram, t * N2 + b * N1 + cur);
            }
            if window.filled >= 3 {
                totals.add(model, NGramOrder::Quadgram, q * N3 + t * N2 + b * N1 + cur);
            }
            window.push(cur);
            (totals, window)
        },
    );
    totals
}

/// Reference scorer: one pass over the sequence, each order's mean weighted
/// and summed. Sequences under two letters get the sentinel.
pub fn score_sequence(model: &LanguageModel, symbols: &[u8], key: &Key) -> f64 {
    if symbols.len() < 2 {
        return SCORE_SENTINEL;
    }
    let totals = fold_windows(model, symbols, key);
    NGramOrder::ALL
        .iter()
        .map(|&order| model.weight(order) * totals.mean(order.slot()))
        .sum()
}

pub fn score_details(model: &LanguageModel, symbols: &[u8], key: &Key) -> ScoreDetails {
    let totals = fold_windows(model, symbols, key);
    let orders = NGramOrder::ALL
        .iter()
        .map(|&order| OrderBreakdown {
            order,
            weight: model.weight(order),
            mean: totals.mean(order.slot()),
            windows: totals.counts[order.slot()],
            known_hits: totals.hits[order.slot()],
        })
        .collect();

    ScoreDetails {
        composite: score_sequence(model, symbols, key),
        letters: symbols.len(),
        orders,
    }
}
