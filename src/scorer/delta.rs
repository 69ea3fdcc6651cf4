use super::types::{pack, NGramOrder};
use super::LanguageModel;
use crate::alphabet::CipherSequence;
use crate::consts::{ALPHABET_LEN, SCORE_SENTINEL};
use crate::key::Key;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
struct CipherGram {
    letters: [u8; 4],
    count: f64,
}

/// Distinct cipher n-grams of one order, with a per-letter index (CSR) of the
/// n-grams each cipher letter takes part in.
#[derive(Debug)]
struct GramIndex {
    order: NGramOrder,
    /// weight / window count, so that Σ count·table × scale is the weighted mean.
    scale: f64,
    grams: Vec<CipherGram>,
    letter_starts: Vec<usize>,
    letter_grams: Vec<u32>,
}

impl GramIndex {
    fn build(model: &LanguageModel, symbols: &[u8], order: NGramOrder) -> Self {
        let width = order.width();

        // BTreeMap keeps iteration order fixed, so sums are reproducible.
        let mut counts: BTreeMap<usize, (u32, [u8; 4])> = BTreeMap::new();
        let mut windows = 0usize;
        for w in symbols.windows(width) {
            let mut letters = [0u8; 4];
            letters[..width].copy_from_slice(w);
            counts.entry(pack(w)).or_insert((0, letters)).0 += 1;
            windows += 1;
        }

        let grams: Vec<CipherGram> = counts
            .into_values()
            .map(|(count, letters)| CipherGram {
                letters,
                count: count as f64,
            })
            .collect();

        let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); ALPHABET_LEN];
        for (gi, g) in grams.iter().enumerate() {
            let mut seen = [false; ALPHABET_LEN];
            for &l in &g.letters[..width] {
                if !seen[l as usize] {
                    seen[l as usize] = true;
                    buckets[l as usize].push(gi as u32);
                }
            }
        }

        let mut letter_starts = Vec::with_capacity(ALPHABET_LEN + 1);
        let mut letter_grams = Vec::new();
        letter_starts.push(0);
        for bucket in buckets {
            letter_grams.extend(bucket);
            letter_starts.push(letter_grams.len());
        }

        let scale = if windows == 0 {
            0.0
        } else {
            model.weight(order) / windows as f64
        };

        Self {
            order,
            scale,
            grams,
            letter_starts,
            letter_grams,
        }
    }

    #[inline(always)]
    fn packed_under<F: Fn(u8) -> u8>(&self, g: &CipherGram, map: F) -> usize {
        g.letters[..self.order.width()]
            .iter()
            .fold(0usize, |acc, &c| acc * ALPHABET_LEN + map(c) as usize)
    }

    fn score(&self, model: &LanguageModel, key: &Key) -> f64 {
        let table = model.table(self.order);
        let sum: f64 = self
            .grams
            .iter()
            .map(|g| g.count * table[self.packed_under(g, |c| key.plain_index(c))])
            .sum();
        sum * self.scale
    }

    fn swap_delta(&self, model: &LanguageModel, key: &Key, a: usize, b: usize) -> f64 {
        let table = model.table(self.order);
        let width = self.order.width();
        let (ca, cb) = (a as u8, b as u8);
        let (pa, pb) = (key.plain_index(ca), key.plain_index(cb));
        let swapped = |c: u8| {
            if c == ca {
                pb
            } else if c == cb {
                pa
            } else {
                key.plain_index(c)
            }
        };

        let mut delta = 0.0;

        // A's n-grams
        for &gi in &self.letter_grams[self.letter_starts[a]..self.letter_starts[a + 1]] {
            let g = &self.grams[gi as usize];
            let old = table[self.packed_under(g, |c| key.plain_index(c))];
            let new = table[self.packed_under(g, swapped)];
            delta += g.count * (new - old);
        }

        // B's n-grams, minus those already counted with A
        for &gi in &self.letter_grams[self.letter_starts[b]..self.letter_starts[b + 1]] {
            let g = &self.grams[gi as usize];
            if g.letters[..width].contains(&ca) {
                continue;
            }
            let old = table[self.packed_under(g, |c| key.plain_index(c))];
            let new = table[self.packed_under(g, swapped)];
            delta += g.count * (new - old);
        }

        delta * self.scale
    }
}

/// Scores keys against one ciphertext without walking the whole sequence.
///
/// The sequence is compiled into distinct cipher n-grams with counts, so a
/// full score costs O(distinct n-grams) and a swap delta only touches the
/// n-grams containing one of the two swapped cipher letters. Agrees with
/// [`LanguageModel::score`] up to floating-point summation order.
pub struct SwapScorer {
    model: Arc<LanguageModel>,
    indices: Vec<GramIndex>,
    letters: usize,
}

impl SwapScorer {
    pub fn new(model: Arc<LanguageModel>, seq: &CipherSequence) -> Self {
        let indices = NGramOrder::ALL
            .iter()
            .map(|&order| GramIndex::build(&model, seq.as_slice(), order))
            .collect();
        Self {
            model,
            indices,
            letters: seq.len(),
        }
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    pub fn letters(&self) -> usize {
        self.letters
    }

    /// Distinct cipher n-grams per order (bigram, trigram, quadgram).
    pub fn distinct_grams(&self) -> [usize; 3] {
        [
            self.indices[0].grams.len(),
            self.indices[1].grams.len(),
            self.indices[2].grams.len(),
        ]
    }

    pub fn score(&self, key: &Key) -> f64 {
        if self.letters < 2 {
            return SCORE_SENTINEL;
        }
        self.indices
            .iter()
            .map(|ix| ix.score(&self.model, key))
            .sum()
    }

    /// Score change from swapping key positions `a` and `b`. The key itself is
    /// not modified.
    #[inline]
    pub fn swap_delta(&self, key: &Key, a: usize, b: usize) -> f64 {
        if self.letters < 2 || a == b {
            return 0.0;
        }
        self.indices
            .iter()
            .map(|ix| ix.swap_delta(&self.model, key, a, b))
            .sum()
    }
}
