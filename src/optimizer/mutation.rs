use crate::consts::ALPHABET_LEN;
use crate::key::Key;
use fastrand::Rng;

/// Applies `swaps` random transpositions. Positions are drawn independently,
/// so a draw that lands on the same position twice leaves the key unchanged.
pub fn perturb(key: &mut Key, rng: &mut Rng, swaps: usize) {
    for _ in 0..swaps {
        let a = rng.usize(0..ALPHABET_LEN);
        let b = rng.usize(0..ALPHABET_LEN);
        key.swap(a, b);
    }
}

/// Two distinct key positions, uniformly over ordered pairs.
#[inline(always)]
pub fn random_pair(rng: &mut Rng) -> (usize, usize) {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}
