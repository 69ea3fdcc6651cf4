mod common;

use cipherforge::alphabet::CipherSequence;
use cipherforge::config::parse_frequency_order;
use cipherforge::consts::{ALPHABET_LEN, ENGLISH_FREQUENCY_ORDER};
use cipherforge::key::Key;
use cipherforge::optimizer::initialization::frequency_key;
use cipherforge::optimizer::{mutation, refine, AnnealParams, Annealer, StopReason};
use cipherforge::scorer::{LanguageModel, SwapScorer};
use fastrand::Rng;
use std::sync::Arc;

fn setup() -> (Arc<LanguageModel>, CipherSequence, Arc<SwapScorer>) {
    let model = Arc::new(LanguageModel::english().unwrap());
    let seq = CipherSequence::from_text(&common::ciphertext());
    let scorer = Arc::new(SwapScorer::new(model.clone(), &seq));
    (model, seq, scorer)
}

fn english_order() -> Vec<u8> {
    parse_frequency_order(ENGLISH_FREQUENCY_ORDER).unwrap()
}

#[test]
fn heuristic_maps_most_frequent_cipher_letter_to_e() {
    let (_, seq, _) = setup();
    let key = frequency_key(&seq, &english_order());
    assert!(key.is_bijection());

    let counts = seq.letter_counts();
    let top = (0..ALPHABET_LEN)
        .max_by(|&a, &b| counts[a].cmp(&counts[b]).then(b.cmp(&a)))
        .unwrap();
    assert_eq!(key.plain_index(top as u8), 4);
}

#[test]
fn zero_iterations_only_perturbs() {
    let (_, seq, scorer) = setup();
    let start = frequency_key(&seq, &english_order());
    let params = AnnealParams {
        max_iterations: 0,
        ..AnnealParams::default()
    };

    let out = Annealer::new(scorer.clone(), params, start, Rng::with_seed(21)).run();

    let mut expected = start;
    mutation::perturb(&mut expected, &mut Rng::with_seed(21), 15);
    assert_eq!(out.perturbation_swaps, 15);
    assert_eq!(out.key, expected);
    assert_eq!(out.iterations, 0);
    assert_eq!(out.accepted, 0);
    assert_eq!(out.score, scorer.score(&expected));
}

#[test]
fn best_score_never_regresses() {
    let (_, _, scorer) = setup();
    let params = AnnealParams {
        max_iterations: 10_000,
        ..AnnealParams::default()
    };
    let annealer = Annealer::new(scorer, params, Key::identity(), Rng::with_seed(8));
    let initial = annealer.best_score;
    let out = annealer.run();

    assert!(out.score >= initial);
    assert!(out.key.is_bijection());
    let trace: Vec<f64> = out.improvements.iter().map(|i| i.score).collect();
    assert!(trace.windows(2).all(|w| w[1] > w[0]));
    assert!(out
        .improvements
        .windows(2)
        .all(|w| w[1].iteration > w[0].iteration));
    assert!(out.iterations <= 10_000);
    if out.stop_reason == StopReason::MaxIterations {
        assert_eq!(out.iterations, 10_000);
    }
}

#[test]
fn temperature_cools_geometrically() {
    let (_, _, scorer) = setup();
    let params = AnnealParams {
        max_iterations: 100,
        early_stall: usize::MAX,
        ..AnnealParams::default()
    };
    let t0 = params.initial_temperature;
    let factor = params.cooling_factor;
    let out = Annealer::new(scorer, params, Key::identity(), Rng::with_seed(2)).run();
    let expected = t0 * factor.powi(100);
    assert!((out.final_temperature - expected).abs() < 1e-12);
}

#[test]
fn refined_key_is_a_pairwise_local_optimum() {
    let (model, seq, scorer) = setup();
    let params = AnnealParams {
        max_iterations: 3_000,
        ..AnnealParams::default()
    };
    let annealed =
        Annealer::new(scorer.clone(), params, Key::identity(), Rng::with_seed(4)).run();
    let refined = refine(&scorer, annealed.key);

    assert!(refined.key.is_bijection());
    let base = model.score(&seq, &refined.key);
    for a in 0..ALPHABET_LEN {
        for b in (a + 1)..ALPHABET_LEN {
            let mut k = refined.key;
            k.swap(a, b);
            let s = model.score(&seq, &k);
            assert!(s <= base + 1e-9, "swap ({}, {}) improves {} -> {}", a, b, base, s);
        }
    }
}

#[test]
fn refinement_never_lowers_the_score() {
    let (_, _, scorer) = setup();
    let start = Key::identity();
    let before = scorer.score(&start);
    let out = refine(&scorer, start);
    assert!(out.score >= before);
    assert!((out.score - scorer.score(&out.key)).abs() < 1e-9);
}
