use crate::alphabet::CipherSequence;
use crate::config::CrackConfig;
use crate::error::CfResult;
use crate::key::Key;
use crate::optimizer::{CrackOptions, CrackOutcome, Cracker, ProgressCallback};
use crate::scorer::loader::{self, RawNGrams};
use crate::scorer::{LanguageModel, ModelBuildParams, ScoreDetails};
use crate::words::word_coverage;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KeyReport {
    pub key: Key,
    pub mapping: String,
    pub plaintext: String,
    pub word_coverage: f64,
    pub score: ScoreDetails,
}

/// Service: Build the language model, from an n-gram file when one is given.
pub fn load_model(config: &CrackConfig, ngrams_path: Option<&Path>) -> CfResult<LanguageModel> {
    let ngrams = match ngrams_path {
        Some(path) => loader::load_ngrams(path)?,
        None => RawNGrams::builtin(),
    };
    info!("Model: {} n-gram entries", ngrams.entries.len());

    ModelBuildParams::builder()
        .params(config.model.clone())
        .ngrams(ngrams)
        .build()
        .build_model()
}

/// Service: Crack a ciphertext with the given configuration.
pub fn crack_text<CB: ProgressCallback>(
    ciphertext: &str,
    config: &CrackConfig,
    model: Arc<LanguageModel>,
    callback: &CB,
) -> CfResult<CrackOutcome> {
    config.validate()?;
    Cracker::new(model, CrackOptions::from(config)).crack(ciphertext, callback)
}

/// Service: Score a known key against a ciphertext.
pub fn score_with_key(model: &LanguageModel, ciphertext: &str, key: Key) -> KeyReport {
    let seq = CipherSequence::from_text(ciphertext);
    let plaintext = key.decode(ciphertext);
    KeyReport {
        key,
        mapping: key.mapping_string(),
        word_coverage: word_coverage(&plaintext),
        plaintext,
        score: model.score_details(&seq, &key),
    }
}

/// Result file layout: score to four decimals, then the mapping, then the
/// plaintext as-is.
pub fn render_result(outcome: &CrackOutcome) -> String {
    format!(
        "{:.4}\n{}\n{}",
        outcome.score, outcome.mapping, outcome.plaintext
    )
}

/// Service: Write a crack result to `path`.
pub fn save_result<P: AsRef<Path>>(path: P, outcome: &CrackOutcome) -> CfResult<()> {
    let path = path.as_ref();
    std::fs::write(path, render_result(outcome))?;
    info!("Result written to {}", path.display());
    Ok(())
}
