pub mod delta;
pub mod engine;
pub mod loader;
pub mod tables;
pub mod types;

pub use self::delta::SwapScorer;
use self::loader::RawNGrams;
pub use self::types::{pack, NGramOrder, OrderBreakdown, ScoreDetails};
use crate::alphabet::{letter_index, CipherSequence};
use crate::config::ModelParams;
use crate::error::{CfResult, CipherForgeError};
use crate::key::Key;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Bigram, trigram and quadgram log-likelihood tables plus the weights that
/// blend them. Read-only once built.
pub struct LanguageModel {
    pub params: ModelParams,
    tables: [Vec<f64>; 3],
}

#[derive(TypedBuilder)]
pub struct ModelBuildParams {
    #[builder(default)]
    pub params: ModelParams,
    #[builder(default = RawNGrams::builtin())]
    pub ngrams: RawNGrams,
}

impl ModelBuildParams {
    pub fn build_model(self) -> CfResult<LanguageModel> {
        self.params.validate()?;
        let floors = self.params.floors();

        let mut tables: [Vec<f64>; 3] =
            NGramOrder::ALL.map(|order| vec![floors[order.slot()]; order.table_size()]);

        let mut loaded = [0usize; 3];
        for (gram, log) in &self.ngrams.entries {
            let order = NGramOrder::from_width(gram.len()).ok_or_else(|| {
                CipherForgeError::Validation(format!("n-gram '{}' has unsupported length", gram))
            })?;
            let symbols = gram
                .chars()
                .map(letter_index)
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| {
                    CipherForgeError::Validation(format!("n-gram '{}' contains non-letters", gram))
                })?;
            tables[order.slot()][pack(&symbols)] = *log;
            loaded[order.slot()] += 1;
        }

        debug!(
            "Language model ready: {} bigrams, {} trigrams, {} quadgrams",
            loaded[0], loaded[1], loaded[2]
        );

        Ok(LanguageModel {
            params: self.params,
            tables,
        })
    }
}

impl LanguageModel {
    pub fn new(params: ModelParams) -> CfResult<Self> {
        ModelBuildParams::builder().params(params).build().build_model()
    }

    /// Built-in English tables with default floors and weights.
    pub fn english() -> CfResult<Self> {
        Self::new(ModelParams::default())
    }

    #[inline(always)]
    pub fn table(&self, order: NGramOrder) -> &[f64] {
        &self.tables[order.slot()]
    }

    #[inline(always)]
    pub fn lookup(&self, order: NGramOrder, packed: usize) -> f64 {
        self.tables[order.slot()][packed]
    }

    pub fn floor(&self, order: NGramOrder) -> f64 {
        self.params.floors()[order.slot()]
    }

    pub fn weight(&self, order: NGramOrder) -> f64 {
        self.params.weights()[order.slot()]
    }

    /// Composite score of decoding `seq` with `key`; higher is better.
    pub fn score(&self, seq: &CipherSequence, key: &Key) -> f64 {
        engine::score_sequence(self, seq.as_slice(), key)
    }

    pub fn score_details(&self, seq: &CipherSequence, key: &Key) -> ScoreDetails {
        engine::score_details(self, seq.as_slice(), key)
    }
}
