use super::tables::{BIGRAM_LOGS, QUADGRAM_LOGS, TRIGRAM_LOGS};
use super::types::NGramOrder;
use crate::error::CfResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// N-gram log-likelihoods keyed by lowercase letter strings.
#[derive(Debug, Clone, Default)]
pub struct RawNGrams {
    pub entries: Vec<(String, f64)>,
}

impl RawNGrams {
    /// The compact English tables compiled into the crate.
    pub fn builtin() -> Self {
        let entries = BIGRAM_LOGS
            .iter()
            .chain(TRIGRAM_LOGS)
            .chain(QUADGRAM_LOGS)
            .map(|&(gram, log)| (gram.to_string(), log))
            .collect();
        Self { entries }
    }

    pub fn count(&self, order: NGramOrder) -> usize {
        self.entries
            .iter()
            .filter(|(g, _)| g.len() == order.width())
            .count()
    }
}

pub fn load_ngrams<P: AsRef<Path>>(path: P) -> CfResult<RawNGrams> {
    let path = path.as_ref();
    info!("Loading n-grams from: {}", path.display());
    let file = File::open(path)?;
    load_ngrams_from_reader(file)
}

/// Reads `ngram<TAB>value` lines. Per order, values that are all <= 0 are
/// taken as log-likelihoods; otherwise they are counts and get converted to
/// `log10(count / total)`.
pub fn load_ngrams_from_reader<R: Read>(reader: R) -> CfResult<RawNGrams> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut per_order: [Vec<(String, f64)>; 3] = Default::default();
    let mut lines_read = 0;
    let mut skipped = 0;

    for result in rdr.records() {
        let rec = result?;
        lines_read += 1;
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let gram = rec[0].trim().to_ascii_lowercase();
        let order = match NGramOrder::from_width(gram.len()) {
            Some(o) if gram.bytes().all(|b| b.is_ascii_lowercase()) => o,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let value: f64 = match rec[1].trim().parse() {
            Ok(v) if f64::is_finite(v) => v,
            _ => {
                skipped += 1;
                continue;
            }
        };

        per_order[order.slot()].push((gram, value));
    }

    let mut entries = Vec::new();
    for order in NGramOrder::ALL {
        let rows = std::mem::take(&mut per_order[order.slot()]);
        if rows.iter().any(|(_, v)| *v > 0.0) {
            let total: f64 = rows.iter().filter(|(_, v)| *v > 0.0).map(|(_, v)| v).sum();
            debug!("{} values read as counts (total {})", order, total);
            entries.extend(
                rows.into_iter()
                    .filter(|(_, v)| *v > 0.0)
                    .map(|(g, v)| (g, (v / total).log10())),
            );
        } else {
            entries.extend(rows);
        }
    }

    debug!(
        "Scanned {} lines, kept {} n-grams, skipped {}",
        lines_read,
        entries.len(),
        skipped
    );

    Ok(RawNGrams { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builtin_has_all_orders() {
        let raw = RawNGrams::builtin();
        assert_eq!(raw.count(NGramOrder::Bigram), 70);
        assert_eq!(raw.count(NGramOrder::Trigram), 65);
        assert_eq!(raw.count(NGramOrder::Quadgram), 55);
    }

    #[test]
    fn counts_become_log_probabilities() {
        let data = "TH\t300\nhe\t100\n";
        let raw = load_ngrams_from_reader(Cursor::new(data)).unwrap();
        let th = raw.entries.iter().find(|(g, _)| g == "th").unwrap().1;
        assert!((th - 0.75f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn log_values_are_kept_and_junk_skipped() {
        let data = "the\t-2.5\nt-e\t-1.0\nabcde\t-3.0\nand\tnope\nx\t-1.0\n";
        let raw = load_ngrams_from_reader(Cursor::new(data)).unwrap();
        assert_eq!(raw.entries, vec![("the".to_string(), -2.5)]);
    }
}
