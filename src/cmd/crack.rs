use crate::reports;
use cipherforge::api;
use cipherforge::config::CrackConfig;
use cipherforge::error::CfResult;
use cipherforge::optimizer::runner::RestartSummary;
use cipherforge::optimizer::ProgressCallback;
use cipherforge::scorer::LanguageModel;
use clap::Args;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

/// Cracked when no input file is given.
pub const DEMO_CIPHERTEXT: &str = "Gsv hxrvmxv lu xibkgltizksb rh zmxrvmg, yfg rgh nlwvim
zkkorxzgrlmh ziv dswvob fhvw rm wrtrgzo xllnfmrxzgrlmh.
This is an example text to show how the cracker works with both
lowercase and Uppercase letters. Hopefully it will produce a good result.";

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub config: CrackConfig,

    /// Ciphertext file (UTF-8). Runs the demo sample when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write score, mapping and plaintext to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger {
    done: AtomicUsize,
}

impl ProgressCallback for CliLogger {
    fn on_restart(&self, summary: &RestartSummary, total: usize) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        match summary.score {
            Some(score) => info!(
                "⏳ [{}/{}] restart #{} | score={:.4} | wordcov={:.3} | iter={}",
                done,
                total,
                summary.restart + 1,
                score,
                summary.word_coverage.unwrap_or(0.0),
                summary.iterations
            ),
            None => info!(
                "⏳ [{}/{}] restart #{} failed",
                done,
                total,
                summary.restart + 1
            ),
        }
    }
}

pub fn run(args: &CrackArgs, config: &CrackConfig, model: Arc<LanguageModel>) -> CfResult<()> {
    let ciphertext = match &args.input {
        Some(path) => {
            info!("📂 Reading ciphertext: {}", path);
            fs::read_to_string(path)?
        }
        None => {
            info!("🧪 DEMO MODE (no --input given, using sample text)");
            DEMO_CIPHERTEXT.to_string()
        }
    };
    info!("Text length (raw): {} characters", ciphertext.chars().count());

    let logger = CliLogger {
        done: AtomicUsize::new(0),
    };
    let outcome = api::crack_text(&ciphertext, config, model, &logger)?;

    if let Some(path) = &args.output {
        api::save_result(path, &outcome)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    reports::print_restart_report(&outcome.restarts, outcome.winner);
    reports::print_mapping_grid("Best key", &outcome.key);

    println!("\n{}", "=".repeat(64));
    println!("BEST SCORE: {:.4}", outcome.score);
    println!("BEST KEY: {}", outcome.mapping);
    println!("WORD COVERAGE: {:.3}", outcome.word_coverage);
    println!("{}", "=".repeat(64));
    println!("\nPlaintext:\n{}", outcome.plaintext);
    Ok(())
}
