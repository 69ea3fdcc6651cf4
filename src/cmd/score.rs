use crate::reports;
use cipherforge::api;
use cipherforge::config::ModelParams;
use cipherforge::error::CfResult;
use cipherforge::key::Key;
use cipherforge::scorer::LanguageModel;
use clap::Args;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub model: ModelParams,

    #[arg(short, long)]
    pub input: String,

    /// 26-letter plain alphabet (cipher a..z order) or "a->x, b->y, ..."
    #[arg(short, long)]
    pub key: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ScoreArgs, model: &LanguageModel) -> CfResult<()> {
    let ciphertext = fs::read_to_string(&args.input)?;
    let key: Key = args.key.parse()?;
    let report = api::score_with_key(model, &ciphertext, key);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_mapping_grid("Key", &report.key);
    reports::print_score_breakdown(&report.score);
    println!("\nScore: {:.4}", report.score.composite);
    println!("Word coverage: {:.3}", report.word_coverage);
    println!("\nPlaintext:\n{}", report.plaintext);
    Ok(())
}
