use cipherforge::api;
use cipherforge::config::CrackConfig;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// N-gram table (ngram<TAB>value); the built-in English tables otherwise
    #[arg(global = true, short, long)]
    ngrams: Option<String>,

    /// JSON config file; explicit flags override its values
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Crack(cmd::crack::CrackArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing CipherForge...");

    let mut config = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            CrackConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            })
        }
        None => CrackConfig::default(),
    };

    match &cli.command {
        Commands::Crack(args) => {
            if let Some(sub) = matches.subcommand_matches("crack") {
                config.merge_from_cli(&args.config, sub);
            }
        }
        Commands::Score(args) => {
            if let Some(sub) = matches.subcommand_matches("score") {
                config.model.merge_from_cli(&args.model, sub);
            }
        }
    }

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let model = match api::load_model(&config, cli.ngrams.as_deref().map(Path::new)) {
        Ok(m) => Arc::new(m),
        Err(e) => {
            error!("❌ FATAL ERROR BUILDING LANGUAGE MODEL:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Crack(args) => cmd::crack::run(args, &config, model),
        Commands::Score(args) => cmd::score::run(args, &model),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
