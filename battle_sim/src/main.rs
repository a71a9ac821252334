//! Headless Battle Runner
//!
//! Recruits two armies, fights them to a decision and prints the result.

use army_core::ArmyReport;
use battle_sim::{load_battle_config, Battle, BattleConfig, BattleOutcome};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Headless Battle Runner - two randomly recruited armies fight to the end
#[derive(Parser, Debug)]
#[command(name = "battle_sim")]
#[command(about = "Run a battle between two randomly recruited armies")]
struct Args {
    /// TOML battle configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Size of the army that attacks first
    #[arg(long)]
    first: Option<i64>,

    /// Size of the army that attacks second
    #[arg(long)]
    second: Option<i64>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds before the battle is called a stalemate
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (per-round summaries)
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleSummary {
    seed: Option<u64>,
    outcome: BattleOutcome,
    first: ArmyReport,
    second: ArmyReport,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &Args) -> Result<BattleConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_battle_config(path)?,
        None => BattleConfig::default(),
    };
    if let Some(first) = args.first {
        config.first_size = first;
    }
    if let Some(second) = args.second {
        config.second_size = second;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    let mut battle = Battle::from_config(&config)?;
    tracing::info!(seed = ?battle.seed(), "Starting battle");

    let opening = battle.reports();
    let outcome = battle.run()?;
    let (first, second) = battle.reports();

    match args.format {
        OutputFormat::Json => {
            let summary = BattleSummary {
                seed: battle.seed(),
                outcome,
                first,
                second,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!("{}", battle.first());
            println!();
            println!("{}", battle.second());
            println!();
            println!("Opening: {} vs {}", opening.0.soldier_count, opening.1.soldier_count);
            println!("{}", first.summary());
            println!("{}", second.summary());
            println!("{}", outcome.summary());
        }
    }
    Ok(())
}
