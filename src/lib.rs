//! shiftmetrics library root.
//! Exposes the CLI parser, the high-level run() function, and the engine
//! modules (normalize, classify, filter, aggregate, kpi, ranking).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Classify { .. } => cli::commands::classify::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Top { .. } => cli::commands::top::handle(&cli.command, cfg),
        Commands::Flags { .. } => cli::commands::flags::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once; --config overrides the standard path.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
