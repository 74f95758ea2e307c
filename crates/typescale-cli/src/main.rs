// this_file: crates/typescale-cli/src/main.rs

//! Typescale CLI - type scales, fallback metrics and font CSS from the command line

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match &cli.command {
        Commands::Info => commands::info::run(),
        Commands::Metrics(args) => commands::metrics::run(args),
        Commands::Scale(args) => commands::scale::run(args),
        Commands::Fallback(args) => commands::fallback::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Css(args) => commands::css::run(args),
        Commands::Variants(args) => commands::variants::run(args),
        Commands::Export(args) => commands::export::run(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
