//! Main entry point for csvdiff CLI

use clap::Parser;
use csvdiff::cli::Cli;
use csvdiff::commands::execute_command;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging, verbose raises the default level
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("CsvDiff, Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = execute_command(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
