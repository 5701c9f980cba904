//! Command implementation for the csvdiff CLI

use crate::cli::{Cli, OutputFormat};
use crate::config::DiffConfig;
use crate::error::{CsvDiffError, Result};
use crate::report::{JsonFormatter, TextReport};
use crate::run::{ComparisonRun, RunOutcome};
use std::fs;

/// Resolve the configuration for a command line
pub fn resolve_config(cli: &Cli) -> Result<DiffConfig> {
    let base = match &cli.config {
        Some(path) => DiffConfig::from_file(path)?,
        None => DiffConfig::default(),
    };
    let config = cli.apply_to(base);
    config.validate()?;
    Ok(config)
}

/// Compare the two files named on the command line and emit the report
pub fn execute_command(cli: &Cli) -> Result<RunOutcome> {
    let format = OutputFormat::parse(&cli.format).map_err(CsvDiffError::invalid_input)?;
    let config = resolve_config(cli)?;
    log::debug!("Effective configuration: {:?}", config);

    let run = ComparisonRun::new(config);
    let outcome = run.run_files(&cli.reference, &cli.data)?;
    let config = run.config();

    let body = match format {
        OutputFormat::Pretty => {
            let report = TextReport::new(&outcome, config);
            if let Some(warning) = report.mismatch_warning() {
                eprintln!("{}", warning);
            }
            report.render()
        }
        OutputFormat::Json => JsonFormatter::format_outcome(
            &outcome,
            config,
            &cli.reference.display().to_string(),
            &cli.data.display().to_string(),
        )?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &body)?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", body),
    }

    Ok(outcome)
}
