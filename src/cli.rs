//! Command-line interface for csvdiff

use crate::config::DiffConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csvdiff")]
#[command(about = "Compare two numeric CSV files column by column")]
#[command(version)]
pub struct Cli {
    /// Reference (baseline) CSV file
    pub reference: PathBuf,

    /// Data (candidate) CSV file
    pub data: PathBuf,

    /// Differences smaller than this are treated as zero [default: 1e-8]
    #[arg(long, value_parser = parse_epsilon)]
    pub eps: Option<f64>,

    /// Pair columns by name similarity instead of exact names
    #[arg(short, long = "match")]
    pub match_columns: bool,

    /// Hide columns whose values are the same
    #[arg(long, alias = "hs")]
    pub hide_same: bool,

    /// Hide columns containing NaN values
    #[arg(long, alias = "hn")]
    pub hide_nan: bool,

    /// Label results with the data file's column names
    #[arg(long, alias = "udn")]
    pub use_data_names: bool,

    /// Group results by outcome (different, NaN, same)
    #[arg(short, long)]
    pub group: bool,

    /// Only print the NaN/same column counts
    #[arg(short, long)]
    pub brief: bool,

    /// Fail on non-numeric cells instead of reading them as NaN
    #[arg(long)]
    pub strict_numbers: bool,

    /// Output format: "pretty", "json"
    #[arg(long, default_value = "pretty")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the command-line flags over a base configuration.
    ///
    /// Flags can only switch options on; an explicit `--eps` replaces the
    /// base epsilon.
    pub fn apply_to(&self, mut config: DiffConfig) -> DiffConfig {
        if let Some(eps) = self.eps {
            config.epsilon = eps;
        }
        config.match_by_similarity |= self.match_columns;
        config.hide_same_columns |= self.hide_same;
        config.hide_nan_columns |= self.hide_nan;
        config.prefer_data_side_names_in_output |= self.use_data_names;
        config.group_results_by_classification |= self.group;
        config.brief |= self.brief;
        config.strict_numbers |= self.strict_numbers;
        config
    }
}

/// Parse output format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

/// Validate that epsilon is a finite, non-negative number
fn parse_epsilon(s: &str) -> Result<f64, String> {
    let eps: f64 = s
        .parse()
        .map_err(|_| format!("Invalid epsilon: '{}'. Must be a number.", s))?;

    if !eps.is_finite() || eps < 0.0 {
        return Err("Epsilon must be a finite, non-negative number".to_string());
    }

    Ok(eps)
}
