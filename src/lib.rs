//! # csvdiff
//!
//! Column-wise comparison of two numeric CSV files. Columns are aligned by
//! name (exactly, or by edit distance), and each aligned pair is summarised
//! by min/max/mean/SD statistics of the differences.

pub mod cli;
pub mod error;
pub mod config;
pub mod column;
pub mod dataset;
pub mod distance;
pub mod align;
pub mod stats;
pub mod run;
pub mod report;
pub mod commands;

pub use error::{CsvDiffError, Result};
pub use config::DiffConfig;
pub use dataset::Dataset;
pub use run::{ComparisonRun, RunOutcome};
pub use stats::{Classification, ColumnComparator, ComparisonResult};

/// Default noise floor for differences
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Characters removed from column names before fuzzy matching
pub const NAME_STRIP_CHARS: &str = "[]";
