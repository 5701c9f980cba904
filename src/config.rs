//! Comparison settings

use crate::error::{CsvDiffError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one comparison run.
///
/// Can be read from a JSON file; missing keys take their defaults and
/// command-line flags are layered on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Differences smaller than this are treated as zero
    pub epsilon: f64,
    /// Pair columns by name similarity instead of exact names
    pub match_by_similarity: bool,
    pub hide_same_columns: bool,
    pub hide_nan_columns: bool,
    /// Label results with the data file's header names
    pub prefer_data_side_names_in_output: bool,
    /// Sort report rows by classification, then label
    pub group_results_by_classification: bool,
    /// Only print aggregate counts
    pub brief: bool,
    /// Fail on non-numeric cells instead of reading them as NaN
    pub strict_numbers: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            epsilon: crate::DEFAULT_EPSILON,
            match_by_similarity: false,
            hide_same_columns: false,
            hide_nan_columns: false,
            prefer_data_side_names_in_output: false,
            group_results_by_classification: false,
            brief: false,
            strict_numbers: false,
        }
    }
}

impl DiffConfig {
    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CsvDiffError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(CsvDiffError::config(format!(
                "epsilon must be a finite, non-negative number (got {})",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Brief mode hides same and NaN rows
    pub fn hides_same(&self) -> bool {
        self.hide_same_columns || self.brief
    }

    pub fn hides_nan(&self) -> bool {
        self.hide_nan_columns || self.brief
    }
}
