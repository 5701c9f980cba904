//! Orchestration of a full two-file comparison

use crate::align::{self, MatchSuggestion};
use crate::config::DiffConfig;
use crate::dataset::{Dataset, ReadOptions};
use crate::error::Result;
use crate::stats::{Classification, ColumnComparator, ComparisonResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Row counts of the two inputs when they differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCountMismatch {
    pub reference_rows: usize,
    pub data_rows: usize,
}

/// Everything a report needs from one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    /// One result per compared column, in comparison order
    pub results: Vec<ComparisonResult>,
    pub suggestions: Vec<MatchSuggestion>,
    /// Aligned names that could not be found on one side
    pub missing_columns: Vec<String>,
    pub row_count_mismatch: Option<RowCountMismatch>,
}

impl RunOutcome {
    pub fn same_count(&self) -> usize {
        self.count(Classification::AllSame)
    }

    pub fn nan_count(&self) -> usize {
        self.count(Classification::ContainsNaN)
    }

    pub fn total_columns_considered(&self) -> usize {
        self.results.len()
    }

    fn count(&self, classification: Classification) -> usize {
        self.results
            .iter()
            .filter(|result| result.classification == classification)
            .count()
    }
}

/// Compares two datasets column by column
pub struct ComparisonRun {
    config: DiffConfig,
}

impl ComparisonRun {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Load both files, then compare them
    pub fn run_files(&self, reference: &Path, data: &Path) -> Result<RunOutcome> {
        let options = ReadOptions {
            strict_numbers: self.config.strict_numbers,
        };
        let reference = Dataset::from_path(reference, &options)?;
        let data = Dataset::from_path(data, &options)?;
        Ok(self.run(reference, data))
    }

    /// Align the columns and compare every aligned pair.
    ///
    /// Nothing in here is fatal: a column that cannot be found is logged,
    /// recorded in `missing_columns` and skipped.
    pub fn run(&self, reference: Dataset, data: Dataset) -> RunOutcome {
        let plan = if self.config.match_by_similarity {
            align::plan_fuzzy(&reference, &data)
        } else {
            align::plan_exact(&reference, &data)
        };
        let data = data.apply_renames(&plan.renames);

        let mut outcome = RunOutcome {
            suggestions: plan.suggestions,
            ..Default::default()
        };

        let reference_rows = reference.row_count();
        let data_rows = data.row_count();
        if reference_rows != data_rows {
            log::info!(
                "Row count mismatch: {} has {}, {} has {}",
                reference.source(),
                reference_rows,
                data.source(),
                data_rows
            );
            outcome.row_count_mismatch = Some(RowCountMismatch {
                reference_rows,
                data_rows,
            });
        }

        let comparator = ColumnComparator::new(self.config.epsilon);
        log::debug!(
            "Comparing {} columns of {} against {} at eps = {}",
            plan.compare_names.len(),
            reference.source(),
            data.source(),
            comparator.epsilon()
        );
        for name in &plan.compare_names {
            let reference_column = reference.column(name);
            let data_column = data.column(name);

            let label = match (data_column, self.config.prefer_data_side_names_in_output) {
                (Some(column), true) => column.name_history(),
                _ => name.as_str(),
            };

            match comparator.compare(
                label,
                reference_column.map(|c| c.values()),
                data_column.map(|c| c.values()),
            ) {
                Some(result) => outcome.results.push(result),
                None => {
                    log::warn!("Column: {} not found!", name);
                    outcome.missing_columns.push(name.clone());
                }
            }
        }

        log::debug!(
            "Compared {} columns ({} same, {} NaN, {} missing)",
            outcome.total_columns_considered(),
            outcome.same_count(),
            outcome.nan_count(),
            outcome.missing_columns.len()
        );
        outcome
    }
}
