//! Per-column difference statistics

use serde::{Deserialize, Serialize};

/// Outcome of comparing one column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Normal,
    #[serde(rename = "contains_nan")]
    ContainsNaN,
    AllSame,
}

impl Classification {
    /// Classify from the four summary moments.
    ///
    /// `AllSame` is checked first, so a column of zero differences is never
    /// reported as NaN.
    pub fn from_moments(mean: f64, sd: f64, mean_abs: f64, sd_abs: f64) -> Self {
        let eps = f64::EPSILON;
        if mean.abs() <= eps && sd <= eps && mean_abs <= eps && sd_abs <= eps {
            Self::AllSame
        } else if mean.is_nan() {
            Self::ContainsNaN
        } else {
            Self::Normal
        }
    }
}

/// Statistics of `reference - data` for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub column_label: String,
    /// Number of rows compared (the shorter column's length)
    pub rows_compared: usize,
    pub min_abs_diff: f64,
    pub max_abs_diff: f64,
    pub mean_diff: f64,
    pub sd_diff: f64,
    pub var_diff: f64,
    pub mean_abs_diff: f64,
    pub sd_abs_diff: f64,
    pub var_abs_diff: f64,
    pub classification: Classification,
}

/// Running sums over the differences of one column pair
#[derive(Debug, Clone)]
struct DiffAccumulator {
    epsilon: f64,
    count: usize,
    min_abs: f64,
    max_abs: f64,
    sum: f64,
    sum_sq: f64,
    sum_abs: f64,
    sum_abs_sq: f64,
}

impl DiffAccumulator {
    fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            count: 0,
            min_abs: f64::INFINITY,
            max_abs: f64::NEG_INFINITY,
            sum: 0.0,
            sum_sq: 0.0,
            sum_abs: 0.0,
            sum_abs_sq: 0.0,
        }
    }

    fn add(&mut self, reference: f64, data: f64) {
        let mut diff = reference - data;
        let mut diff_abs = diff.abs();
        // below the noise floor the difference counts as exactly zero everywhere
        if diff_abs < self.epsilon {
            diff = 0.0;
            diff_abs = 0.0;
        }

        if diff_abs < self.min_abs {
            self.min_abs = diff_abs;
        }
        if diff_abs > self.max_abs {
            self.max_abs = diff_abs;
        }

        self.sum += diff;
        self.sum_abs += diff_abs;
        self.sum_sq += diff * diff;
        self.sum_abs_sq += diff_abs * diff_abs;
        self.count += 1;
    }

    /// Population moments. A negative variance from cancellation is kept, and
    /// its square root is NaN.
    fn finish(self, column_label: String) -> ComparisonResult {
        let n = self.count as f64;
        let mean = self.sum / n;
        let var = self.sum_sq / n - mean * mean;
        let mean_abs = self.sum_abs / n;
        let var_abs = self.sum_abs_sq / n - mean_abs * mean_abs;
        let sd = var.sqrt();
        let sd_abs = var_abs.sqrt();

        ComparisonResult {
            column_label,
            rows_compared: self.count,
            min_abs_diff: self.min_abs,
            max_abs_diff: self.max_abs,
            mean_diff: mean,
            sd_diff: sd,
            var_diff: var,
            mean_abs_diff: mean_abs,
            sd_abs_diff: sd_abs,
            var_abs_diff: var_abs,
            classification: Classification::from_moments(mean, sd, mean_abs, sd_abs),
        }
    }
}

/// Compares column pairs under a fixed noise floor
#[derive(Debug, Clone, Copy)]
pub struct ColumnComparator {
    epsilon: f64,
}

impl ColumnComparator {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Compare two columns over their common length.
    ///
    /// Returns `None` when either side is missing. Two empty columns still
    /// produce a result: min/max stay at +inf/-inf and the mean is NaN, so
    /// the column is classified `ContainsNaN`.
    pub fn compare(
        &self,
        column_label: impl Into<String>,
        reference: Option<&[f64]>,
        data: Option<&[f64]>,
    ) -> Option<ComparisonResult> {
        let (reference, data) = match (reference, data) {
            (Some(reference), Some(data)) => (reference, data),
            _ => {
                log::debug!("Reference or data column not set");
                return None;
            }
        };

        let mut acc = DiffAccumulator::new(self.epsilon);
        for (&r, &d) in reference.iter().zip(data) {
            acc.add(r, d);
        }
        Some(acc.finish(column_label.into()))
    }
}
