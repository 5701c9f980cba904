//! Report rendering for comparison runs

use crate::config::DiffConfig;
use crate::error::Result;
use crate::run::RunOutcome;
use crate::stats::{Classification, ComparisonResult};
use serde::Serialize;

const LABEL_WIDTH: usize = 32;
const VALUE_WIDTH: usize = 20;
const SUGGESTION_WIDTH: usize = 30;

/// Plain-text report, laid out as a fixed-width table
pub struct TextReport<'a> {
    outcome: &'a RunOutcome,
    config: &'a DiffConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(outcome: &'a RunOutcome, config: &'a DiffConfig) -> Self {
        Self { outcome, config }
    }

    /// Results that survive the hide flags, grouped if requested
    pub fn visible_results(&self) -> Vec<&'a ComparisonResult> {
        let mut rows: Vec<&ComparisonResult> = self
            .outcome
            .results
            .iter()
            .filter(|result| match result.classification {
                Classification::AllSame => !self.config.hides_same(),
                Classification::ContainsNaN => !self.config.hides_nan(),
                Classification::Normal => true,
            })
            .collect();

        if self.config.group_results_by_classification {
            rows.sort_by(|a, b| {
                a.classification
                    .cmp(&b.classification)
                    .then_with(|| a.column_label.cmp(&b.column_label))
            });
        }
        rows
    }

    /// The line-count warning, meant for stderr
    pub fn mismatch_warning(&self) -> Option<String> {
        if self.config.brief {
            return None;
        }
        self.outcome.row_count_mismatch.map(|mismatch| {
            format!(
                "\n== Line count mismatch; Ref({}) != Data({}). Smaller one will be used for comparison. ==",
                mismatch.reference_rows, mismatch.data_rows
            )
        })
    }

    /// Render the report body, meant for stdout
    pub fn render(&self) -> String {
        if self.config.brief {
            return self.render_brief();
        }

        let mut out = String::new();

        if !self.outcome.suggestions.is_empty() {
            out.push_str("\n== Non-matching reference columns /w suggested (--match) data columns ==\n");
            for suggestion in &self.outcome.suggestions {
                let data_name = suggestion.best_effort_data_name.as_deref().unwrap_or("");
                out.push_str(&format!(
                    "{:<w$} --> {:<w$}\n",
                    suggestion.unmatched_reference_name,
                    data_name,
                    w = SUGGESTION_WIDTH
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!("Epsilon = {}\n\n", format_g(self.config.epsilon)));
        out.push_str(&table_header());
        out.push('\n');
        for result in self.visible_results() {
            out.push_str(&table_row(result));
            out.push('\n');
        }
        out.push('\n');

        let nan_count = self.outcome.nan_count();
        if self.config.hides_nan() && nan_count > 0 {
            out.push_str(&format!("Number of NaN columns: {}\n", nan_count));
        }
        let same_count = self.outcome.same_count();
        if self.config.hides_same() && same_count > 0 {
            out.push_str(&format!("Number of same columns: {}\n", same_count));
        }

        out
    }

    fn render_brief(&self) -> String {
        let total = self.outcome.total_columns_considered();
        format!(
            "\nNaN : {}/{} Same : {}/{} @ eps = {}\n",
            self.outcome.nan_count(),
            total,
            self.outcome.same_count(),
            total,
            format_g(self.config.epsilon)
        )
    }
}

fn table_header() -> String {
    let mut line = format!("{:<w$} :", "Variable (ref)", w = LABEL_WIDTH);
    for title in ["Max", "Min", "Mean", "SD", "Mean (abs)", "SD (abs)"] {
        line.push_str(&format!(" {:>w$}", title, w = VALUE_WIDTH));
    }
    line
}

fn table_row(result: &ComparisonResult) -> String {
    let label = format!("{:<w$}", result.column_label, w = LABEL_WIDTH);
    match result.classification {
        Classification::AllSame => format!("{} : Values are same", label),
        Classification::ContainsNaN => format!("{} : NaN values in column!", label),
        Classification::Normal => {
            let mut line = format!("{} :", label);
            for value in [
                result.max_abs_diff,
                result.min_abs_diff,
                result.mean_diff,
                result.sd_diff,
                result.mean_abs_diff,
                result.sd_abs_diff,
            ] {
                line.push_str(&format!(" {:>w$}", format_g(value), w = VALUE_WIDTH));
            }
            line
        }
    }
}

/// Format a number like C's `%g`: six significant digits, scientific
/// notation for very small or large magnitudes, trailing zeros dropped.
pub fn format_g(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// JSON document written for `--format json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    reference: &'a str,
    data: &'a str,
    epsilon: f64,
    same_count: usize,
    nan_count: usize,
    total_columns_considered: usize,
    #[serde(flatten)]
    outcome: &'a RunOutcome,
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a run as pretty-printed JSON. Non-finite numbers become `null`.
    pub fn format_outcome(
        outcome: &RunOutcome,
        config: &DiffConfig,
        reference: &str,
        data: &str,
    ) -> Result<String> {
        let report = JsonReport {
            generated_at: chrono::Utc::now(),
            reference,
            data,
            epsilon: config.epsilon,
            same_count: outcome.same_count(),
            nan_count: outcome.nan_count(),
            total_columns_considered: outcome.total_columns_considered(),
            outcome,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
