//! Error types for csvdiff operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CsvDiffError>;

#[derive(Error, Debug)]
pub enum CsvDiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No header row found in {source_name}")]
    EmptyInput { source_name: String },

    #[error("{source_name}:{line}: expected at most {expected} values, found {found}")]
    RaggedRow {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{source_name}:{line}: column '{column}' has non-numeric value '{value}'")]
    NumericParse {
        source_name: String,
        line: u64,
        column: String,
        value: String,
    },
}

impl CsvDiffError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn empty_input(source_name: impl Into<String>) -> Self {
        Self::EmptyInput {
            source_name: source_name.into(),
        }
    }
}
