//! CSV loading into named numeric columns

use crate::align::ColumnRename;
use crate::column::NumericColumn;
use crate::distance::strip_chars;
use crate::error::{CsvDiffError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Characters removed from every field before it is interpreted
const FIELD_STRIP_CHARS: &str = " \t\r";

/// Options controlling how cells are read
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Fail on a non-numeric cell instead of storing NaN
    pub strict_numbers: bool,
}

/// One input file, parsed into columns in header order
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    columns: Vec<NumericColumn>,
}

impl Dataset {
    /// Build a dataset from already parsed columns
    pub fn new(source: impl Into<String>, columns: Vec<NumericColumn>) -> Self {
        Self {
            source: source.into(),
            columns,
        }
    }

    /// Load a CSV file
    pub fn from_path(path: &Path, options: &ReadOptions) -> Result<Self> {
        if !path.is_file() {
            return Err(CsvDiffError::invalid_input(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let dataset = Self::from_reader(path.display().to_string(), BufReader::new(file), options)?;
        log::debug!(
            "Loaded {}: {} columns, {} rows",
            dataset.source,
            dataset.columns.len(),
            dataset.row_count()
        );
        Ok(dataset)
    }

    /// Parse CSV content from any reader.
    ///
    /// The first non-blank record is the header. Spaces, tabs and carriage
    /// returns are removed from every field, and empty fields are skipped, so
    /// values fill the columns left to right.
    pub fn from_reader<R: Read>(
        source: impl Into<String>,
        reader: R,
        options: &ReadOptions,
    ) -> Result<Self> {
        let source = source.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut columns: Vec<NumericColumn> = Vec::new();
        let mut header_seen = false;
        let mut nan_cells = 0usize;

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let fields: Vec<String> = record
                .iter()
                .map(|field| strip_chars(field, FIELD_STRIP_CHARS))
                .filter(|field| !field.is_empty())
                .collect();

            if fields.is_empty() {
                continue;
            }

            if !header_seen {
                header_seen = true;
                columns = fields.into_iter().map(NumericColumn::new).collect();
                continue;
            }

            if fields.len() > columns.len() {
                return Err(CsvDiffError::RaggedRow {
                    source_name: source,
                    line,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }

            for (column, field) in columns.iter_mut().zip(fields) {
                let value = match field.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) if options.strict_numbers => {
                        return Err(CsvDiffError::NumericParse {
                            source_name: source,
                            line,
                            column: column.name().to_string(),
                            value: field,
                        });
                    }
                    Err(_) => {
                        log::debug!(
                            "{}:{}: '{}' in column '{}' is not a number",
                            source,
                            line,
                            field,
                            column.name()
                        );
                        nan_cells += 1;
                        f64::NAN
                    }
                };
                column.push(value);
            }
        }

        if !header_seen {
            return Err(CsvDiffError::empty_input(source));
        }

        if nan_cells > 0 {
            log::warn!("{}: {} non-numeric values read as NaN", source, nan_cells);
        }

        Ok(Self { source, columns })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// First column with the given working name
    pub fn column(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Working names in header order
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    }

    /// Number of data rows, taken from the first column
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, NumericColumn::len)
    }

    /// Apply a rename plan and hand back the frozen dataset
    pub fn apply_renames(mut self, renames: &[ColumnRename]) -> Self {
        for rename in renames {
            if let Some(column) = self.columns.get_mut(rename.column_index) {
                log::debug!(
                    "Renaming data column '{}' to '{}'",
                    column.name(),
                    rename.new_name
                );
                column.rename(rename.new_name.clone());
            }
        }
        self
    }
}
