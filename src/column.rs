//! Named numeric columns

use serde::{Deserialize, Serialize};

/// A named column of numeric values read from one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    name: String,
    /// Header name the column was read with
    name_history: String,
    values: Vec<f64>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name_history: name.clone(),
            name,
            values: Vec::new(),
        }
    }

    pub fn with_values(name: impl Into<String>, values: Vec<f64>) -> Self {
        let mut column = Self::new(name);
        column.values = values;
        column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_history(&self) -> &str {
        &self.name_history
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Give the column a new working name. The header name stays in
    /// `name_history`.
    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
