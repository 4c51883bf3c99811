//! In-memory tabular structure and CSV persistence.
//!
//! A `Table` is the normalized form of one exported collection: one row per
//! source document, columns = union of all observed fields minus the store's
//! internal identifier. The only value normalization applied here is the
//! literal `"na"` sentinel, which becomes `Cell::Missing`.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::ingestion::{ID_FIELD, MISSING_SENTINEL};
use crate::errors::IngestionError;
use crate::types::{ColumnName, RawDocument};

/// One typed value within a table row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Categorical/text value.
    Text(String),
    /// Typed missing marker (absent field, JSON null, or the `"na"` sentinel).
    Missing,
}

impl Cell {
    fn from_value(value: Value) -> Cell {
        match value {
            Value::Null => Cell::Missing,
            Value::Bool(flag) => Cell::Bool(flag),
            Value::Number(number) => number
                .as_i64()
                .map(Cell::Int)
                .or_else(|| number.as_f64().map(Cell::Float))
                .unwrap_or(Cell::Missing),
            Value::String(text) => Cell::from_text(text),
            // Nested arrays/objects are kept as their compact JSON rendering.
            other => Cell::Text(other.to_string()),
        }
    }

    fn from_text(text: String) -> Cell {
        if text == MISSING_SENTINEL {
            Cell::Missing
        } else {
            Cell::Text(text)
        }
    }

    /// CSV field rendering. Missing values are empty fields.
    pub fn render(&self) -> String {
        match self {
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) => value.to_string(),
            Cell::Bool(flag) => flag.to_string(),
            Cell::Text(text) => text.clone(),
            Cell::Missing => String::new(),
        }
    }
}

/// Normalized tabular view over an exported collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Materialize documents into a table.
    ///
    /// Columns are the union of all observed fields in first-seen order; the
    /// store's internal identifier field never becomes a column. Fields a
    /// document lacks render as `Cell::Missing`.
    pub fn from_documents(documents: Vec<RawDocument>) -> Table {
        let mut columns: IndexSet<ColumnName> = IndexSet::new();
        for document in &documents {
            for field in document.keys() {
                if field != ID_FIELD {
                    columns.insert(field.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(documents.len());
        for document in documents {
            let mut row = vec![Cell::Missing; columns.len()];
            for (field, value) in document {
                if let Some(idx) = columns.get_index_of(&field) {
                    row[idx] = Cell::from_value(value);
                }
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), columns = columns.len(), "materialized table");
        Table {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Column names in table order.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Table rows in source order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table with the same column schema and the selected rows (cloned).
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&idx| self.rows[idx].clone()).collect(),
        }
    }

    /// Write the table as a header-including, comma-delimited file.
    ///
    /// Creates the destination directory if missing (idempotent) and
    /// overwrites any existing file at `path`. The in-memory table is left
    /// untouched so the pipeline can keep operating on it.
    pub fn write_csv(&self, path: &Path) -> Result<(), IngestionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| write_error(path, err))?;
        }
        let mut writer = csv::Writer::from_path(path).map_err(|err| write_error(path, err))?;
        writer
            .write_record(&self.columns)
            .map_err(|err| write_error(path, err))?;
        for row in &self.rows {
            writer
                .write_record(row.iter().map(Cell::render))
                .map_err(|err| write_error(path, err))?;
        }
        writer.flush().map_err(|err| write_error(path, err))?;
        debug!(path = %path.display(), rows = self.row_count(), "wrote table csv");
        Ok(())
    }
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> IngestionError {
    IngestionError::Write {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
