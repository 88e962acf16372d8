//! Raw spreadsheet grid and source metadata.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExceleronError, Result};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub read_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            read_at: Utc::now(),
        }
    }
}

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Build a cell from raw text, optionally recognising numbers.
    pub fn from_text(raw: &str, infer_numbers: bool) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        if infer_numbers {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return Cell::Number(n);
                }
            }
        }
        Cell::Text(raw.to_string())
    }

    /// A cell is present unless it is empty or blank text.
    pub fn is_present(&self) -> bool {
        match self {
            Cell::Number(_) => true,
            Cell::Text(s) => !s.trim().is_empty(),
            Cell::Empty => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

/// A parsed spreadsheet before interpretation: header names plus data rows.
///
/// Rows keep their original length; short rows are not padded so that
/// extraction can tell a missing cell from an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Data rows in original order (rows with no cells are dropped).
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Create a table from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        if headers.len() < 2 {
            return Err(ExceleronError::InsufficientColumns {
                found: headers.len(),
            });
        }

        let rows = rows.into_iter().filter(|r| !r.is_empty()).collect();
        Ok(Self { headers, rows })
    }

    /// Create a table from a full grid whose first row is the header row.
    pub fn from_grid(mut grid: Vec<Vec<Cell>>) -> Result<Self> {
        if grid.is_empty() {
            return Err(ExceleronError::EmptyData(
                "No data found in the file".to_string(),
            ));
        }
        if grid.len() < 2 {
            return Err(ExceleronError::EmptyData(
                "File must have at least a header row and one data row".to_string(),
            ));
        }

        let rows = grid.split_off(1);
        let headers = grid
            .pop()
            .unwrap_or_default()
            .iter()
            .map(|c| c.to_string())
            .collect();

        Self::new(headers, rows)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of non-empty data rows.
    pub fn total_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first header with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
