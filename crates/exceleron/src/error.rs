//! Error types for the Exceleron library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Exceleron operations.
#[derive(Debug, Error)]
pub enum ExceleronError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The header row has fewer than two columns.
    #[error("At least two columns are required, found {found}")]
    InsufficientColumns { found: usize },

    /// The same column was chosen for both axes.
    #[error("X and Y axes must use different columns (both set to '{0}')")]
    SameColumn(String),

    /// A selected column does not exist in the header row.
    #[error("Selected column(s) not found: {}. Available: {}", missing.join(", "), available.join(", "))]
    ColumnNotFound {
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// Every row was filtered out during extraction.
    #[error("No valid data found: 0 of {total_rows} rows valid")]
    EmptyResult { total_rows: usize },

    /// A value cell could not be read as a number (strict mode only).
    #[error("Row {row}, column '{column}': cannot read '{value}' as a number")]
    NumericParse {
        row: usize,
        column: String,
        value: String,
    },

    /// A statistic has a zero baseline and cannot be computed.
    #[error("Degenerate result in {rule} rule: {reason}")]
    DegenerateResult { rule: String, reason: String },

    /// An operation needs a loaded dataset but none is active.
    #[error("No dataset is currently loaded")]
    NoActiveDataset,

    /// History entry lookup failed.
    #[error("History entry {0} not found")]
    HistoryNotFound(u64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Exceleron operations.
pub type Result<T> = std::result::Result<T, ExceleronError>;
