//! Chart-ready dataset produced by extraction.

use serde::{Deserialize, Serialize};

use super::DataType;

/// Information about where a dataset came from and how it was filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Name of the uploaded file.
    pub source_file_name: String,
    /// Column used for category labels.
    pub x_axis_name: String,
    /// Column used for values.
    pub y_axis_name: String,
    /// Data rows in the sheet before filtering.
    pub total_row_count: usize,
    /// Rows that made it into the dataset.
    pub valid_row_count: usize,
    /// Category inferred from the Y column name.
    pub inferred_data_type: DataType,
}

/// Parallel label and value sequences plus metadata.
///
/// `labels[i]` and `values[i]` always come from the same sheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub metadata: DatasetMetadata,
}

impl ChartDataset {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the dataset has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(label, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(|s| s.as_str())
            .zip(self.values.iter().copied())
    }
}
