//! Turns a raw table and a column selection into a chart dataset.

use serde::{Deserialize, Serialize};

use super::numeric::{coerce_numeric, parse_numeric};
use super::{ChartDataset, ColumnSelection, DataType, DatasetMetadata};
use crate::error::{ExceleronError, Result};
use crate::input::RawTable;

/// Extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Fail on unreadable value cells instead of coercing them to zero.
    pub strict: bool,
}

/// Extracts chart datasets from raw tables.
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    /// Create an extractor with default (lenient) configuration.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Build a dataset from the selected columns.
    ///
    /// Rows that are too short to hold both selected cells, or where either
    /// cell is empty, are skipped. At least one row must survive.
    pub fn extract(
        &self,
        table: &RawTable,
        selection: &ColumnSelection,
        source_file_name: &str,
    ) -> Result<ChartDataset> {
        let (x_index, y_index) = selection.resolve(table)?;

        let mut labels = Vec::new();
        let mut values = Vec::new();

        for (row_idx, row) in table.rows.iter().enumerate() {
            let (Some(x_cell), Some(y_cell)) = (row.get(x_index), row.get(y_index)) else {
                tracing::debug!(row = row_idx + 1, "row too short, skipped");
                continue;
            };

            if !x_cell.is_present() || !y_cell.is_present() {
                tracing::debug!(row = row_idx + 1, "row has an empty selected cell, skipped");
                continue;
            }

            let value = if self.config.strict {
                parse_numeric(y_cell).map_err(|e| ExceleronError::NumericParse {
                    row: row_idx + 1,
                    column: selection.y.clone(),
                    value: e.raw,
                })?
            } else {
                coerce_numeric(y_cell)
            };

            labels.push(x_cell.to_string());
            values.push(value);
        }

        let total_row_count = table.total_row_count();
        if values.is_empty() {
            return Err(ExceleronError::EmptyResult {
                total_rows: total_row_count,
            });
        }

        let metadata = DatasetMetadata {
            source_file_name: source_file_name.to_string(),
            x_axis_name: selection.x.clone(),
            y_axis_name: selection.y.clone(),
            total_row_count,
            valid_row_count: values.len(),
            inferred_data_type: DataType::detect(&selection.y),
        };

        tracing::info!(
            file = source_file_name,
            x = %selection.x,
            y = %selection.y,
            valid = metadata.valid_row_count,
            total = total_row_count,
            data_type = %metadata.inferred_data_type,
            "extracted chart dataset"
        );

        Ok(ChartDataset {
            labels,
            values,
            metadata,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
