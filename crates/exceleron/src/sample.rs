//! Built-in demo dataset for trying the dashboard without a file.

use crate::extract::{ChartDataset, DataType, DatasetMetadata};

/// File name the demo dataset pretends to come from.
pub const SAMPLE_FILE_NAME: &str = "quarterly-sales-2024.xlsx";

/// Header row of the demo sheet.
pub const SAMPLE_HEADERS: [&str; 4] = ["Quarter", "Revenue (Million $)", "Growth %", "Target"];

/// Quarterly revenue for 2024, in millions.
pub fn sample_dataset() -> ChartDataset {
    ChartDataset {
        labels: ["Q1 2024", "Q2 2024", "Q3 2024", "Q4 2024"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        values: vec![2.4, 3.8, 4.2, 5.1],
        metadata: DatasetMetadata {
            source_file_name: SAMPLE_FILE_NAME.to_string(),
            x_axis_name: SAMPLE_HEADERS[0].to_string(),
            y_axis_name: SAMPLE_HEADERS[1].to_string(),
            total_row_count: 4,
            valid_row_count: 4,
            inferred_data_type: DataType::Financial,
        },
    }
}
