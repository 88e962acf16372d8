//! Tabular extraction: spreadsheet columns to chart-ready arrays.

mod data_type;
mod dataset;
mod extractor;
mod numeric;
mod selection;

pub use data_type::DataType;
pub use dataset::{ChartDataset, DatasetMetadata};
pub use extractor::{ExtractionConfig, Extractor};
pub use numeric::{coerce_numeric, parse_numeric, strip_non_numeric, NumericParseError};
pub use selection::ColumnSelection;
