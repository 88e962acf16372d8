//! Input parsing and raw spreadsheet handling.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{Cell, RawTable, SourceMetadata};
