//! Exceleron: spreadsheet-to-chart extraction with descriptive insights.
//!
//! Exceleron reads a spreadsheet, takes two user-chosen columns and turns them
//! into a chart-ready dataset of labels and values. A rule-based generator
//! then derives a short list of insight cards (trend, peak, consistency,
//! opportunity, domain and seasonality) from simple descriptive statistics.
//!
//! # Core Principles
//!
//! - **Deterministic**: the same dataset always yields the same insights
//! - **Non-destructive**: display sampling never alters the extracted dataset
//! - **Explicit failures**: missing columns, empty results and zero baselines
//!   are reported as errors rather than empty charts or infinite percentages
//!
//! # Example
//!
//! ```no_run
//! use exceleron::{ChartMode, ColumnSelection, Exceleron};
//!
//! let exceleron = Exceleron::new();
//! let selection = ColumnSelection::new("Quarter", "Revenue").unwrap();
//! let result = exceleron
//!     .analyze("sales.csv", &selection, ChartMode::default())
//!     .unwrap();
//!
//! println!("Points: {}", result.dataset.len());
//! for insight in &result.insights {
//!     println!("{}: {}", insight.title, insight.description);
//! }
//! ```

pub mod chart;
pub mod display;
pub mod error;
pub mod extract;
pub mod history;
pub mod input;
pub mod insight;
pub mod sample;
pub mod session;

mod exceleron;

pub use crate::exceleron::{AnalysisResult, AnalysisSummary, Exceleron, ExceleronConfig, ImpactCounts};
pub use chart::{ChartDimension, ChartMode, ChartStyle};
pub use display::{DisplaySeries, SummaryStats};
pub use error::{ExceleronError, Result};
pub use extract::{ChartDataset, ColumnSelection, DataType, DatasetMetadata};
pub use input::{Cell, RawTable, SourceMetadata};
pub use insight::{Impact, Insight, InsightEngine, InsightLabel, InsightRule, KeyRecommendations};
pub use session::Session;
