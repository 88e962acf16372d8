//! Descriptive insight generation.
//!
//! This module computes summary statistics over a [`ChartDataset`](crate::ChartDataset)
//! and turns them into a short, ordered list of insight cards plus grouped
//! recommendations.

pub mod format;

mod engine;
mod insight;
mod recommendations;
mod statistics;

pub use engine::{DegeneratePolicy, InsightConfig, InsightEngine};
pub use insight::{confidence, Impact, Insight, InsightDetails, InsightLabel, InsightRule};
pub use recommendations::{KeyRecommendations, Recommendation};
pub use statistics::{percent_change, SeriesStatistics};
