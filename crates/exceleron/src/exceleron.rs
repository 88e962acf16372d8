//! Main Exceleron struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::ChartMode;
use crate::display::SummaryStats;
use crate::error::Result;
use crate::extract::{ChartDataset, ColumnSelection, DataType, ExtractionConfig, Extractor};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::insight::{Impact, Insight, InsightConfig, InsightEngine, KeyRecommendations};

/// Configuration for file analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceleronConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Extraction configuration.
    pub extraction: ExtractionConfig,
    /// Insight generation configuration.
    pub insight: InsightConfig,
}

/// Result of analyzing a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The extracted chart dataset.
    pub dataset: ChartDataset,
    /// Chart mode the insights were generated for.
    pub mode: ChartMode,
    /// Insights in rule order.
    pub insights: Vec<Insight>,
    /// Recommendations grouped by urgency.
    pub recommendations: KeyRecommendations,
    /// Summary statistics.
    pub summary: AnalysisSummary,
}

impl AnalysisResult {
    /// Render the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a result back from JSON written by [`AnalysisResult::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Summary of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Data rows in the file.
    pub total_rows: usize,
    /// Rows that made it into the dataset.
    pub valid_rows: usize,
    /// Rows dropped for missing cells.
    pub dropped_rows: usize,
    pub data_type: DataType,
    /// Max, min and average shown under the chart.
    pub stats: SummaryStats,
    /// Insights by impact.
    pub insights_by_impact: ImpactCounts,
}

/// Counts of insights by impact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpactCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ImpactCounts {
    fn from_insights(insights: &[Insight]) -> Self {
        let mut counts = Self::default();
        for insight in insights {
            match insight.impact {
                Impact::High => counts.high += 1,
                Impact::Medium => counts.medium += 1,
                Impact::Low => counts.low += 1,
            }
        }
        counts
    }
}

/// Reads spreadsheets, extracts chart data and generates insights.
pub struct Exceleron {
    parser: Parser,
    extractor: Extractor,
    engine: InsightEngine,
}

impl Exceleron {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExceleronConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: ExceleronConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            extractor: Extractor::with_config(config.extraction),
            engine: InsightEngine::with_config(config.insight),
        }
    }

    /// Column names of a file's header row.
    pub fn headers(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let (table, _) = self.parser.parse_file(path)?;
        Ok(table.headers)
    }

    /// Extract a chart dataset from two columns of a file.
    pub fn extract(
        &self,
        path: impl AsRef<Path>,
        selection: &ColumnSelection,
    ) -> Result<(ChartDataset, SourceMetadata)> {
        let (table, source) = self.parser.parse_file(path)?;
        let dataset = self.extractor.extract(&table, selection, &source.file)?;
        Ok((dataset, source))
    }

    /// Extract a dataset and generate insights for it.
    pub fn analyze(
        &self,
        path: impl AsRef<Path>,
        selection: &ColumnSelection,
        mode: ChartMode,
    ) -> Result<AnalysisResult> {
        let (dataset, source) = self.extract(path, selection)?;
        let insights = self.engine.generate(&dataset, Some(mode))?;
        let recommendations = KeyRecommendations::from_insights(&insights);

        let summary = AnalysisSummary {
            total_rows: dataset.metadata.total_row_count,
            valid_rows: dataset.metadata.valid_row_count,
            dropped_rows: dataset.metadata.total_row_count - dataset.metadata.valid_row_count,
            data_type: dataset.metadata.inferred_data_type,
            stats: SummaryStats::from_values(&dataset.values),
            insights_by_impact: ImpactCounts::from_insights(&insights),
        };

        Ok(AnalysisResult {
            source,
            dataset,
            mode,
            insights,
            recommendations,
            summary,
        })
    }
}

impl Default for Exceleron {
    fn default() -> Self {
        Self::new()
    }
}
