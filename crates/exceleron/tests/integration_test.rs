//! Integration tests for Exceleron.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use exceleron::extract::ExtractionConfig;
use exceleron::insight::{DegeneratePolicy, InsightConfig};
use exceleron::{
    AnalysisResult, ChartDimension, ChartMode, ChartStyle, ColumnSelection, DataType, DisplaySeries, Exceleron,
    ExceleronConfig, ExceleronError, Impact, InsightLabel, InsightRule,
};

/// Helper to write a file with a known name into a temp directory.
fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn quarterly(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = create_test_file(&dir, "sales.csv", content);
    (dir, path)
}

fn select(x: &str, y: &str) -> ColumnSelection {
    ColumnSelection::new(x, y).expect("Invalid selection")
}

// =============================================================================
// Extraction Tests
// =============================================================================

#[test]
fn test_extract_quarterly_revenue() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\nQ2,150\nQ3,0\nQ4,200\n");

    let (dataset, source) = Exceleron::new()
        .extract(&path, &select("Quarter", "Revenue"))
        .expect("Extraction failed");

    assert_eq!(dataset.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    assert_eq!(dataset.values, vec![100.0, 150.0, 0.0, 200.0]);
    assert_eq!(dataset.metadata.inferred_data_type, DataType::Financial);
    assert_eq!(dataset.metadata.source_file_name, "sales.csv");
    assert_eq!(dataset.metadata.valid_row_count, 4);
    assert_eq!(source.format, "csv");
    assert!(source.hash.starts_with("sha256:"));
}

#[test]
fn test_extract_drops_empty_value_row() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\nQ2,150\nQ3,\nQ4,200\n");

    let (dataset, _) = Exceleron::new()
        .extract(&path, &select("Quarter", "Revenue"))
        .expect("Extraction failed");

    assert_eq!(dataset.labels, vec!["Q1", "Q2", "Q4"]);
    assert_eq!(dataset.values, vec![100.0, 150.0, 200.0]);
    assert_eq!(dataset.metadata.valid_row_count, 3);
    assert_eq!(dataset.metadata.total_row_count, 4);
}

#[test]
fn test_extract_tsv_with_formatted_values() {
    let dir = TempDir::new().unwrap();
    let path = create_test_file(
        &dir,
        "users.tsv",
        "Month\tActive Users\tNotes\nJan\t\"1,200\"\tlaunch\nFeb\t1,350 users\t\nMar\tn/a\tdown\n",
    );

    let (dataset, source) = Exceleron::new()
        .extract(&path, &select("Month", "Active Users"))
        .expect("Extraction failed");

    assert_eq!(source.format, "tsv");
    assert_eq!(dataset.metadata.inferred_data_type, DataType::UserAnalytics);
    // "n/a" has no digits left and coerces to zero
    assert_eq!(dataset.values, vec![1200.0, 1350.0, 0.0]);
}

#[test]
fn test_strict_extraction_rejects_unreadable_value() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\nQ2,pending\n");

    let exceleron = Exceleron::with_config(ExceleronConfig {
        extraction: ExtractionConfig { strict: true },
        ..Default::default()
    });
    let err = exceleron
        .extract(&path, &select("Quarter", "Revenue"))
        .unwrap_err();

    match err {
        ExceleronError::NumericParse { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Revenue");
            assert_eq!(value, "pending");
        }
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_missing_column_lists_available() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\n");

    let err = Exceleron::new()
        .extract(&path, &select("Quarter", "Profit"))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Profit"));
    assert!(message.contains("Quarter, Revenue"));
}

#[test]
fn test_all_rows_filtered_is_an_error() {
    let (_dir, path) = quarterly("Quarter,Revenue,Region\nQ1,,North\nQ2,,South\n");

    let err = Exceleron::new()
        .extract(&path, &select("Quarter", "Revenue"))
        .unwrap_err();

    assert!(matches!(err, ExceleronError::EmptyResult { total_rows: 2 }));
    assert!(err.to_string().contains("0 of 2 rows valid"));
}

#[test]
fn test_single_column_file_rejected() {
    let (_dir, path) = quarterly("Revenue\n100\n200\n");

    let err = Exceleron::new().headers(&path).unwrap_err();
    assert!(matches!(err, ExceleronError::InsufficientColumns { found: 1 }));
}

#[test]
fn test_headers() {
    let (_dir, path) = quarterly("Quarter; Revenue ;Units\nQ1;100;5\n");

    let headers = Exceleron::new().headers(&path).expect("Failed to read headers");
    assert_eq!(headers, vec!["Quarter", "Revenue", "Units"]);
}

#[test]
fn test_missing_file() {
    let err = Exceleron::new().headers("/nonexistent/sales.csv").unwrap_err();
    assert!(matches!(err, ExceleronError::Io { .. }));
}

// =============================================================================
// Analysis Tests
// =============================================================================

#[test]
fn test_analyze_quarterly_revenue() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\nQ2,150\nQ3,0\nQ4,200\n");

    let result = Exceleron::new()
        .analyze(&path, &select("Quarter", "Revenue"), ChartMode::default())
        .expect("Analysis failed");

    let trend = &result.insights[0];
    assert_eq!(trend.rule, InsightRule::Trend);
    assert_eq!(trend.label, InsightLabel::Growth);
    assert_eq!(trend.impact, Impact::High);
    assert_eq!(trend.details.comparison, "Recent: n/a");

    // the Q3 trough is zero, so there is no peak-to-trough ratio
    assert!(!result.insights.iter().any(|i| i.rule == InsightRule::Seasonality));
    assert!(result.insights.iter().any(|i| i.label == InsightLabel::Financial));

    assert_eq!(result.summary.valid_rows, 4);
    assert_eq!(result.summary.dropped_rows, 0);
    assert_eq!(result.summary.stats.average, 113.0);
    assert!(!result.recommendations.immediate_actions.is_empty());
}

#[test]
fn test_analyze_zero_first_value() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,0\nQ2,150\nQ3,90\nQ4,200\n");
    let selection = select("Quarter", "Revenue");

    let lenient = Exceleron::new()
        .analyze(&path, &selection, ChartMode::default())
        .expect("Analysis failed");
    assert!(!lenient.insights.iter().any(|i| i.rule == InsightRule::Trend));
    assert!(!lenient.insights.iter().any(|i| i.rule == InsightRule::DomainSpecific));
    assert_eq!(lenient.insights[0].rule, InsightRule::Peak);

    let strict = Exceleron::with_config(ExceleronConfig {
        insight: InsightConfig {
            degenerate: DegeneratePolicy::Fail,
        },
        ..Default::default()
    });
    let err = strict
        .analyze(&path, &selection, ChartMode::default())
        .unwrap_err();
    assert!(matches!(err, ExceleronError::DegenerateResult { .. }));
}

#[test]
fn test_analyze_is_deterministic() {
    let (_dir, path) = quarterly("Product,Units Sold\nAlpha,50\nBeta,30\nGamma,20\nDelta,5\n");
    let selection = select("Product", "Units Sold");
    let mode = ChartMode::new(ChartDimension::ThreeD, ChartStyle::Bar);

    let exceleron = Exceleron::new();
    let first = exceleron.analyze(&path, &selection, mode).unwrap();
    let second = exceleron.analyze(&path, &selection, mode).unwrap();

    assert_eq!(
        serde_json::to_string(&first.insights).unwrap(),
        serde_json::to_string(&second.insights).unwrap()
    );
    assert!(first.insights.iter().any(|i| i.label == InsightLabel::Product));
}

#[test]
fn test_analysis_json_export() {
    let (_dir, path) = quarterly("Quarter,Revenue\nQ1,100\nQ2,150\nQ3,120\nQ4,200\n");
    let result = Exceleron::new()
        .analyze(&path, &select("Quarter", "Revenue"), ChartMode::default())
        .expect("Analysis failed");

    let json = result.to_json().unwrap();
    let restored = AnalysisResult::from_json(&json).unwrap();
    assert_eq!(restored.dataset, result.dataset);
    assert_eq!(restored.insights.len(), result.insights.len());
    assert_eq!(restored.summary.stats.max, 200.0);

    assert!(matches!(
        AnalysisResult::from_json("{\"dataset\": 1}"),
        Err(ExceleronError::Json(_))
    ));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_sampling_leaves_dataset_intact() {
    let mut content = String::from("Day,Visitors\n");
    for day in 1..=200 {
        content.push_str(&format!("D{},{}\n", day, day * 10));
    }
    let (_dir, path) = quarterly(&content);

    let (dataset, _) = Exceleron::new()
        .extract(&path, &select("Day", "Visitors"))
        .unwrap();
    let series = DisplaySeries::from_dataset(&dataset, ChartMode::default());

    assert_eq!(dataset.len(), 200);
    assert_eq!(series.len(), 50);
    assert!(series.sampled);
    assert_eq!(series.sample_rate, 4);
}
