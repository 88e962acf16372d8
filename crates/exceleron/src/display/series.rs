//! Point capping for 2D charts and 3D scenes.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartDimension, ChartMode, ChartStyle};
use crate::extract::ChartDataset;

/// Most points a 2D chart draws before sampling.
pub const FLAT_POINT_LIMIT: usize = 50;

/// Slices kept by name when a pie chart is condensed.
pub const PIE_TOP_SLICES: usize = 10;

/// Most bars a 3D scene draws before sampling.
pub const SCENE_POINT_LIMIT: usize = 20;

const SCENE_MAX_HEIGHT: f64 = 6.0;
const SCENE_MIN_HEIGHT: f64 = 0.2;
const SCENE_LABEL_MAX_CHARS: usize = 8;
const SCENE_LABEL_KEEP_CHARS: usize = 6;

/// One point as a renderer draws it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub label: String,
    pub value: f64,
    /// Normalised bar height, 3D only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// A render-ready copy of a dataset, possibly sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySeries {
    pub mode: ChartMode,
    pub points: Vec<DisplayPoint>,
    /// Points in the dataset before sampling.
    pub source_points: usize,
    /// Whether any point was dropped or merged.
    pub sampled: bool,
    /// Stride used for every-nth sampling (1 when unsampled or condensed).
    pub sample_rate: usize,
}

impl DisplaySeries {
    /// Build the series a renderer in `mode` would draw.
    pub fn from_dataset(dataset: &ChartDataset, mode: ChartMode) -> Self {
        let points: Vec<DisplayPoint> = dataset
            .points()
            .map(|(label, value)| DisplayPoint {
                label: label.to_string(),
                value,
                height: None,
            })
            .collect();
        let source_points = points.len();

        let mut series = Self {
            mode,
            points,
            source_points,
            sampled: false,
            sample_rate: 1,
        };

        match (mode.dimension, mode.style) {
            (ChartDimension::TwoD, ChartStyle::Pie) => series.condense_pie(),
            (ChartDimension::TwoD, _) => series.every_nth(FLAT_POINT_LIMIT),
            (ChartDimension::ThreeD, _) => {
                series.every_nth(SCENE_POINT_LIMIT);
                series.layout_scene();
            }
        }

        if series.sampled {
            tracing::debug!(
                mode = %mode,
                from = source_points,
                to = series.points.len(),
                "sampled display series"
            );
        }

        series
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Keep indices divisible by `ceil(n / limit)`.
    fn every_nth(&mut self, limit: usize) {
        let n = self.points.len();
        if n <= limit {
            return;
        }

        let rate = n.div_ceil(limit);
        let points = std::mem::take(&mut self.points);
        self.points = points
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| idx % rate == 0)
            .map(|(_, p)| p)
            .collect();
        self.sampled = true;
        self.sample_rate = rate;
    }

    /// Top slices by value plus one "Others (k)" slice for the remainder.
    fn condense_pie(&mut self) {
        if self.points.len() <= FLAT_POINT_LIMIT {
            return;
        }

        // sort_by is stable, so equal values keep sheet order
        self.points
            .sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
        let rest = self.points.split_off(PIE_TOP_SLICES);
        let rest_sum: f64 = rest.iter().map(|p| p.value).sum();
        self.points.push(DisplayPoint {
            label: format!("Others ({})", rest.len()),
            value: rest_sum,
            height: None,
        });
        self.sampled = true;
    }

    /// Bar heights and shortened labels for the 3D scene.
    fn layout_scene(&mut self) {
        let max_value = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(1.0_f64, f64::max);

        for point in &mut self.points {
            point.height = Some((point.value / max_value * SCENE_MAX_HEIGHT).max(SCENE_MIN_HEIGHT));
            if point.label.chars().count() > SCENE_LABEL_MAX_CHARS {
                let short: String = point.label.chars().take(SCENE_LABEL_KEEP_CHARS).collect();
                point.label = format!("{}...", short);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{DataType, DatasetMetadata};

    fn dataset(n: usize) -> ChartDataset {
        ChartDataset {
            labels: (0..n).map(|i| format!("Row {}", i)).collect(),
            values: (0..n).map(|i| i as f64).collect(),
            metadata: DatasetMetadata {
                source_file_name: "big.csv".to_string(),
                x_axis_name: "Row".to_string(),
                y_axis_name: "Value".to_string(),
                total_row_count: n,
                valid_row_count: n,
                inferred_data_type: DataType::General,
            },
        }
    }

    #[test]
    fn test_small_series_untouched() {
        let ds = dataset(50);
        let series = DisplaySeries::from_dataset(&ds, ChartMode::default());
        assert_eq!(series.len(), 50);
        assert!(!series.sampled);
        assert_eq!(series.sample_rate, 1);
    }

    #[test]
    fn test_flat_sampling() {
        let ds = dataset(120);
        let series = DisplaySeries::from_dataset(&ds, ChartMode::new(ChartDimension::TwoD, ChartStyle::Line));
        // ceil(120 / 50) = 3
        assert_eq!(series.sample_rate, 3);
        assert_eq!(series.len(), 40);
        assert_eq!(series.points[1].label, "Row 3");
        assert!(series.sampled);
        // dataset itself is unchanged
        assert_eq!(ds.len(), 120);
    }

    #[test]
    fn test_pie_condensed() {
        let ds = dataset(60);
        let series = DisplaySeries::from_dataset(&ds, ChartMode::new(ChartDimension::TwoD, ChartStyle::Pie));

        assert_eq!(series.len(), 11);
        assert_eq!(series.points[0].value, 59.0);
        assert_eq!(series.points[9].value, 50.0);
        let others = &series.points[10];
        assert_eq!(others.label, "Others (50)");
        // 0 + 1 + ... + 49
        assert_eq!(others.value, 1225.0);
    }

    #[test]
    fn test_scene_sampling_and_heights() {
        let ds = dataset(45);
        let series = DisplaySeries::from_dataset(&ds, ChartMode::new(ChartDimension::ThreeD, ChartStyle::Bar));

        // ceil(45 / 20) = 3
        assert_eq!(series.len(), 15);
        assert_eq!(series.points[0].height, Some(0.2));
        let last = series.points.last().unwrap();
        assert_eq!(last.value, 42.0);
        assert_eq!(last.height, Some(6.0));
    }

    #[test]
    fn test_scene_label_truncation() {
        let mut ds = dataset(2);
        ds.labels = vec!["Short".to_string(), "Very long label".to_string()];
        ds.values = vec![0.5, 0.25];
        let series = DisplaySeries::from_dataset(&ds, ChartMode::new(ChartDimension::ThreeD, ChartStyle::Bar));

        assert_eq!(series.labels(), vec!["Short", "Very l..."]);
        // max value below 1 normalises against 1
        assert_eq!(series.points[0].height, Some(3.0));
    }
}
