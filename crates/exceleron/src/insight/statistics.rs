//! Descriptive statistics over a value series.

use serde::{Deserialize, Serialize};

/// Summary statistics for one series, computed in two passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Position of the first occurrence of `min`.
    pub min_index: usize,
    /// Position of the first occurrence of `max`.
    pub max_index: usize,
    /// Population variance.
    pub variance: f64,
    pub std_dev: f64,
}

impl SeriesStatistics {
    /// Compute statistics, or `None` for an empty series or one whose sum,
    /// mean or variance overflows.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;

        let mut sum = 0.0;
        let mut min = first;
        let mut max = first;
        let mut min_index = 0;
        let mut max_index = 0;

        for (idx, &value) in values.iter().enumerate() {
            sum += value;
            if value < min {
                min = value;
                min_index = idx;
            }
            if value > max {
                max = value;
                max_index = idx;
            }
        }

        let count = values.len();
        let mean = sum / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        if !(sum.is_finite() && mean.is_finite() && variance.is_finite()) {
            return None;
        }

        Some(Self {
            count,
            sum,
            mean,
            min,
            max,
            min_index,
            max_index,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Standard deviation relative to the mean, in percent.
    pub fn coefficient_of_variation(&self) -> f64 {
        self.std_dev / self.mean * 100.0
    }
}

/// Percent change from `from` to `to`, or `None` when `from` is zero.
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}
