//! Headline numbers shown under a chart.

use serde::{Deserialize, Serialize};

/// Maximum, minimum and rounded average of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub max: f64,
    pub min: f64,
    /// Rounded to the nearest integer, halves towards positive infinity.
    pub average: f64,
}

impl SummaryStats {
    /// Summarise `values`; an empty slice gives all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Self {
            max,
            min,
            average: (mean + 0.5).floor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let stats = SummaryStats::from_values(&[100.0, 150.0, 0.0, 200.0]);
        assert_eq!(stats.max, 200.0);
        assert_eq!(stats.min, 0.0);
        // 112.5 rounds up
        assert_eq!(stats.average, 113.0);
    }

    #[test]
    fn test_negative_half_rounds_up() {
        let stats = SummaryStats::from_values(&[-2.0, -3.0]);
        assert_eq!(stats.average, -2.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(SummaryStats::from_values(&[]), SummaryStats::default());
    }
}
