//! Rule-based insight generation from a chart dataset.
//!
//! Six rules run in a fixed order and each appends at most one insight:
//! trend, peak, consistency, opportunity, a domain-specific rule chosen by
//! the dataset's data type, and seasonality. Output order is rule order.
//!
//! Several statistics divide by a baseline (first value, mean, total). When
//! that baseline is zero, or a statistic overflows to a non-finite value, the
//! result is reported according to [`DegeneratePolicy`].

use serde::{Deserialize, Serialize};

use super::format::{fixed, grouped, signed_fixed};
use super::insight::{confidence, Impact, Insight, InsightDetails, InsightLabel, InsightRule};
use super::statistics::{percent_change, SeriesStatistics};
use crate::chart::ChartMode;
use crate::error::{ExceleronError, Result};
use crate::extract::{ChartDataset, DataType};

/// Values below this fraction of the mean count as underperforming.
const UNDERPERFORMANCE_RATIO: f64 = 0.8;

/// Peak-to-trough ratio above which a series is called seasonal.
const SEASONAL_RATIO: f64 = 1.5;

/// Minimum points before seasonality is considered.
const SEASONAL_MIN_POINTS: usize = 4;

/// What to do when a rule's baseline is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Leave the insight out and log a warning.
    #[default]
    Skip,
    /// Abort generation with [`ExceleronError::DegenerateResult`].
    Fail,
}

/// Insight generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightConfig {
    pub degenerate: DegeneratePolicy,
}

/// Generates insights from datasets.
pub struct InsightEngine {
    config: InsightConfig,
}

/// Everything a rule needs to look at.
struct RuleInput<'a> {
    dataset: &'a ChartDataset,
    stats: &'a SeriesStatistics,
    mode: ChartMode,
}

impl RuleInput<'_> {
    fn label(&self, index: usize) -> &str {
        self.dataset.labels.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    fn first_label(&self) -> &str {
        self.label(0)
    }

    fn last_label(&self) -> &str {
        self.label(self.dataset.labels.len().saturating_sub(1))
    }

    fn peak_label(&self) -> &str {
        self.label(self.stats.max_index)
    }

    fn trough_label(&self) -> &str {
        self.label(self.stats.min_index)
    }

    fn first(&self) -> f64 {
        self.dataset.values[0]
    }

    fn last(&self) -> f64 {
        self.dataset.values[self.dataset.values.len() - 1]
    }
}

impl InsightEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self {
            config: InsightConfig::default(),
        }
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Generate the insight list for a dataset.
    ///
    /// The chart mode only changes descriptive text. An empty dataset yields
    /// an empty list, as does one whose statistics overflow under
    /// [`DegeneratePolicy::Skip`].
    pub fn generate(&self, dataset: &ChartDataset, mode: Option<ChartMode>) -> Result<Vec<Insight>> {
        if dataset.values.is_empty() {
            return Ok(Vec::new());
        }
        let Some(stats) = SeriesStatistics::compute(&dataset.values) else {
            self.apply_policy("statistics", "series statistics are not finite")?;
            return Ok(Vec::new());
        };

        let input = RuleInput {
            dataset,
            stats: &stats,
            mode: mode.unwrap_or_default(),
        };

        let rules: [fn(&Self, &RuleInput<'_>) -> Result<Option<Insight>>; 6] = [
            Self::trend,
            Self::peak,
            Self::consistency,
            Self::opportunity,
            Self::domain_specific,
            Self::seasonality,
        ];

        let mut insights = Vec::new();
        for rule in rules {
            if let Some(insight) = rule(self, &input)? {
                insights.push(insight);
            }
        }

        tracing::info!(
            points = stats.count,
            insights = insights.len(),
            data_type = %dataset.metadata.inferred_data_type,
            "generated insights"
        );

        Ok(insights)
    }

    /// Apply the degenerate policy for a rule that cannot be computed.
    fn degenerate(&self, rule: InsightRule, reason: &str) -> Result<Option<Insight>> {
        self.apply_policy(rule.label(), reason)?;
        Ok(None)
    }

    fn apply_policy(&self, rule: &str, reason: &str) -> Result<()> {
        match self.config.degenerate {
            DegeneratePolicy::Skip => {
                tracing::warn!(rule, reason, "insight skipped");
                Ok(())
            }
            DegeneratePolicy::Fail => Err(ExceleronError::DegenerateResult {
                rule: rule.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    fn trend(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let values = &input.dataset.values;
        if values.len() < 2 {
            return Ok(None);
        }

        let Some(growth) = percent_change(input.first(), input.last()) else {
            return self.degenerate(InsightRule::Trend, "first value is zero");
        };
        if !growth.is_finite() {
            return self.degenerate(InsightRule::Trend, "growth rate is not finite");
        }

        // With exactly two points the overall change is the only change.
        let recent = if values.len() > 2 {
            percent_change(values[values.len() - 2], input.last()).filter(|r| r.is_finite())
        } else {
            Some(0.0)
        };

        let growing = growth > 0.0;
        let (label, title) = if growing {
            (InsightLabel::Growth, "Positive Growth Trajectory")
        } else {
            (InsightLabel::Decline, "Declining Performance")
        };

        let recent_text = match recent {
            Some(r) => format!(
                "Recent period shows {}% {}.",
                fixed(r.abs(), 1),
                if r > 0.0 { "growth" } else { "decline" }
            ),
            None => "Recent period change is not available (previous value is zero).".to_string(),
        };

        let description = format!(
            "{}% {} from {} to {}. {}",
            fixed(growth.abs(), 1),
            if growing { "increase" } else { "decrease" },
            input.first_label(),
            input.last_label(),
            recent_text
        );

        let recommendation = if growing {
            match recent {
                Some(r) if r > 0.0 => "Excellent momentum! Consider scaling successful strategies. Recent acceleration suggests continued optimization opportunities.".to_string(),
                Some(_) => "Excellent momentum! Consider scaling successful strategies. Recent deceleration suggests need for strategy review.".to_string(),
                None => "Excellent momentum! Consider scaling successful strategies.".to_string(),
            }
        } else {
            format!(
                "Immediate attention required. Analyze root causes and implement corrective measures. Focus on {} period strategies.",
                input.peak_label()
            )
        };

        let comparison = match recent {
            Some(r) => format!("Recent: {}%", signed_fixed(r, 1)),
            None => "Recent: n/a".to_string(),
        };

        let actions: &[&str] = if growing {
            &["Scale successful initiatives", "Monitor for sustainability", "Identify growth drivers"]
        } else {
            &["Root cause analysis", "Immediate intervention", "Recovery planning"]
        };

        let details = InsightDetails::new(
            "Overall Growth Rate",
            format!("{}%", signed_fixed(growth, 1)),
            format!("{} to {}", input.first_label(), input.last_label()),
            comparison,
        )
        .with_chart_hint(format!("{} chart", input.mode))
        .with_action_items(actions);

        Ok(Some(
            Insight::new(InsightRule::Trend, label, title)
                .with_statistic(growth)
                .with_confidence(confidence::TREND)
                .with_impact(Impact::from_thresholds(growth.abs(), 20.0, 10.0))
                .with_description(description)
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn peak(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let stats = input.stats;
        if stats.mean == 0.0 {
            return self.degenerate(InsightRule::Peak, "mean is zero");
        }

        let peak_performance = (stats.max - stats.mean) / stats.mean * 100.0;
        let share_of_total = stats.max / stats.sum * 100.0;
        if !(peak_performance.is_finite() && share_of_total.is_finite()) {
            return self.degenerate(InsightRule::Peak, "peak ratio is not finite");
        }
        let peak_label = input.peak_label();

        let description = format!(
            "Highest performance of {} at {}, which is {}% above average. This represents {}% of total value.",
            grouped(stats.max),
            peak_label,
            fixed(peak_performance, 1),
            fixed(share_of_total, 1)
        );

        let recommendation = format!(
            "Analyze success factors from {} period. {}",
            peak_label,
            if peak_performance > 50.0 {
                "Exceptional performance - replicate strategies across other periods."
            } else {
                "Good performance - identify scalable elements."
            }
        );

        let details = InsightDetails::new(
            "Peak Value",
            grouped(stats.max),
            peak_label,
            format!("{}% above average", fixed(peak_performance, 1)),
        )
        .with_chart_hint(format!("Best visualized in {} format", input.mode))
        .with_action_items(&["Document success factors", "Replicate strategies", "Set new benchmarks"]);

        Ok(Some(
            Insight::new(InsightRule::Peak, InsightLabel::Peak, "Peak Performance Insights")
                .with_statistic(peak_performance)
                .with_confidence(confidence::PEAK)
                .with_impact(Impact::from_thresholds(peak_performance, 50.0, 25.0))
                .with_description(description)
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn consistency(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let stats = input.stats;
        if stats.mean == 0.0 {
            return self.degenerate(InsightRule::Consistency, "mean is zero");
        }

        let cov = stats.coefficient_of_variation();
        if !cov.is_finite() {
            return self.degenerate(InsightRule::Consistency, "coefficient of variation is not finite");
        }
        let volatile = cov > 30.0;

        let (label, title, verdict, recommendation, actions): (_, _, _, _, &[&str]) = if volatile {
            (
                InsightLabel::Volatility,
                "High Volatility Detected",
                "High volatility indicates unpredictable performance.",
                "Implement stabilization measures. Focus on process standardization and risk management.",
                &["Risk assessment", "Process standardization", "Contingency planning"],
            )
        } else {
            (
                InsightLabel::Stability,
                "Stable Performance Pattern",
                "Low volatility suggests consistent, predictable performance.",
                "Maintain current operational excellence. Consider gradual optimization for growth.",
                &["Maintain standards", "Gradual optimization", "Best practice documentation"],
            )
        };

        let details = InsightDetails::new(
            "Volatility Index",
            format!("{}%", fixed(cov, 1)),
            "Full dataset",
            format!("Standard deviation: {}", fixed(stats.std_dev, 2)),
        )
        .with_action_items(actions);

        Ok(Some(
            Insight::new(InsightRule::Consistency, label, title)
                .with_statistic(cov)
                .with_confidence(confidence::CONSISTENCY)
                .with_impact(if volatile { Impact::Medium } else { Impact::Low })
                .with_description(format!("Coefficient of variation: {}%. {}", fixed(cov, 1), verdict))
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn opportunity(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let stats = input.stats;
        let threshold = stats.mean * UNDERPERFORMANCE_RATIO;
        let underperforming = input.dataset.values.iter().filter(|&&v| v < threshold).count();

        if underperforming == 0 {
            return Ok(None);
        }

        let opportunity_value = (stats.mean - stats.min) * underperforming as f64;
        if !opportunity_value.is_finite() {
            return self.degenerate(InsightRule::Opportunity, "opportunity value is not finite");
        }
        let share = underperforming as f64 / stats.count as f64 * 100.0;

        let description = format!(
            "{} period{} performing below 80% of average. Potential value uplift: {} units.",
            underperforming,
            if underperforming > 1 { "s" } else { "" },
            fixed(opportunity_value, 1)
        );

        let impact = if underperforming as f64 > stats.count as f64 / 3.0 {
            Impact::High
        } else {
            Impact::Medium
        };

        let details = InsightDetails::new(
            "Opportunity Value",
            fixed(opportunity_value, 1),
            format!("{} periods", underperforming),
            format!("{}% of total periods", fixed(share, 1)),
        )
        .with_action_items(&["Performance gap analysis", "Best practice transfer", "Targeted interventions"]);

        Ok(Some(
            Insight::new(InsightRule::Opportunity, InsightLabel::Opportunity, "Growth Opportunity Identified")
                .with_statistic(opportunity_value)
                .with_confidence(confidence::OPPORTUNITY)
                .with_impact(impact)
                .with_description(description)
                .with_recommendation(format!(
                    "Focus improvement efforts on underperforming periods. Benchmark against {} strategies.",
                    input.peak_label()
                ))
                .with_details(details),
        ))
    }

    fn domain_specific(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        match input.dataset.metadata.inferred_data_type {
            DataType::Financial => self.financial(input),
            DataType::UserAnalytics => self.user_analytics(input),
            DataType::ProductPerformance => self.product(input),
            DataType::RegionalAnalysis | DataType::General => Ok(None),
        }
    }

    fn financial(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let n = input.stats.count;
        let cagr = if n > 1 {
            if input.first() == 0.0 {
                return self.degenerate(InsightRule::DomainSpecific, "first value is zero");
            }
            let ratio = input.last() / input.first();
            if ratio < 0.0 {
                return self.degenerate(InsightRule::DomainSpecific, "first and last values differ in sign");
            }
            (ratio.powf(1.0 / (n - 1) as f64) - 1.0) * 100.0
        } else {
            0.0
        };
        if !cagr.is_finite() {
            return self.degenerate(InsightRule::DomainSpecific, "growth rate is not finite");
        }

        let total = input.stats.sum;
        let strength = if cagr > 15.0 {
            "Exceptional"
        } else if cagr > 8.0 {
            "Strong"
        } else {
            "Moderate"
        };

        let recommendation = if cagr > 15.0 {
            "Maintain growth momentum. Consider market expansion opportunities."
        } else {
            "Explore growth acceleration strategies. Analyze market positioning."
        };

        let details = InsightDetails::new(
            "Compound Annual Growth Rate",
            format!("{}%", fixed(cagr, 1)),
            "Full period",
            format!("Total revenue: ${}M", fixed(total, 1)),
        )
        .with_action_items(&["Revenue optimization", "Market analysis", "Growth strategy review"]);

        Ok(Some(
            Insight::new(InsightRule::DomainSpecific, InsightLabel::Financial, "Financial Performance Analysis")
                .with_statistic(cagr)
                .with_confidence(confidence::FINANCIAL)
                .with_impact(Impact::High)
                .with_description(format!(
                    "Total revenue: ${}M with {}% CAGR. {} growth trajectory.",
                    fixed(total, 1),
                    fixed(cagr, 1),
                    strength
                ))
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn user_analytics(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let growth = if input.stats.count > 1 {
            match percent_change(input.first(), input.last()) {
                Some(g) => g,
                None => return self.degenerate(InsightRule::DomainSpecific, "first value is zero"),
            }
        } else {
            0.0
        };
        if !growth.is_finite() {
            return self.degenerate(InsightRule::DomainSpecific, "growth rate is not finite");
        }
        let average = input.stats.mean;

        let quality = if growth > 20.0 {
            "Excellent"
        } else if growth > 10.0 {
            "Good"
        } else {
            "Steady"
        };

        let recommendation = if growth > 20.0 {
            "Scale user acquisition channels. Focus on retention strategies."
        } else {
            "Optimize conversion funnel. Enhance user experience."
        };

        let details = InsightDetails::new(
            "User Growth Rate",
            format!("{}%", fixed(growth, 1)),
            "Full period",
            format!("Avg MAU: {}K", fixed(average, 0)),
        )
        .with_action_items(&["Acquisition optimization", "Retention analysis", "Engagement improvement"]);

        Ok(Some(
            Insight::new(InsightRule::DomainSpecific, InsightLabel::UserGrowth, "User Engagement Analysis")
                .with_statistic(growth)
                .with_confidence(confidence::USER_ANALYTICS)
                .with_impact(if growth > 20.0 { Impact::High } else { Impact::Medium })
                .with_description(format!(
                    "{}% user growth with average {}K monthly active users. {} user acquisition.",
                    fixed(growth, 1),
                    fixed(average, 0),
                    quality
                ))
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn product(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let stats = input.stats;
        if stats.sum == 0.0 {
            return self.degenerate(InsightRule::DomainSpecific, "total is zero");
        }

        let top = input.peak_label();
        let share = stats.max / stats.sum * 100.0;
        if !share.is_finite() {
            return self.degenerate(InsightRule::DomainSpecific, "market share is not finite");
        }

        let position = if share > 40.0 {
            "Dominant position"
        } else if share > 25.0 {
            "Strong performer"
        } else {
            "Competitive position"
        };

        let recommendation = if share > 40.0 {
            "Leverage leading position. Consider portfolio diversification."
        } else {
            "Strengthen competitive advantages. Analyze growth opportunities."
        };

        let details = InsightDetails::new(
            "Market Share",
            format!("{}%", fixed(share, 1)),
            top,
            format!("{} units", grouped(stats.max)),
        )
        .with_action_items(&["Competitive analysis", "Portfolio optimization", "Market expansion"]);

        Ok(Some(
            Insight::new(InsightRule::DomainSpecific, InsightLabel::Product, "Product Portfolio Analysis")
                .with_statistic(share)
                .with_confidence(confidence::PRODUCT)
                .with_impact(if share > 40.0 { Impact::High } else { Impact::Medium })
                .with_description(format!(
                    "{} leads with {}% market share ({} units). {}.",
                    top,
                    fixed(share, 1),
                    grouped(stats.max),
                    position
                ))
                .with_recommendation(recommendation)
                .with_details(details),
        ))
    }

    fn seasonality(&self, input: &RuleInput<'_>) -> Result<Option<Insight>> {
        let stats = input.stats;
        // a ratio against a zero or negative trough says nothing about seasons
        if stats.count < SEASONAL_MIN_POINTS || stats.min <= 0.0 {
            return Ok(None);
        }

        let ratio = stats.max / stats.min;
        if !ratio.is_finite() {
            return self.degenerate(InsightRule::Seasonality, "peak-to-trough ratio is not finite");
        }
        if ratio <= SEASONAL_RATIO {
            return Ok(None);
        }

        let peak = input.peak_label();
        let trough = input.trough_label();

        let details = InsightDetails::new(
            "Seasonal Variation",
            format!("{}x", fixed(ratio, 1)),
            format!("{} to {}", trough, peak),
            "Peak-to-trough ratio",
        )
        .with_action_items(&["Seasonal planning", "Resource optimization", "Demand forecasting"]);

        Ok(Some(
            Insight::new(InsightRule::Seasonality, InsightLabel::Seasonal, "Seasonal Pattern Detected")
                .with_statistic(ratio)
                .with_confidence(confidence::SEASONAL)
                .with_impact(Impact::Medium)
                .with_description(format!(
                    "{}x variation between peak and trough suggests strong seasonal influence. Peak: {}, Trough: {}.",
                    fixed(ratio, 1),
                    peak,
                    trough
                ))
                .with_recommendation("Develop seasonal strategies. Plan inventory and resources around peak periods.")
                .with_details(details),
        ))
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartDimension, ChartStyle};
    use crate::extract::DatasetMetadata;

    fn dataset(values: &[f64], data_type: DataType) -> ChartDataset {
        let labels: Vec<String> = (1..=values.len()).map(|i| format!("P{}", i)).collect();
        ChartDataset {
            labels,
            values: values.to_vec(),
            metadata: DatasetMetadata {
                source_file_name: "test.csv".to_string(),
                x_axis_name: "Period".to_string(),
                y_axis_name: "Value".to_string(),
                total_row_count: values.len(),
                valid_row_count: values.len(),
                inferred_data_type: data_type,
            },
        }
    }

    fn rules(insights: &[Insight]) -> Vec<InsightRule> {
        insights.iter().map(|i| i.rule).collect()
    }

    #[test]
    fn test_empty_dataset() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[], DataType::General), None)
            .unwrap();
        assert!(insights.is_empty());
    }

    #[test]
    fn test_single_value_skips_trend() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[42.0], DataType::General), None)
            .unwrap();
        assert_eq!(rules(&insights), vec![InsightRule::Peak, InsightRule::Consistency]);
    }

    #[test]
    fn test_quarterly_with_zero_quarter() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[100.0, 150.0, 0.0, 200.0], DataType::General), None)
            .unwrap();

        let trend = &insights[0];
        assert_eq!(trend.rule, InsightRule::Trend);
        assert_eq!(trend.label, InsightLabel::Growth);
        assert_eq!(trend.statistic, 100.0);
        assert_eq!(trend.impact, Impact::High);
        assert_eq!(trend.details.value, "+100.0%");
        assert_eq!(trend.details.comparison, "Recent: n/a");
        assert!(trend.description.starts_with("100.0% increase from P1 to P4."));

        // trough is zero, so no seasonality insight
        assert_eq!(
            rules(&insights),
            vec![
                InsightRule::Trend,
                InsightRule::Peak,
                InsightRule::Consistency,
                InsightRule::Opportunity,
            ]
        );

        let opportunity = &insights[3];
        assert_eq!(opportunity.statistic, 112.5);
        assert_eq!(opportunity.impact, Impact::Medium);
    }

    #[test]
    fn test_constant_series_is_stable() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[10.0, 10.0, 10.0, 10.0], DataType::General), None)
            .unwrap();

        let consistency = insights
            .iter()
            .find(|i| i.rule == InsightRule::Consistency)
            .unwrap();
        assert_eq!(consistency.label, InsightLabel::Stability);
        assert_eq!(consistency.impact, Impact::Low);
        assert_eq!(consistency.details.value, "0.0%");
        assert!(!insights.iter().any(|i| i.rule == InsightRule::Opportunity));
        assert!(!insights.iter().any(|i| i.rule == InsightRule::Seasonality));
    }

    #[test]
    fn test_declining_trend() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[200.0, 180.0, 190.0], DataType::General), None)
            .unwrap();
        let trend = &insights[0];
        assert_eq!(trend.label, InsightLabel::Decline);
        assert_eq!(trend.impact, Impact::Low);
        assert_eq!(trend.details.value, "-5.0%");
        assert!(trend.recommendation.contains("Focus on P1 period strategies"));
    }

    #[test]
    fn test_fail_policy_reports_degenerate() {
        let engine = InsightEngine::with_config(InsightConfig {
            degenerate: DegeneratePolicy::Fail,
        });
        let err = engine
            .generate(&dataset(&[0.0, 5.0], DataType::General), None)
            .unwrap_err();
        assert!(matches!(err, ExceleronError::DegenerateResult { ref rule, .. } if rule == "trend"));
    }

    #[test]
    fn test_skip_policy_drops_zero_mean_rules() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[0.0, 0.0], DataType::General), None)
            .unwrap();
        assert!(insights.is_empty());
    }

    #[test]
    fn test_overflowing_series_yields_nothing() {
        for values in [[1e308, 1e308], [1e-300, 1e300]] {
            let insights = InsightEngine::new()
                .generate(&dataset(&values, DataType::Financial), None)
                .unwrap();
            assert!(insights.is_empty());
        }

        let engine = InsightEngine::with_config(InsightConfig {
            degenerate: DegeneratePolicy::Fail,
        });
        let err = engine
            .generate(&dataset(&[1e308, 1e308], DataType::General), None)
            .unwrap_err();
        assert!(matches!(err, ExceleronError::DegenerateResult { ref rule, .. } if rule == "statistics"));
    }

    #[test]
    fn test_infinite_growth_is_degenerate() {
        // statistics are finite, but last / first overflows
        let ds = dataset(&[1e-300, 1e10], DataType::Financial);
        let insights = InsightEngine::new().generate(&ds, None).unwrap();
        assert_eq!(
            rules(&insights),
            vec![InsightRule::Peak, InsightRule::Consistency, InsightRule::Opportunity]
        );
        for insight in &insights {
            assert!(insight.statistic.is_finite());
            assert!(!insight.description.contains("inf"));
            assert!(!insight.description.contains("NaN"));
        }

        let engine = InsightEngine::with_config(InsightConfig {
            degenerate: DegeneratePolicy::Fail,
        });
        let err = engine.generate(&ds, None).unwrap_err();
        assert!(matches!(err, ExceleronError::DegenerateResult { ref rule, .. } if rule == "trend"));
    }

    #[test]
    fn test_financial_cagr() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[100.0, 121.0], DataType::Financial), None)
            .unwrap();
        let fin = insights.iter().find(|i| i.label == InsightLabel::Financial).unwrap();
        assert_eq!(fin.id, 5);
        assert!((fin.statistic - 21.0).abs() < 1e-9);
        assert_eq!(fin.details.value, "21.0%");
        assert_eq!(fin.impact, Impact::High);
        assert!(fin.description.contains("Exceptional growth trajectory"));
    }

    #[test]
    fn test_user_analytics() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[1000.0, 1100.0], DataType::UserAnalytics), None)
            .unwrap();
        let user = insights.iter().find(|i| i.label == InsightLabel::UserGrowth).unwrap();
        assert_eq!(user.details.value, "10.0%");
        assert_eq!(user.details.comparison, "Avg MAU: 1050K");
        assert_eq!(user.impact, Impact::Medium);
    }

    #[test]
    fn test_product_share() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[50.0, 30.0, 20.0], DataType::ProductPerformance), None)
            .unwrap();
        let product = insights.iter().find(|i| i.label == InsightLabel::Product).unwrap();
        assert_eq!(product.details.period, "P1");
        assert_eq!(product.details.value, "50.0%");
        assert_eq!(product.impact, Impact::High);
    }

    #[test]
    fn test_no_domain_insight_for_regional_or_general() {
        for data_type in [DataType::RegionalAnalysis, DataType::General] {
            let insights = InsightEngine::new()
                .generate(&dataset(&[5.0, 6.0, 7.0], data_type), None)
                .unwrap();
            assert!(!insights.iter().any(|i| i.rule == InsightRule::DomainSpecific));
        }
    }

    #[test]
    fn test_seasonality_labels() {
        let mut ds = dataset(&[40.0, 100.0, 20.0, 60.0], DataType::General);
        ds.labels = vec!["Spring".into(), "Summer".into(), "Autumn".into(), "Winter".into()];
        let insights = InsightEngine::new().generate(&ds, None).unwrap();

        let seasonal = insights.last().unwrap();
        assert_eq!(seasonal.rule, InsightRule::Seasonality);
        assert_eq!(seasonal.details.value, "5.0x");
        assert_eq!(seasonal.details.period, "Autumn to Summer");
    }

    #[test]
    fn test_three_points_never_seasonal() {
        let insights = InsightEngine::new()
            .generate(&dataset(&[1.0, 10.0, 100.0], DataType::General), None)
            .unwrap();
        assert!(!insights.iter().any(|i| i.rule == InsightRule::Seasonality));
    }

    #[test]
    fn test_chart_mode_only_changes_hints() {
        let ds = dataset(&[10.0, 20.0, 30.0], DataType::General);
        let engine = InsightEngine::new();
        let flat = engine.generate(&ds, None).unwrap();
        let scene = engine
            .generate(&ds, Some(ChartMode::new(ChartDimension::ThreeD, ChartStyle::Line)))
            .unwrap();

        assert_eq!(flat.len(), scene.len());
        assert_eq!(flat[0].details.chart_hint.as_deref(), Some("2d bar chart"));
        assert_eq!(scene[0].details.chart_hint.as_deref(), Some("3d line chart"));
        assert_eq!(flat[0].statistic, scene[0].statistic);
    }
}
