//! Insight records shown as cards in the dashboard.

use serde::{Deserialize, Serialize};

/// Confidence shown on each card, per rule.
///
/// These are fixed display values, not derived from the data.
pub mod confidence {
    pub const TREND: u8 = 95;
    pub const PEAK: u8 = 100;
    pub const CONSISTENCY: u8 = 92;
    pub const OPPORTUNITY: u8 = 88;
    pub const FINANCIAL: u8 = 96;
    pub const USER_ANALYTICS: u8 = 94;
    pub const PRODUCT: u8 = 98;
    pub const SEASONAL: u8 = 85;
}

/// The rule that produced an insight, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    Trend,
    Peak,
    Consistency,
    Opportunity,
    DomainSpecific,
    Seasonality,
}

impl InsightRule {
    /// Position of the rule in the evaluation order (1-based).
    pub fn ordinal(&self) -> u8 {
        match self {
            InsightRule::Trend => 1,
            InsightRule::Peak => 2,
            InsightRule::Consistency => 3,
            InsightRule::Opportunity => 4,
            InsightRule::DomainSpecific => 5,
            InsightRule::Seasonality => 6,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InsightRule::Trend => "trend",
            InsightRule::Peak => "peak",
            InsightRule::Consistency => "consistency",
            InsightRule::Opportunity => "opportunity",
            InsightRule::DomainSpecific => "domain-specific",
            InsightRule::Seasonality => "seasonality",
        }
    }
}

/// Qualitative label of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLabel {
    Growth,
    Decline,
    Peak,
    Volatility,
    Stability,
    Opportunity,
    Financial,
    UserGrowth,
    Product,
    Seasonal,
}

/// How much attention an insight deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "LOW",
            Impact::Medium => "MEDIUM",
            Impact::High => "HIGH",
        }
    }

    /// High above `high`, medium above `medium`, otherwise low.
    pub(crate) fn from_thresholds(value: f64, high: f64, medium: f64) -> Self {
        if value > high {
            Impact::High
        } else if value > medium {
            Impact::Medium
        } else {
            Impact::Low
        }
    }
}

/// Supporting fields for the detail view of an insight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsightDetails {
    /// Name of the statistic.
    pub metric: String,
    /// Formatted statistic value.
    pub value: String,
    /// Period or label the statistic refers to.
    pub period: String,
    /// Comparison text.
    pub comparison: String,
    /// Chart the insight reads best on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_hint: Option<String>,
    pub action_items: Vec<String>,
}

impl InsightDetails {
    pub fn new(
        metric: impl Into<String>,
        value: impl Into<String>,
        period: impl Into<String>,
        comparison: impl Into<String>,
    ) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
            period: period.into(),
            comparison: comparison.into(),
            chart_hint: None,
            action_items: Vec::new(),
        }
    }

    /// Set the chart hint.
    pub fn with_chart_hint(mut self, hint: impl Into<String>) -> Self {
        self.chart_hint = Some(hint.into());
        self
    }

    /// Set the action items.
    pub fn with_action_items(mut self, items: &[&str]) -> Self {
        self.action_items = items.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// A derived statement about a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Rule ordinal; domain insights share id 5.
    pub id: u8,
    pub rule: InsightRule,
    pub label: InsightLabel,
    pub title: String,
    /// Raw value of the headline statistic.
    pub statistic: f64,
    /// Display confidence in percent.
    pub confidence: u8,
    pub impact: Impact,
    pub description: String,
    pub recommendation: String,
    pub details: InsightDetails,
}

impl Insight {
    /// Create a new insight.
    pub fn new(rule: InsightRule, label: InsightLabel, title: impl Into<String>) -> Self {
        Self {
            id: rule.ordinal(),
            rule,
            label,
            title: title.into(),
            statistic: 0.0,
            confidence: 0,
            impact: Impact::Low,
            description: String::new(),
            recommendation: String::new(),
            details: InsightDetails::default(),
        }
    }

    /// Set the headline statistic.
    pub fn with_statistic(mut self, statistic: f64) -> Self {
        self.statistic = statistic;
        self
    }

    /// Set confidence.
    pub fn with_confidence(mut self, confidence: u8) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set impact.
    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }

    /// Set the details.
    pub fn with_details(mut self, details: InsightDetails) -> Self {
        self.details = details;
        self
    }
}
