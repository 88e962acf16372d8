//! Data category inferred from the value-axis column name.

use std::fmt;

use serde::{Deserialize, Serialize};

const FINANCIAL_TERMS: &[&str] = &["revenue", "sales", "profit", "cost", "price", "$"];
const USER_TERMS: &[&str] = &["user", "customer", "visitor", "engagement", "retention"];
const PRODUCT_TERMS: &[&str] = &["product", "item", "inventory", "stock", "unit"];
const REGIONAL_TERMS: &[&str] = &["region", "country", "location", "territory", "area"];

/// Category of a dataset, used to pick domain-specific insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Financial,
    UserAnalytics,
    ProductPerformance,
    RegionalAnalysis,
    #[default]
    General,
}

impl DataType {
    /// Classify a Y-axis column name by case-insensitive keyword match.
    ///
    /// Categories are tried in a fixed order (financial, user analytics,
    /// product, regional) and the first match wins.
    pub fn detect(column_name: &str) -> Self {
        let name = column_name.to_lowercase();
        let matches = |terms: &[&str]| terms.iter().any(|t| name.contains(t));

        if matches(FINANCIAL_TERMS) {
            DataType::Financial
        } else if matches(USER_TERMS) {
            DataType::UserAnalytics
        } else if matches(PRODUCT_TERMS) {
            DataType::ProductPerformance
        } else if matches(REGIONAL_TERMS) {
            DataType::RegionalAnalysis
        } else {
            DataType::General
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Financial => "Financial",
            DataType::UserAnalytics => "User Analytics",
            DataType::ProductPerformance => "Product Performance",
            DataType::RegionalAnalysis => "Regional Analysis",
            DataType::General => "General",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DataType::Financial => "financial",
            DataType::UserAnalytics => "user_analytics",
            DataType::ProductPerformance => "product_performance",
            DataType::RegionalAnalysis => "regional_analysis",
            DataType::General => "general",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_categories() {
        assert_eq!(DataType::detect("Revenue"), DataType::Financial);
        assert_eq!(DataType::detect("Amount ($)"), DataType::Financial);
        assert_eq!(DataType::detect("Active Users"), DataType::UserAnalytics);
        assert_eq!(DataType::detect("Units Sold"), DataType::ProductPerformance);
        assert_eq!(DataType::detect("Stock Level"), DataType::ProductPerformance);
        assert_eq!(DataType::detect("Territory"), DataType::RegionalAnalysis);
        assert_eq!(DataType::detect("Temperature"), DataType::General);
    }

    #[test]
    fn test_priority_order() {
        // "customer revenue" hits both financial and user vocabularies
        assert_eq!(DataType::detect("Customer Revenue"), DataType::Financial);
        assert_eq!(DataType::detect("Product Users"), DataType::UserAnalytics);
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(DataType::UserAnalytics.to_string(), "user_analytics");
        assert_eq!(DataType::default().to_string(), "general");
    }
}
