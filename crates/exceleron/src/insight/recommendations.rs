//! Key recommendations panel.

use serde::{Deserialize, Serialize};

use super::insight::{Impact, Insight};

/// Maximum entries per group.
const MAX_PER_GROUP: usize = 3;

/// One recommendation, tied back to its insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub insight_id: u8,
    pub title: String,
    pub text: String,
}

/// Recommendations grouped by urgency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRecommendations {
    /// From high-impact insights.
    pub immediate_actions: Vec<Recommendation>,
    /// From medium-impact insights.
    pub strategic_opportunities: Vec<Recommendation>,
}

impl KeyRecommendations {
    /// Collect up to three recommendations per group, in insight order.
    pub fn from_insights(insights: &[Insight]) -> Self {
        let pick = |impact: Impact| {
            insights
                .iter()
                .filter(|i| i.impact == impact)
                .take(MAX_PER_GROUP)
                .map(|i| Recommendation {
                    insight_id: i.id,
                    title: i.title.clone(),
                    text: i.recommendation.clone(),
                })
                .collect()
        };

        Self {
            immediate_actions: pick(Impact::High),
            strategic_opportunities: pick(Impact::Medium),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.immediate_actions.is_empty() && self.strategic_opportunities.is_empty()
    }
}
