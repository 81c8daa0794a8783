use super::comparison::ComparisonResult;
use super::domain::{MetricTier, TieredMetric};
use super::summary::PropertySummary;
use super::views::{InsightEntry, SnapshotInsightsView};

/// Canned finding for one tiered metric of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightLabel {
    pub metric: TieredMetric,
    pub tier: MetricTier,
    pub message: String,
}

impl InsightLabel {
    pub fn to_view(&self) -> InsightEntry {
        InsightEntry {
            metric: self.metric,
            metric_label: self.metric.label(),
            tier: self.tier,
            tier_label: self.tier.label(),
            message: self.message.clone(),
        }
    }
}

/// One entry per tiered metric, in policy order. The message is selected by
/// the tier alone and formatted with the summary's mean.
pub fn insight_labels(summary: &PropertySummary) -> Vec<InsightLabel> {
    TieredMetric::ordered()
        .into_iter()
        .map(|metric| {
            let value = summary.metric(metric.tracked());
            let tier = metric.classify(value);
            InsightLabel {
                metric,
                tier,
                message: insight_message(metric, tier, value),
            }
        })
        .collect()
}

fn insight_message(metric: TieredMetric, tier: MetricTier, value: f64) -> String {
    match (metric, tier) {
        (TieredMetric::Occupancy, MetricTier::Good) => {
            format!("Strong occupancy at {value:.1}%")
        }
        (TieredMetric::Occupancy, MetricTier::Warning) => {
            format!("Below target occupancy: {value:.1}%")
        }
        (TieredMetric::Occupancy, MetricTier::Critical) => {
            format!("Occupancy well below target: {value:.1}%")
        }
        (TieredMetric::GuestRating, MetricTier::Good) => {
            format!("Excellent guest rating: {value:.1}")
        }
        (TieredMetric::GuestRating, MetricTier::Warning) => {
            format!("Guest rating below target: {value:.1}")
        }
        (TieredMetric::GuestRating, MetricTier::Critical) => {
            format!("Guest rating needs attention: {value:.1}")
        }
        (TieredMetric::RevenueAchievement, MetricTier::Good) => {
            format!("Meeting revenue targets: {value:.1}%")
        }
        (TieredMetric::RevenueAchievement, MetricTier::Warning) => {
            format!("Revenue achievement below target: {value:.1}%")
        }
        (TieredMetric::RevenueAchievement, MetricTier::Critical) => {
            format!("Revenue achievement critically low: {value:.1}%")
        }
    }
}

/// Insight labels for both sides of a comparison plus the recommended-action
/// list for the snapshot's closing section.
#[derive(Debug, Clone)]
pub struct SnapshotInsights {
    pub first: Vec<InsightLabel>,
    pub second: Vec<InsightLabel>,
    pub recommended_actions: Vec<String>,
}

impl SnapshotInsights {
    pub fn to_view(&self) -> SnapshotInsightsView {
        SnapshotInsightsView {
            first: self.first.iter().map(InsightLabel::to_view).collect(),
            second: self.second.iter().map(InsightLabel::to_view).collect(),
            recommended_actions: self.recommended_actions.clone(),
        }
    }
}

pub fn snapshot_insights(comparison: &ComparisonResult) -> SnapshotInsights {
    SnapshotInsights {
        first: insight_labels(&comparison.first),
        second: insight_labels(&comparison.second),
        recommended_actions: recommended_actions(comparison),
    }
}

fn recommended_actions(comparison: &ComparisonResult) -> Vec<String> {
    let weaker = comparison.weaker();
    let mut actions = vec![format!(
        "{} requires immediate attention with {:.1}% occupancy",
        weaker.property_name, weaker.occupancy_pct
    )];

    for summary in [&comparison.first, &comparison.second] {
        let achievement = summary.revenue_achievement_pct;
        if TieredMetric::RevenueAchievement.classify(achievement) != MetricTier::Good {
            actions.push(format!(
                "Review and optimize pricing strategy for {} ({:.1}% revenue achievement)",
                summary.property_name, achievement
            ));
        }
    }

    for summary in [&comparison.first, &comparison.second] {
        let rating = summary.guest_rating;
        if TieredMetric::GuestRating.classify(rating) != MetricTier::Good {
            actions.push(format!(
                "Monitor guest feedback for {} (rating {:.1})",
                summary.property_name, rating
            ));
        }
    }

    actions
}
