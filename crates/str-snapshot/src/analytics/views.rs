use super::domain::{MetricTier, TieredMetric, TrackedMetric};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MetricTierEntry {
    pub metric: TieredMetric,
    pub metric_label: &'static str,
    pub tier: MetricTier,
    pub tier_label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertySummaryView {
    pub property_id: String,
    pub property_name: String,
    pub location: String,
    pub record_count: usize,
    pub occupancy_pct: f64,
    pub average_daily_rate: f64,
    pub guest_rating: f64,
    pub revenue_achievement_pct: f64,
    pub days_to_next_booking: f64,
    pub tiers: Vec<MetricTierEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDeltaEntry {
    pub metric: TrackedMetric,
    pub metric_label: &'static str,
    pub first: f64,
    pub second: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub first: PropertySummaryView,
    pub second: PropertySummaryView,
    pub weaker_property_id: String,
    pub deltas: Vec<MetricDeltaEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightEntry {
    pub metric: TieredMetric,
    pub metric_label: &'static str,
    pub tier: MetricTier,
    pub tier_label: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotInsightsView {
    pub first: Vec<InsightEntry>,
    pub second: Vec<InsightEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub week: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendSeries {
    pub property_id: String,
    pub property_name: String,
    pub metric: TrackedMetric,
    pub metric_label: &'static str,
    pub points: Vec<TrendPoint>,
}
