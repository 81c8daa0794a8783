use super::domain::TrackedMetric;
use super::summary::PropertySummary;
use super::views::{ComparisonView, MetricDeltaEntry};

/// Signed difference for one metric, computed as `first - second`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDelta {
    pub metric: TrackedMetric,
    pub first: f64,
    pub second: f64,
    pub delta: f64,
}

/// Two summaries side by side, with per-metric deltas and the property that
/// needs attention first.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub first: PropertySummary,
    pub second: PropertySummary,
    pub deltas: Vec<MetricDelta>,
    pub weaker_property_id: String,
}

impl ComparisonResult {
    pub fn weaker(&self) -> &PropertySummary {
        if self.weaker_property_id == self.first.property_id {
            &self.first
        } else {
            &self.second
        }
    }

    pub fn delta(&self, metric: TrackedMetric) -> Option<&MetricDelta> {
        self.deltas.iter().find(|entry| entry.metric == metric)
    }

    pub fn to_view(&self) -> ComparisonView {
        let deltas = self
            .deltas
            .iter()
            .map(|entry| MetricDeltaEntry {
                metric: entry.metric,
                metric_label: entry.metric.label(),
                first: entry.first,
                second: entry.second,
                delta: entry.delta,
            })
            .collect();

        ComparisonView {
            first: self.first.to_view(),
            second: self.second.to_view(),
            weaker_property_id: self.weaker_property_id.clone(),
            deltas,
        }
    }
}

/// Occupancy is the priority metric for the weaker-property call; a tie marks
/// `first` as the weaker one.
pub fn compare(first: &PropertySummary, second: &PropertySummary) -> ComparisonResult {
    let deltas = TrackedMetric::ordered()
        .into_iter()
        .map(|metric| {
            let first_value = first.metric(metric);
            let second_value = second.metric(metric);
            MetricDelta {
                metric,
                first: first_value,
                second: second_value,
                delta: first_value - second_value,
            }
        })
        .collect();

    let weaker_property_id = if first.occupancy_pct <= second.occupancy_pct {
        first.property_id.clone()
    } else {
        second.property_id.clone()
    };

    ComparisonResult {
        first: first.clone(),
        second: second.clone(),
        deltas,
        weaker_property_id,
    }
}
