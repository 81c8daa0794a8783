use super::domain::{AnalyticsError, PerformanceRecord, TieredMetric, TrackedMetric};
use super::views::{MetricTierEntry, PropertySummaryView, TrendPoint, TrendSeries};

/// Per-property arithmetic means over all observation records for that
/// property. Only exists for non-empty groups.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
    pub property_id: String,
    pub property_name: String,
    pub location: String,
    pub record_count: usize,
    pub occupancy_pct: f64,
    pub average_daily_rate: f64,
    pub guest_rating: f64,
    pub revenue_achievement_pct: f64,
    pub days_to_next_booking: f64,
}

impl PropertySummary {
    pub fn metric(&self, metric: TrackedMetric) -> f64 {
        match metric {
            TrackedMetric::Occupancy => self.occupancy_pct,
            TrackedMetric::AverageDailyRate => self.average_daily_rate,
            TrackedMetric::GuestRating => self.guest_rating,
            TrackedMetric::RevenueAchievement => self.revenue_achievement_pct,
            TrackedMetric::DaysToNextBooking => self.days_to_next_booking,
        }
    }

    pub fn to_view(&self) -> PropertySummaryView {
        let tiers = TieredMetric::ordered()
            .into_iter()
            .map(|metric| {
                let value = self.metric(metric.tracked());
                let tier = metric.classify(value);
                MetricTierEntry {
                    metric,
                    metric_label: metric.label(),
                    tier,
                    tier_label: tier.label(),
                    value,
                }
            })
            .collect();

        PropertySummaryView {
            property_id: self.property_id.clone(),
            property_name: self.property_name.clone(),
            location: self.location.clone(),
            record_count: self.record_count,
            occupancy_pct: self.occupancy_pct,
            average_daily_rate: self.average_daily_rate,
            guest_rating: self.guest_rating,
            revenue_achievement_pct: self.revenue_achievement_pct,
            days_to_next_booking: self.days_to_next_booking,
            tiers,
        }
    }
}

/// Filters records to `property_id` and computes the mean of every tracked
/// metric. Fails when the filter matches nothing; a summary is never built
/// from zero rows.
pub fn summarize(
    records: &[PerformanceRecord],
    property_id: &str,
) -> Result<PropertySummary, AnalyticsError> {
    let group: Vec<&PerformanceRecord> = records
        .iter()
        .filter(|record| record.property_id == property_id)
        .collect();

    let Some(head) = group.first() else {
        return Err(AnalyticsError::EmptyGroup {
            property_id: property_id.to_owned(),
        });
    };

    let mut occupancy = 0.0;
    let mut rate = 0.0;
    let mut rating = 0.0;
    let mut achievement = 0.0;
    let mut booking_gap = 0.0;
    for record in &group {
        occupancy += record.occupancy_pct;
        rate += record.average_daily_rate;
        rating += record.guest_rating;
        achievement += record.revenue_achievement_pct;
        booking_gap += f64::from(record.days_to_next_booking);
    }

    let count = group.len() as f64;
    Ok(PropertySummary {
        property_id: property_id.to_owned(),
        property_name: head.property_name.clone(),
        location: head.location.clone(),
        record_count: group.len(),
        occupancy_pct: occupancy / count,
        average_daily_rate: rate / count,
        guest_rating: rating / count,
        revenue_achievement_pct: achievement / count,
        days_to_next_booking: booking_gap / count,
    })
}

/// Week-ordered observations of one metric for one property, the data behind
/// the dashboard's weekly trend lines.
pub fn trend_series(
    records: &[PerformanceRecord],
    property_id: &str,
    metric: TrackedMetric,
) -> Result<TrendSeries, AnalyticsError> {
    let mut group: Vec<&PerformanceRecord> = records
        .iter()
        .filter(|record| record.property_id == property_id)
        .collect();

    let Some(head) = group.first() else {
        return Err(AnalyticsError::EmptyGroup {
            property_id: property_id.to_owned(),
        });
    };
    let property_name = head.property_name.clone();

    group.sort_by_key(|record| record.week);
    let points = group
        .iter()
        .map(|record| TrendPoint {
            week: record.week,
            value: record.metric(metric),
        })
        .collect();

    Ok(TrendSeries {
        property_id: property_id.to_owned(),
        property_name,
        metric,
        metric_label: metric.label(),
        points,
    })
}
