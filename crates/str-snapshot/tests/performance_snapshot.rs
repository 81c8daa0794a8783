use str_snapshot::analytics::domain::{
    AnalyticsError, MetricTier, PerformanceRecord, TieredMetric, TrackedMetric,
};
use str_snapshot::analytics::{
    compare, insight_labels, snapshot_insights, summarize, trend_series,
};

fn record(
    property_id: &str,
    property_name: &str,
    week: u32,
    occupancy_pct: f64,
    average_daily_rate: f64,
    guest_rating: f64,
    revenue_achievement_pct: f64,
    days_to_next_booking: u32,
) -> PerformanceRecord {
    let revenue_potential = average_daily_rate * 7.0;
    PerformanceRecord {
        property_id: property_id.to_string(),
        property_name: property_name.to_string(),
        location: "Cape Town".to_string(),
        week,
        occupancy_pct,
        average_daily_rate,
        guest_rating,
        revenue_achievement_pct,
        days_to_next_booking,
        revenue_potential,
        weekly_revenue: revenue_potential * revenue_achievement_pct / 100.0,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn summarize_returns_field_means_over_the_group() {
    let records = vec![
        record("SP001", "Above&Beyond", 1, 88.0, 1250.0, 4.9, 96.0, 2),
        record("SP001", "Above&Beyond", 2, 84.0, 1190.0, 4.8, 92.0, 3),
        record("SP002", "Cape Town Luxury Villa", 1, 74.0, 910.0, 4.6, 82.0, 8),
    ];

    let summary = summarize(&records, "SP001").expect("group is non-empty");

    assert_eq!(summary.property_id, "SP001");
    assert_eq!(summary.property_name, "Above&Beyond");
    assert_eq!(summary.record_count, 2);
    assert_close(summary.occupancy_pct, 86.0);
    assert_close(summary.average_daily_rate, 1220.0);
    assert_close(summary.guest_rating, 4.85);
    assert_close(summary.revenue_achievement_pct, 94.0);
    assert_close(summary.days_to_next_booking, 2.5);
}

#[test]
fn summarize_fails_for_an_unmatched_property() {
    let records = vec![record("SP001", "Above&Beyond", 1, 88.0, 1250.0, 4.9, 96.0, 2)];

    let error = summarize(&records, "SP009").expect_err("no records for SP009");

    assert_eq!(
        error,
        AnalyticsError::EmptyGroup {
            property_id: "SP009".to_string(),
        }
    );
}

#[test]
fn compare_reports_symmetric_deltas() {
    let records = vec![
        record("SP001", "Above&Beyond", 1, 85.0, 1200.0, 4.9, 95.0, 3),
        record("SP002", "Cape Town Luxury Villa", 1, 72.0, 900.0, 4.6, 80.0, 10),
    ];
    let first = summarize(&records, "SP001").expect("SP001 present");
    let second = summarize(&records, "SP002").expect("SP002 present");

    let forward = compare(&first, &second);
    let backward = compare(&second, &first);

    for metric in TrackedMetric::ordered() {
        let ahead = forward.delta(metric).expect("delta present").delta;
        let behind = backward.delta(metric).expect("delta present").delta;
        assert_close(ahead, -behind);
    }
    assert_eq!(forward.weaker_property_id, backward.weaker_property_id);
}

#[test]
fn equal_occupancy_marks_the_first_property_as_weaker() {
    let records = vec![
        record("SP001", "Above&Beyond", 1, 80.0, 1200.0, 4.9, 95.0, 3),
        record("SP002", "Cape Town Luxury Villa", 1, 80.0, 900.0, 4.6, 80.0, 10),
    ];
    let first = summarize(&records, "SP001").expect("SP001 present");
    let second = summarize(&records, "SP002").expect("SP002 present");

    let comparison = compare(&first, &second);

    assert_eq!(comparison.weaker_property_id, "SP001");
    assert_eq!(comparison.weaker().property_name, "Above&Beyond");
}

#[test]
fn snapshot_matches_the_reference_scenario() {
    let records = vec![
        record("SP001", "Above&Beyond", 1, 85.0, 1200.0, 4.9, 95.0, 3),
        record("SP002", "Cape Town Luxury Villa", 1, 72.0, 900.0, 4.6, 80.0, 10),
    ];

    let first = summarize(&records, "SP001").expect("SP001 present");
    let second = summarize(&records, "SP002").expect("SP002 present");
    assert_close(first.occupancy_pct, 85.0);
    assert_close(second.occupancy_pct, 72.0);

    let comparison = compare(&first, &second);
    assert_eq!(comparison.weaker_property_id, "SP002");
    let occupancy = comparison
        .delta(TrackedMetric::Occupancy)
        .expect("occupancy delta present");
    assert_close(occupancy.delta, 13.0);

    let first_labels = insight_labels(&first);
    assert!(first_labels
        .iter()
        .all(|label| label.tier == MetricTier::Good));
    assert_eq!(first_labels[0].message, "Strong occupancy at 85.0%");

    let second_labels = insight_labels(&second);
    assert_eq!(second_labels.len(), 3);
    assert!(second_labels
        .iter()
        .all(|label| label.tier == MetricTier::Warning));
    let ordered: Vec<TieredMetric> = second_labels.iter().map(|label| label.metric).collect();
    assert_eq!(ordered, TieredMetric::ordered());
}

#[test]
fn recommendations_flag_the_weaker_property_and_lagging_metrics() {
    let records = vec![
        record("SP001", "Above&Beyond", 1, 85.0, 1200.0, 4.9, 95.0, 3),
        record("SP002", "Cape Town Luxury Villa", 1, 72.0, 900.0, 4.6, 80.0, 10),
    ];
    let first = summarize(&records, "SP001").expect("SP001 present");
    let second = summarize(&records, "SP002").expect("SP002 present");

    let insights = snapshot_insights(&compare(&first, &second));

    assert_eq!(
        insights.recommended_actions[0],
        "Cape Town Luxury Villa requires immediate attention with 72.0% occupancy"
    );
    assert!(insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("pricing strategy")
            && action.contains("Cape Town Luxury Villa")));
    assert!(insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("guest feedback")
            && action.contains("Cape Town Luxury Villa")));
    assert!(!insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("pricing strategy") && action.contains("Above&Beyond")));
}

#[test]
fn trend_series_orders_points_by_week() {
    let records = vec![
        record("SP001", "Above&Beyond", 3, 86.0, 1230.0, 4.9, 95.0, 2),
        record("SP001", "Above&Beyond", 1, 88.0, 1250.0, 4.9, 96.0, 2),
        record("SP001", "Above&Beyond", 2, 84.0, 1190.0, 4.8, 92.0, 3),
    ];

    let series = trend_series(&records, "SP001", TrackedMetric::Occupancy)
        .expect("SP001 present");

    assert_eq!(series.metric_label, "Occupancy %");
    let weeks: Vec<u32> = series.points.iter().map(|point| point.week).collect();
    assert_eq!(weeks, vec![1, 2, 3]);
    assert_close(series.points[0].value, 88.0);

    let error = trend_series(&records, "SP404", TrackedMetric::GuestRating)
        .expect_err("unknown property fails");
    assert!(matches!(error, AnalyticsError::EmptyGroup { .. }));
}
