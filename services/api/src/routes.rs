use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use str_snapshot::analytics::dataset::PerformanceDataset;
use str_snapshot::analytics::domain::{PerformanceRecord, TrackedMetric};
use str_snapshot::analytics::views::{ComparisonView, SnapshotInsightsView, TrendSeries};
use str_snapshot::analytics::{compare, snapshot_insights, summarize, trend_series};
use str_snapshot::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotRequest {
    /// Inline CSV export; the configured dataset path is used when absent.
    #[serde(default)]
    pub(crate) csv: Option<String>,
    #[serde(default)]
    pub(crate) first_property: Option<String>,
    #[serde(default)]
    pub(crate) second_property: Option<String>,
    #[serde(default)]
    pub(crate) include_trends: bool,
    #[serde(default)]
    pub(crate) include_records: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SnapshotResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) data_source: SnapshotDataSource,
    pub(crate) comparison: ComparisonView,
    pub(crate) insights: SnapshotInsightsView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trends: Option<Vec<TrendSeries>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) records: Option<Vec<PerformanceRecord>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SnapshotDataSource {
    Inline,
    Configured,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/performance/snapshot", post(snapshot_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn snapshot_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SnapshotRequest>,
) -> Result<Json<SnapshotResponse>, AppError> {
    let SnapshotRequest {
        csv,
        first_property,
        second_property,
        include_trends,
        include_records,
    } = payload;

    let (dataset, data_source) = match csv {
        Some(csv) => (
            PerformanceDataset::from_reader(Cursor::new(csv.into_bytes()))?,
            SnapshotDataSource::Inline,
        ),
        None => (
            PerformanceDataset::from_path(&state.dataset.path)?,
            SnapshotDataSource::Configured,
        ),
    };

    let response = build_snapshot(
        &dataset,
        data_source,
        first_property,
        second_property,
        include_trends,
        include_records,
    )?;

    Ok(Json(response))
}

pub(crate) fn build_snapshot(
    dataset: &PerformanceDataset,
    data_source: SnapshotDataSource,
    first_property: Option<String>,
    second_property: Option<String>,
    include_trends: bool,
    include_records: bool,
) -> Result<SnapshotResponse, AppError> {
    let (default_first, default_second) = dataset.default_pair()?;
    let first_id = first_property.unwrap_or(default_first);
    let second_id = second_property.unwrap_or(default_second);

    let records = dataset.records();
    let first = summarize(records, &first_id)?;
    let second = summarize(records, &second_id)?;
    let comparison = compare(&first, &second);
    let insights = snapshot_insights(&comparison);

    let trends = if include_trends {
        let mut series = Vec::new();
        for property_id in [&first_id, &second_id] {
            for metric in TrackedMetric::ordered() {
                series.push(trend_series(records, property_id, metric)?);
            }
        }
        Some(series)
    } else {
        None
    };

    let records = include_records.then(|| records.to_vec());

    Ok(SnapshotResponse {
        generated_on: Local::now().date_naive(),
        data_source,
        comparison: comparison.to_view(),
        insights: insights.to_view(),
        trends,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sample_dataset;
    use str_snapshot::analytics::domain::AnalyticsError;

    #[test]
    fn snapshot_defaults_to_the_first_two_properties() {
        let dataset = sample_dataset().expect("sample parses");

        let response = build_snapshot(
            &dataset,
            SnapshotDataSource::Configured,
            None,
            None,
            false,
            false,
        )
        .expect("snapshot builds");

        assert_eq!(response.comparison.first.property_id, "SP001");
        assert_eq!(response.comparison.second.property_id, "SP002");
        assert_eq!(response.comparison.weaker_property_id, "SP002");
        assert_eq!(response.comparison.deltas.len(), 5);
        assert!(response.trends.is_none());
        assert!(response.records.is_none());
    }

    #[test]
    fn snapshot_can_include_trends_and_records() {
        let dataset = sample_dataset().expect("sample parses");

        let response = build_snapshot(
            &dataset,
            SnapshotDataSource::Inline,
            None,
            None,
            true,
            true,
        )
        .expect("snapshot builds");

        // Five metrics for each of the two properties.
        let trends = response.trends.expect("trends included");
        assert_eq!(trends.len(), 10);
        assert!(trends
            .iter()
            .all(|series| series.points.len() == 4));

        let records = response.records.expect("records included");
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn snapshot_rejects_an_unknown_property() {
        let dataset = sample_dataset().expect("sample parses");

        let error = build_snapshot(
            &dataset,
            SnapshotDataSource::Configured,
            Some("SP404".to_string()),
            None,
            false,
            false,
        )
        .expect_err("unknown property rejected");

        match error {
            AppError::Analytics(AnalyticsError::EmptyGroup { property_id }) => {
                assert_eq!(property_id, "SP404");
            }
            other => panic!("expected empty-group error, got {other:?}"),
        }
    }

    #[test]
    fn sample_dataset_classifies_like_the_dashboard() {
        let dataset = sample_dataset().expect("sample parses");

        let response = build_snapshot(
            &dataset,
            SnapshotDataSource::Configured,
            None,
            None,
            false,
            false,
        )
        .expect("snapshot builds");

        assert!(response
            .comparison
            .first
            .tiers
            .iter()
            .all(|entry| entry.tier_label == "Good"));
        assert!(response
            .comparison
            .second
            .tiers
            .iter()
            .all(|entry| entry.tier_label == "Warning"));
        assert!(!response.insights.recommended_actions.is_empty());
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
