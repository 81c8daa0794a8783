mod comparison;
pub mod dataset;
pub mod domain;
mod insights;
mod summary;
pub mod views;

pub use comparison::{compare, ComparisonResult, MetricDelta};
pub use insights::{insight_labels, snapshot_insights, InsightLabel, SnapshotInsights};
pub use summary::{summarize, trend_series, PropertySummary};
