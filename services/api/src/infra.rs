use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use str_snapshot::analytics::dataset::{DatasetError, PerformanceDataset};
use str_snapshot::config::DatasetConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: DatasetConfig,
}

/// December sample for the two Cape Town properties, four weeks each. Used by
/// the demo subcommand and the endpoint tests.
pub(crate) const SAMPLE_DATASET: &str = "\
Property_ID,Property_Name,Location,Week,Occupancy_%,ADR,Guest_Rating,Revenue_Achievement_%,Days_to_Next_Booking,Revenue_Potential,Weekly_Revenue
SP001,Above&Beyond,Sea Point,1,88,1250,4.9,96,2,8750,8400
SP001,Above&Beyond,Sea Point,2,84,1195,4.8,92,3,8365,7696
SP001,Above&Beyond,Sea Point,3,86,1230,4.9,95,2,8610,8180
SP001,Above&Beyond,Sea Point,4,83,1210,4.8,93,4,8470,7877
SP002,Cape Town Luxury Villa,Woodstock,1,74,910,4.6,82,8,6370,5223
SP002,Cape Town Luxury Villa,Woodstock,2,70,925,4.5,78,11,6475,5051
SP002,Cape Town Luxury Villa,Woodstock,3,73,905,4.6,81,9,6335,5131
SP002,Cape Town Luxury Villa,Woodstock,4,69,880,4.7,76,12,6160,4682
";

pub(crate) fn sample_dataset() -> Result<PerformanceDataset, DatasetError> {
    PerformanceDataset::from_reader(SAMPLE_DATASET.as_bytes())
}
