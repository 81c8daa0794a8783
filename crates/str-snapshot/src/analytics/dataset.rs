use super::domain::PerformanceRecord;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read performance export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid performance CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid value on line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
    #[error("dataset contains {found} distinct properties; a comparison needs at least two")]
    NotEnoughProperties { found: usize },
}

/// Schema-validated performance records, in file order.
#[derive(Debug, Clone, Default)]
pub struct PerformanceDataset {
    records: Vec<PerformanceRecord>,
}

impl PerformanceDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<PerformanceRow>().enumerate() {
            // Line 1 is the header row.
            records.push(row?.into_record(index + 2)?);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PerformanceRecord> {
        self.records
    }

    /// Distinct property identifiers in first-seen order.
    pub fn property_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for record in &self.records {
            if !ids.iter().any(|id| id == &record.property_id) {
                ids.push(record.property_id.clone());
            }
        }
        ids
    }

    /// The first two properties in the dataset, the pair a snapshot compares
    /// when the caller does not name one.
    pub fn default_pair(&self) -> Result<(String, String), DatasetError> {
        let ids = self.property_ids();
        match &ids[..] {
            [first, second, ..] => Ok((first.clone(), second.clone())),
            short => Err(DatasetError::NotEnoughProperties { found: short.len() }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PerformanceRow {
    #[serde(rename = "Property_ID")]
    property_id: String,
    #[serde(rename = "Property_Name")]
    property_name: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Week")]
    week: u32,
    #[serde(rename = "Occupancy_%")]
    occupancy_pct: f64,
    #[serde(rename = "ADR")]
    average_daily_rate: f64,
    #[serde(rename = "Guest_Rating")]
    guest_rating: f64,
    #[serde(rename = "Revenue_Achievement_%")]
    revenue_achievement_pct: f64,
    #[serde(rename = "Days_to_Next_Booking")]
    days_to_next_booking: u32,
    #[serde(rename = "Revenue_Potential")]
    revenue_potential: f64,
    #[serde(rename = "Weekly_Revenue")]
    weekly_revenue: f64,
}

impl PerformanceRow {
    fn into_record(self, line: usize) -> Result<PerformanceRecord, DatasetError> {
        let invalid = |reason: String| DatasetError::InvalidRow { line, reason };

        if self.property_id.is_empty() {
            return Err(invalid("Property_ID must not be empty".to_string()));
        }
        if !(0.0..=100.0).contains(&self.occupancy_pct) {
            return Err(invalid(format!(
                "Occupancy_% must be within 0..=100, got {}",
                self.occupancy_pct
            )));
        }
        if self.average_daily_rate < 0.0 {
            return Err(invalid(format!(
                "ADR must be non-negative, got {}",
                self.average_daily_rate
            )));
        }
        if !(0.0..=5.0).contains(&self.guest_rating) {
            return Err(invalid(format!(
                "Guest_Rating must be within 0.0..=5.0, got {}",
                self.guest_rating
            )));
        }
        // Achievement may exceed 100 when a property beats its target.
        if self.revenue_achievement_pct < 0.0 {
            return Err(invalid(format!(
                "Revenue_Achievement_% must be non-negative, got {}",
                self.revenue_achievement_pct
            )));
        }
        if self.revenue_potential < 0.0 || self.weekly_revenue < 0.0 {
            return Err(invalid("revenue figures must be non-negative".to_string()));
        }

        Ok(PerformanceRecord {
            property_id: self.property_id,
            property_name: self.property_name,
            location: self.location,
            week: self.week,
            occupancy_pct: self.occupancy_pct,
            average_daily_rate: self.average_daily_rate,
            guest_rating: self.guest_rating,
            revenue_achievement_pct: self.revenue_achievement_pct,
            days_to_next_booking: self.days_to_next_booking,
            revenue_potential: self.revenue_potential,
            weekly_revenue: self.weekly_revenue,
        })
    }
}
