use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrics carried by every summary and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedMetric {
    Occupancy,
    AverageDailyRate,
    GuestRating,
    RevenueAchievement,
    DaysToNextBooking,
}

impl TrackedMetric {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Occupancy,
            Self::AverageDailyRate,
            Self::GuestRating,
            Self::RevenueAchievement,
            Self::DaysToNextBooking,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupancy => "Occupancy %",
            Self::AverageDailyRate => "ADR (R)",
            Self::GuestRating => "Guest Rating",
            Self::RevenueAchievement => "Revenue Achievement %",
            Self::DaysToNextBooking => "Days to Next Booking",
        }
    }
}

// Band edges are inclusive on their lower bound.
const OCCUPANCY_GOOD_PCT: f64 = 80.0;
const OCCUPANCY_WARNING_PCT: f64 = 70.0;
const RATING_GOOD: f64 = 4.8;
const RATING_WARNING: f64 = 4.5;
const ACHIEVEMENT_GOOD_PCT: f64 = 90.0;
const ACHIEVEMENT_WARNING_PCT: f64 = 75.0;

/// The subset of metrics with a fixed Good/Warning/Critical threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieredMetric {
    Occupancy,
    GuestRating,
    RevenueAchievement,
}

impl TieredMetric {
    pub const fn ordered() -> [Self; 3] {
        [Self::Occupancy, Self::GuestRating, Self::RevenueAchievement]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupancy => "Occupancy %",
            Self::GuestRating => "Guest Rating",
            Self::RevenueAchievement => "Revenue Achievement %",
        }
    }

    pub const fn tracked(self) -> TrackedMetric {
        match self {
            Self::Occupancy => TrackedMetric::Occupancy,
            Self::GuestRating => TrackedMetric::GuestRating,
            Self::RevenueAchievement => TrackedMetric::RevenueAchievement,
        }
    }

    pub fn classify(self, value: f64) -> MetricTier {
        let (good, warning) = match self {
            Self::Occupancy => (OCCUPANCY_GOOD_PCT, OCCUPANCY_WARNING_PCT),
            Self::GuestRating => (RATING_GOOD, RATING_WARNING),
            Self::RevenueAchievement => (ACHIEVEMENT_GOOD_PCT, ACHIEVEMENT_WARNING_PCT),
        };

        if value >= good {
            MetricTier::Good
        } else if value >= warning {
            MetricTier::Warning
        } else {
            MetricTier::Critical
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricTier {
    Good,
    Warning,
    Critical,
}

impl MetricTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

/// One observation row for one property and week. Immutable once loaded;
/// numeric ranges are enforced at the dataset boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub property_id: String,
    pub property_name: String,
    pub location: String,
    pub week: u32,
    pub occupancy_pct: f64,
    pub average_daily_rate: f64,
    pub guest_rating: f64,
    pub revenue_achievement_pct: f64,
    pub days_to_next_booking: u32,
    pub revenue_potential: f64,
    pub weekly_revenue: f64,
}

impl PerformanceRecord {
    pub fn metric(&self, metric: TrackedMetric) -> f64 {
        match metric {
            TrackedMetric::Occupancy => self.occupancy_pct,
            TrackedMetric::AverageDailyRate => self.average_daily_rate,
            TrackedMetric::GuestRating => self.guest_rating,
            TrackedMetric::RevenueAchievement => self.revenue_achievement_pct,
            TrackedMetric::DaysToNextBooking => f64::from(self.days_to_next_booking),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    EmptyGroup { property_id: String },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::EmptyGroup { property_id } => {
                write!(f, "no performance records found for property '{property_id}'")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}
