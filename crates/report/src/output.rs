//! Output structures for the four trip reports.

use serde::Serialize;

use crate::duration::DurationBreakdown;

/// Most frequent travel times over the reported trips.
#[derive(Debug, Clone, Serialize)]
pub struct TimeOfTravelReport {
    /// Display name of the most common start month.
    pub month: String,
    /// Display name of the most common start weekday.
    pub weekday: String,
    /// Most common start hour (0..=23).
    pub hour: u8,
}

/// Most popular start station, end station, and station pair.
#[derive(Debug, Clone, Serialize)]
pub struct StationPopularityReport {
    /// Most common start station.
    pub start_station: String,
    /// Most common end station.
    pub end_station: String,
    /// Composite label of the most common trip, start and end joined by
    /// [`crate::PAIR_SEPARATOR`].
    pub trip: String,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, Serialize)]
pub struct TripDurationReport {
    /// Sum of all durations, truncated to whole seconds after summing.
    pub total_seconds: u64,
    /// The total, decomposed into whole units.
    pub total: DurationBreakdown,
    /// Mean duration in fractional seconds.
    pub mean_seconds: f64,
    /// The mean, decomposed with per-component truncation.
    pub mean: DurationBreakdown,
}

/// Number of trips carrying one distinct column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    /// The distinct value as it appears in the data.
    pub value: String,
    /// Number of trips carrying it.
    pub count: u64,
}

/// A report section over a column only some city exports carry.
///
/// `Unavailable` is the expected outcome for datasets without the column,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ColumnReport<T> {
    /// The column exists and the section was computed.
    Available(T),
    /// The export does not carry the column.
    Unavailable,
}

impl<T> ColumnReport<T> {
    /// Returns the computed section, if the column was available.
    pub fn available(&self) -> Option<&T> {
        match self {
            ColumnReport::Available(section) => Some(section),
            ColumnReport::Unavailable => None,
        }
    }

    /// Whether the column was available.
    pub fn is_available(&self) -> bool {
        matches!(self, ColumnReport::Available(_))
    }
}

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearSummary {
    /// Smallest birth year on record.
    pub earliest: i32,
    /// Largest birth year on record.
    pub most_recent: i32,
    /// Most frequent birth year; ties resolve to the smallest year.
    pub most_common: i32,
}

/// Rider demographics over the reported trips.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatsReport {
    /// Trips per rider category, by descending count.
    pub user_types: Vec<ValueCount>,
    /// Trips per gender, when the export carries the column.
    pub genders: ColumnReport<Vec<ValueCount>>,
    /// Birth-year summary, when the export carries the column.
    pub birth_years: ColumnReport<BirthYearSummary>,
}
