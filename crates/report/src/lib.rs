//! Statistical reports over bikeshare trip tables: travel-time patterns,
//! station popularity, trip durations, and rider demographics.
//!
//! Every report takes a [`TripTable`] (usually one that has already been
//! filtered) and fails with [`ReportError::EmptyTable`] when the table
//! holds no trips. Ties between equally frequent values are broken
//! deterministically, so repeated runs over the same table produce the
//! same report.

mod duration;
mod error;
mod freq;
mod output;

use bikestats_calendar::{month_name, weekday_name};
use bikestats_io::TripTable;

pub use duration::DurationBreakdown;
pub use error::ReportError;
pub use output::{
    BirthYearSummary, ColumnReport, StationPopularityReport, TimeOfTravelReport,
    TripDurationReport, UserStatsReport, ValueCount,
};

/// Separator joining a start and end station into one trip label.
pub const PAIR_SEPARATOR: &str = "  -  ";

/// Birth-year column name used in section errors.
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Reports the most common start month, weekday, and hour.
///
/// Month and weekday are reported by display name; codes outside the
/// covered range fall back to the `"all"` sentinel instead of failing.
/// Tied counts resolve to the smallest code.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTable`] if the table holds no trips.
pub fn time_of_travel(table: &TripTable) -> Result<TimeOfTravelReport, ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let month = freq::mode_code(table.months()).ok_or(ReportError::EmptyTable)?;
    let weekday = freq::mode_code(table.weekdays()).ok_or(ReportError::EmptyTable)?;
    let hour = freq::mode_code(table.hours()).ok_or(ReportError::EmptyTable)?;

    Ok(TimeOfTravelReport {
        month: month_name(month).to_string(),
        weekday: weekday_name(weekday).to_string(),
        hour,
    })
}

/// Reports the most popular start station, end station, and station pair.
///
/// Station pairs are counted as opaque composite labels, start and end
/// joined by [`PAIR_SEPARATOR`]. Tied counts resolve to the station (or
/// pair) encountered first in table order.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTable`] if the table holds no trips.
pub fn station_popularity(table: &TripTable) -> Result<StationPopularityReport, ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let start_station = freq::mode_first_seen(table.start_stations().iter().map(String::as_str))
        .ok_or(ReportError::EmptyTable)?
        .to_string();
    let end_station = freq::mode_first_seen(table.end_stations().iter().map(String::as_str))
        .ok_or(ReportError::EmptyTable)?
        .to_string();

    let pairs: Vec<String> = table
        .start_stations()
        .iter()
        .zip(table.end_stations())
        .map(|(start, end)| format!("{start}{PAIR_SEPARATOR}{end}"))
        .collect();
    let trip = freq::mode_first_seen(pairs.iter().map(String::as_str))
        .ok_or(ReportError::EmptyTable)?
        .to_string();

    Ok(StationPopularityReport {
        start_station,
        end_station,
        trip,
    })
}

/// Reports the total and mean trip duration.
///
/// Durations are summed in full precision first; the total is truncated
/// to whole seconds only after summing, so sub-second parts of
/// individual trips still contribute. The mean stays fractional and is
/// decomposed with per-component truncation.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTable`] if the table holds no trips.
pub fn trip_duration(table: &TripTable) -> Result<TripDurationReport, ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let sum: f64 = table.durations().iter().sum();
    let total_seconds = sum.trunc() as u64;
    let mean_seconds = sum / table.len() as f64;

    Ok(TripDurationReport {
        total_seconds,
        total: DurationBreakdown::from_seconds(total_seconds),
        mean_seconds,
        mean: DurationBreakdown::from_seconds_f64(mean_seconds),
    })
}

/// Reports rider demographics: user types, genders, and birth years.
///
/// The user-type distribution is always computed. The gender and
/// birth-year sections come back [`ColumnReport::Unavailable`] for city
/// exports without those columns; a gender column whose cells are all
/// blank yields an empty distribution.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTable`] if the table holds no trips, and
/// [`ReportError::EmptyColumn`] if a birth-year column is present but
/// every cell is blank, since no summary can be formed from it.
pub fn user_stats(table: &TripTable) -> Result<UserStatsReport, ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let user_types = to_value_counts(freq::ranked_counts(
        table.user_types().iter().flatten().map(String::as_str),
    ));

    let genders = match table.genders() {
        Some(column) => ColumnReport::Available(to_value_counts(freq::ranked_counts(
            column.iter().flatten().map(String::as_str),
        ))),
        None => ColumnReport::Unavailable,
    };

    let birth_years = match table.birth_years() {
        Some(column) => {
            let years: Vec<i32> = column.iter().flatten().copied().collect();
            ColumnReport::Available(summarize_birth_years(&years)?)
        }
        None => ColumnReport::Unavailable,
    };

    Ok(UserStatsReport {
        user_types,
        genders,
        birth_years,
    })
}

fn to_value_counts(ranked: Vec<(String, u64)>) -> Vec<ValueCount> {
    ranked
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}

/// Earliest, most recent, and most common year over the usable cells.
fn summarize_birth_years(years: &[i32]) -> Result<BirthYearSummary, ReportError> {
    let (Some(&earliest), Some(&most_recent)) = (years.iter().min(), years.iter().max()) else {
        return Err(ReportError::EmptyColumn {
            column: BIRTH_YEAR_COLUMN,
        });
    };
    let most_common = freq::mode_year(years).ok_or(ReportError::EmptyColumn {
        column: BIRTH_YEAR_COLUMN,
    })?;

    Ok(BirthYearSummary {
        earliest,
        most_recent,
        most_common,
    })
}
