//! High-level trip reading: configuration and CSV orchestration.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::city::City;
use crate::csv_read;
use crate::error::LoadError;
use crate::trips::TripTable;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for locating city trip exports.
///
/// Use the builder methods (`with_*`) to point at a data directory or remap
/// individual city files. The [`Default`] implementation resolves the
/// conventional file names against the current directory.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Directory the conventional city file names are resolved in.
    data_dir: PathBuf,
    /// Per-city file overrides; later entries win.
    overrides: Vec<(City, PathBuf)>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            overrides: Vec::new(),
        }
    }
}

impl ReaderConfig {
    /// Set the directory the conventional city file names are resolved in.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Map one city to an explicit file, bypassing the data directory.
    pub fn with_city_file(mut self, city: City, path: impl Into<PathBuf>) -> Self {
        self.overrides.push((city, path.into()));
        self
    }

    /// The path the given city's records are read from.
    pub fn source_path(&self, city: City) -> PathBuf {
        self.overrides
            .iter()
            .rev()
            .find(|(c, _)| *c == city)
            .map(|(_, path)| path.clone())
            .unwrap_or_else(|| self.data_dir.join(city.file_name()))
    }
}

// ---------------------------------------------------------------------------
// read_trips
// ---------------------------------------------------------------------------

/// Read one city's trip records into a [`TripTable`].
///
/// The export must carry the six required columns (`Start Time`, `End Time`,
/// `Start Station`, `End Station`, `Trip Duration`, `User Type`); `Gender`
/// and `Birth Year` are picked up when present. Header positions are
/// resolved by name, so the leading unnamed index column of the real
/// exports is skipped naturally.
///
/// # Errors
///
/// Returns [`LoadError`] when the file is missing, a required column is
/// absent, a cell fails to parse, or the assembled columns fail validation.
pub fn read_trips(city: City, config: &ReaderConfig) -> Result<TripTable, LoadError> {
    let path = config.source_path(city);
    debug!(city = city.name(), path = %path.display(), "reading trip records");

    let mut reader = csv_read::open_reader(&path)?;
    let headers = reader.headers()?.clone();
    let layout = csv_read::resolve_columns(&headers, &path)?;

    // -- Column accumulators ------------------------------------------------

    let mut start_times = Vec::new();
    let mut end_times = Vec::new();
    let mut start_stations = Vec::new();
    let mut end_stations = Vec::new();
    let mut durations = Vec::new();
    let mut user_types = Vec::new();
    let mut genders = layout.gender.map(|_| Vec::new());
    let mut birth_years = layout.birth_year.map(|_| Vec::new());

    // -- Row loop -----------------------------------------------------------

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Physical file line, counting the header.
        let line = row as u64 + 2;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        start_times.push(csv_read::parse_timestamp(
            field(layout.start_time),
            csv_read::START_TIME,
            line,
        )?);
        end_times.push(csv_read::parse_timestamp(
            field(layout.end_time),
            csv_read::END_TIME,
            line,
        )?);
        start_stations.push(field(layout.start_station).to_string());
        end_stations.push(field(layout.end_station).to_string());
        durations.push(csv_read::parse_duration(field(layout.duration), line)?);
        user_types.push(csv_read::non_empty(field(layout.user_type)));

        if let (Some(column), Some(idx)) = (genders.as_mut(), layout.gender) {
            column.push(csv_read::non_empty(field(idx)));
        }
        if let (Some(column), Some(idx)) = (birth_years.as_mut(), layout.birth_year) {
            column.push(csv_read::parse_birth_year(field(idx), line)?);
        }
    }

    let table = TripTable::new(
        city,
        start_times,
        end_times,
        start_stations,
        end_stations,
        durations,
        user_types,
        genders,
        birth_years,
    )?;

    info!(city = city.name(), rows = table.len(), "trip records loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_path_joins_data_dir() {
        let config = ReaderConfig::default().with_data_dir("/data/bikeshare");
        assert_eq!(
            config.source_path(City::Chicago),
            PathBuf::from("/data/bikeshare/chicago.csv")
        );
        assert_eq!(
            config.source_path(City::NewYorkCity),
            PathBuf::from("/data/bikeshare/new_york_city.csv")
        );
    }

    #[test]
    fn source_path_override_wins() {
        let config = ReaderConfig::default()
            .with_data_dir("/data")
            .with_city_file(City::Washington, "/elsewhere/wa_2017.csv");

        assert_eq!(
            config.source_path(City::Washington),
            PathBuf::from("/elsewhere/wa_2017.csv")
        );
        // Other cities still resolve through the directory.
        assert_eq!(
            config.source_path(City::Chicago),
            PathBuf::from("/data/chicago.csv")
        );
    }

    #[test]
    fn source_path_later_override_wins() {
        let config = ReaderConfig::default()
            .with_city_file(City::Chicago, "/a.csv")
            .with_city_file(City::Chicago, "/b.csv");

        assert_eq!(config.source_path(City::Chicago), PathBuf::from("/b.csv"));
    }
}
