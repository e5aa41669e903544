//! In-memory trip table with derived calendar columns.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::city::City;
use crate::error::LoadError;
use crate::validate;

/// Demographic columns that only some city exports carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalColumn {
    /// Rider gender (absent from the Washington export).
    Gender,
    /// Rider birth year (absent from the Washington export).
    BirthYear,
}

/// Column-oriented container for one city's trip records.
///
/// Holds the raw columns read from the city export plus calendar columns
/// (month, weekday, start hour) derived from each trip's start timestamp at
/// construction time. A table is never mutated after construction;
/// filtering produces a new table via [`select`](Self::select).
#[derive(Debug, Clone)]
pub struct TripTable {
    /// City the records belong to.
    city: City,
    /// Start timestamp of each trip.
    start_times: Vec<NaiveDateTime>,
    /// End timestamp of each trip.
    end_times: Vec<NaiveDateTime>,
    /// Start station name of each trip.
    start_stations: Vec<String>,
    /// End station name of each trip.
    end_stations: Vec<String>,
    /// Trip duration in seconds.
    durations: Vec<f64>,
    /// Rider category per trip; `None` for blank cells.
    user_types: Vec<Option<String>>,
    /// Rider gender per trip, when the export carries the column.
    genders: Option<Vec<Option<String>>>,
    /// Rider birth year per trip, when the export carries the column.
    birth_years: Option<Vec<Option<i32>>>,
    /// Month code of each start timestamp (1..=12).
    months: Vec<u8>,
    /// Weekday code of each start timestamp (Monday = 0).
    weekdays: Vec<u8>,
    /// Hour of each start timestamp (0..=23).
    hours: Vec<u8>,
}

impl TripTable {
    /// Creates a new `TripTable` after validating inputs, deriving the
    /// calendar columns from the start timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Validation`] if any of the following checks fail:
    /// - Column lengths do not match the start-time column
    /// - A duration is negative or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        city: City,
        start_times: Vec<NaiveDateTime>,
        end_times: Vec<NaiveDateTime>,
        start_stations: Vec<String>,
        end_stations: Vec<String>,
        durations: Vec<f64>,
        user_types: Vec<Option<String>>,
        genders: Option<Vec<Option<String>>>,
        birth_years: Option<Vec<Option<i32>>>,
    ) -> Result<Self, LoadError> {
        let n_rows = start_times.len();

        // Validate lengths.
        validate::validate_lengths(
            n_rows,
            &[
                ("end_times", end_times.len()),
                ("start_stations", start_stations.len()),
                ("end_stations", end_stations.len()),
                ("durations", durations.len()),
                ("user_types", user_types.len()),
            ],
            &[
                ("genders", genders.as_ref().map(Vec::len)),
                ("birth_years", birth_years.as_ref().map(Vec::len)),
            ],
        )
        .finish()?;

        // Validate durations.
        validate::validate_durations(&durations).finish()?;

        // Derive calendar columns from the start timestamps.
        let months = start_times.iter().map(|t| t.month() as u8).collect();
        let weekdays = start_times
            .iter()
            .map(|t| t.weekday().num_days_from_monday() as u8)
            .collect();
        let hours = start_times.iter().map(|t| t.hour() as u8).collect();

        Ok(Self {
            city,
            start_times,
            end_times,
            start_stations,
            end_stations,
            durations,
            user_types,
            genders,
            birth_years,
            months,
            weekdays,
            hours,
        })
    }

    /// Returns the city the records belong to.
    pub fn city(&self) -> City {
        self.city
    }

    /// Returns the start timestamps.
    pub fn start_times(&self) -> &[NaiveDateTime] {
        &self.start_times
    }

    /// Returns the end timestamps.
    pub fn end_times(&self) -> &[NaiveDateTime] {
        &self.end_times
    }

    /// Returns the start station names.
    pub fn start_stations(&self) -> &[String] {
        &self.start_stations
    }

    /// Returns the end station names.
    pub fn end_stations(&self) -> &[String] {
        &self.end_stations
    }

    /// Returns the trip durations in seconds.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Returns the rider category of each trip.
    pub fn user_types(&self) -> &[Option<String>] {
        &self.user_types
    }

    /// Returns the gender column, if the export carries it.
    pub fn genders(&self) -> Option<&[Option<String>]> {
        self.genders.as_deref()
    }

    /// Returns the birth-year column, if the export carries it.
    pub fn birth_years(&self) -> Option<&[Option<i32>]> {
        self.birth_years.as_deref()
    }

    /// Returns the month code of each start timestamp.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns the weekday code of each start timestamp (Monday = 0).
    pub fn weekdays(&self) -> &[u8] {
        &self.weekdays
    }

    /// Returns the start hour of each trip (0..=23).
    pub fn hours(&self) -> &[u8] {
        &self.hours
    }

    /// Whether the export carries the given optional column.
    ///
    /// This is a schema question: a column that exists but happens to hold
    /// no values in the current rows still counts as present.
    pub fn has_column(&self, column: OptionalColumn) -> bool {
        match column {
            OptionalColumn::Gender => self.genders.is_some(),
            OptionalColumn::BirthYear => self.birth_years.is_some(),
        }
    }

    /// Returns the number of trips.
    pub fn len(&self) -> usize {
        self.start_times.len()
    }

    /// Returns `true` if the table contains no trips.
    pub fn is_empty(&self) -> bool {
        self.start_times.is_empty()
    }

    /// Builds a new table containing the rows at `indices`, in order.
    ///
    /// The source table is left untouched. Derived columns are copied along
    /// with the raw ones; the timestamps they were derived from are copied
    /// unchanged, so the derivation invariant holds in the new table.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> TripTable {
        fn take<T: Clone>(column: &[T], indices: &[usize]) -> Vec<T> {
            indices.iter().map(|&i| column[i].clone()).collect()
        }

        TripTable {
            city: self.city,
            start_times: take(&self.start_times, indices),
            end_times: take(&self.end_times, indices),
            start_stations: take(&self.start_stations, indices),
            end_stations: take(&self.end_stations, indices),
            durations: take(&self.durations, indices),
            user_types: take(&self.user_types, indices),
            genders: self.genders.as_deref().map(|col| take(col, indices)),
            birth_years: self.birth_years.as_deref().map(|col| take(col, indices)),
            months: take(&self.months, indices),
            weekdays: take(&self.weekdays, indices),
            hours: take(&self.hours, indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: parse a plain `Y-m-d H:M:S` timestamp.
    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    /// Helper: a two-row table with both demographic columns.
    fn two_rows() -> TripTable {
        TripTable::new(
            City::Chicago,
            vec![ts("2017-01-02 08:05:00"), ts("2017-03-15 19:30:00")],
            vec![ts("2017-01-02 08:10:00"), ts("2017-03-15 19:45:00")],
            vec!["State St".to_string(), "Lake Ave".to_string()],
            vec!["Lake Ave".to_string(), "State St".to_string()],
            vec![300.0, 900.0],
            vec![Some("Subscriber".to_string()), Some("Customer".to_string())],
            Some(vec![Some("Male".to_string()), None]),
            Some(vec![Some(1992), None]),
        )
        .unwrap()
    }

    #[test]
    fn new_derives_calendar_columns() {
        let table = two_rows();

        // 2017-01-02 was a Monday; 2017-03-15 a Wednesday.
        assert_eq!(table.months(), &[1, 3]);
        assert_eq!(table.weekdays(), &[0, 2]);
        assert_eq!(table.hours(), &[8, 19]);
    }

    #[test]
    fn new_without_demographics() {
        let table = TripTable::new(
            City::Washington,
            vec![ts("2017-06-30 23:59:59")],
            vec![ts("2017-07-01 00:10:00")],
            vec!["A".to_string()],
            vec!["B".to_string()],
            vec![601.0],
            vec![None],
            None,
            None,
        )
        .unwrap();

        assert!(!table.has_column(OptionalColumn::Gender));
        assert!(!table.has_column(OptionalColumn::BirthYear));
        assert!(table.genders().is_none());
        assert!(table.birth_years().is_none());
        // 2017-06-30 was a Friday.
        assert_eq!(table.weekdays(), &[4]);
        assert_eq!(table.hours(), &[23]);
    }

    #[test]
    fn new_length_mismatch_returns_error() {
        let result = TripTable::new(
            City::Chicago,
            vec![ts("2017-01-02 08:05:00"), ts("2017-01-02 08:30:00")],
            vec![ts("2017-01-02 08:10:00")],
            vec!["A".to_string(), "B".to_string()],
            vec!["B".to_string(), "A".to_string()],
            vec![300.0, 300.0],
            vec![None, None],
            None,
            None,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Validation { .. }));
    }

    #[test]
    fn new_negative_duration_returns_error() {
        let result = TripTable::new(
            City::Chicago,
            vec![ts("2017-01-02 08:05:00")],
            vec![ts("2017-01-02 08:10:00")],
            vec!["A".to_string()],
            vec!["B".to_string()],
            vec![-300.0],
            vec![None],
            None,
            None,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Validation { count: 1, .. }));
    }

    #[test]
    fn has_column_is_a_schema_question() {
        // Present column with no usable values still counts as present.
        let table = TripTable::new(
            City::NewYorkCity,
            vec![ts("2017-05-01 12:00:00")],
            vec![ts("2017-05-01 12:20:00")],
            vec!["A".to_string()],
            vec!["B".to_string()],
            vec![1200.0],
            vec![Some("Subscriber".to_string())],
            Some(vec![None]),
            Some(vec![None]),
        )
        .unwrap();

        assert!(table.has_column(OptionalColumn::Gender));
        assert!(table.has_column(OptionalColumn::BirthYear));
    }

    #[test]
    fn select_keeps_requested_rows_in_order() {
        let table = two_rows();
        let subset = table.select(&[1]);

        assert_eq!(subset.len(), 1);
        assert_eq!(subset.start_stations(), &["Lake Ave".to_string()]);
        assert_eq!(subset.months(), &[3]);
        assert_eq!(subset.weekdays(), &[2]);
        assert_eq!(subset.genders(), Some([None].as_slice()));
        assert_eq!(subset.birth_years(), Some([None].as_slice()));
    }

    #[test]
    fn select_leaves_source_untouched() {
        let table = two_rows();
        let before = table.len();
        let _ = table.select(&[0]);

        assert_eq!(table.len(), before);
        assert_eq!(table.months(), &[1, 3]);
    }

    #[test]
    fn select_duplicates_and_reorders() {
        let table = two_rows();
        let subset = table.select(&[1, 0, 1]);

        assert_eq!(subset.len(), 3);
        assert_eq!(subset.months(), &[3, 1, 3]);
        assert_eq!(subset.durations(), &[900.0, 300.0, 900.0]);
    }

    #[test]
    fn select_empty_indices() {
        let table = two_rows();
        let subset = table.select(&[]);

        assert!(subset.is_empty());
        assert_eq!(subset.city(), City::Chicago);
        assert!(subset.has_column(OptionalColumn::Gender));
    }

    #[test]
    fn empty_table() {
        let table = TripTable::new(
            City::Chicago,
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            None,
            None,
        )
        .unwrap();

        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert!(table.months().is_empty());
        assert!(table.hours().is_empty());
    }
}
