//! Low-level CSV access helpers.
//!
//! Column resolution by header name and per-cell parsing. The real city
//! exports carry a leading unnamed index column, so positions are resolved
//! by name rather than assumed.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::LoadError;

/// Timestamp layout used by the city exports (`2017-01-02 08:05:00`, with an
/// optional fractional part).
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

// Column headers as they appear in the city exports.
pub(crate) const START_TIME: &str = "Start Time";
pub(crate) const END_TIME: &str = "End Time";
pub(crate) const START_STATION: &str = "Start Station";
pub(crate) const END_STATION: &str = "End Station";
pub(crate) const TRIP_DURATION: &str = "Trip Duration";
pub(crate) const USER_TYPE: &str = "User Type";
pub(crate) const GENDER: &str = "Gender";
pub(crate) const BIRTH_YEAR: &str = "Birth Year";

/// Resolved header positions for one file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnLayout {
    pub(crate) start_time: usize,
    pub(crate) end_time: usize,
    pub(crate) start_station: usize,
    pub(crate) end_station: usize,
    pub(crate) duration: usize,
    pub(crate) user_type: usize,
    pub(crate) gender: Option<usize>,
    pub(crate) birth_year: Option<usize>,
}

/// Open a CSV reader over `path`, checking existence first.
///
/// # Errors
///
/// Returns [`LoadError::FileNotFound`] if the path does not exist, or
/// [`LoadError::Csv`] if the reader cannot be constructed.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    csv::Reader::from_path(path).map_err(LoadError::from)
}

/// Resolve required and optional column positions from the header row.
///
/// # Errors
///
/// Returns [`LoadError::MissingColumn`] for the first required column that
/// is absent. Absent optional columns resolve to `None`.
pub(crate) fn resolve_columns(
    headers: &csv::StringRecord,
    path: &Path,
) -> Result<ColumnLayout, LoadError> {
    let position = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &str| {
        position(name).ok_or_else(|| LoadError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    };

    Ok(ColumnLayout {
        start_time: required(START_TIME)?,
        end_time: required(END_TIME)?,
        start_station: required(START_STATION)?,
        end_station: required(END_STATION)?,
        duration: required(TRIP_DURATION)?,
        user_type: required(USER_TYPE)?,
        gender: position(GENDER),
        birth_year: position(BIRTH_YEAR),
    })
}

/// Parse a timestamp cell.
pub(crate) fn parse_timestamp(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<NaiveDateTime, LoadError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        LoadError::InvalidTimestamp {
            column,
            line,
            value: value.to_string(),
        }
    })
}

/// Parse a trip-duration cell (seconds, possibly fractional).
pub(crate) fn parse_duration(value: &str, line: u64) -> Result<f64, LoadError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            column: TRIP_DURATION,
            line,
            value: value.to_string(),
        })
}

/// Parse a birth-year cell.
///
/// The exports store the column in float form (`"1992.0"`); empty cells
/// mean the rider did not supply one.
pub(crate) fn parse_birth_year(value: &str, line: u64) -> Result<Option<i32>, LoadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let year: f64 = trimmed.parse().map_err(|_| LoadError::InvalidNumber {
        column: BIRTH_YEAR,
        line,
        value: value.to_string(),
    })?;
    Ok(Some(year as i32))
}

/// An owned copy of a cell, with empty (or whitespace-only) cells mapped to
/// `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timestamp_plain() {
        let ts = parse_timestamp("2017-01-02 08:05:00", START_TIME, 2).unwrap();
        assert_eq!(ts.to_string(), "2017-01-02 08:05:00");
    }

    #[test]
    fn parse_timestamp_with_fraction() {
        let ts = parse_timestamp("2017-06-11 14:55:05.857", START_TIME, 2).unwrap();
        assert_eq!(ts.and_utc().timestamp_subsec_millis(), 857);
    }

    #[test]
    fn parse_timestamp_invalid() {
        let err = parse_timestamp("last tuesday", END_TIME, 9).unwrap_err();
        match err {
            LoadError::InvalidTimestamp {
                column,
                line,
                value,
            } => {
                assert_eq!(column, END_TIME);
                assert_eq!(line, 9);
                assert_eq!(value, "last tuesday");
            }
            other => panic!("expected LoadError::InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn parse_duration_valid() {
        assert_eq!(parse_duration("300", 2).unwrap(), 300.0);
        assert_eq!(parse_duration("915.5", 2).unwrap(), 915.5);
    }

    #[test]
    fn parse_duration_invalid() {
        let err = parse_duration("a while", 4).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 4, .. }));
    }

    #[test]
    fn parse_birth_year_float_form() {
        assert_eq!(parse_birth_year("1992.0", 2).unwrap(), Some(1992));
        assert_eq!(parse_birth_year("1966", 2).unwrap(), Some(1966));
    }

    #[test]
    fn parse_birth_year_empty_is_none() {
        assert_eq!(parse_birth_year("", 2).unwrap(), None);
        assert_eq!(parse_birth_year("   ", 2).unwrap(), None);
    }

    #[test]
    fn parse_birth_year_invalid() {
        let err = parse_birth_year("unknown", 7).unwrap_err();
        assert!(matches!(err, LoadError::InvalidNumber { line: 7, .. }));
    }

    #[test]
    fn non_empty_maps_blanks_to_none() {
        assert_eq!(non_empty("Subscriber"), Some("Subscriber".to_string()));
        assert_eq!(non_empty("  Customer "), Some("Customer".to_string()));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn resolve_columns_full_header() {
        let headers = csv::StringRecord::from(vec![
            "",
            START_TIME,
            END_TIME,
            TRIP_DURATION,
            START_STATION,
            END_STATION,
            USER_TYPE,
            GENDER,
            BIRTH_YEAR,
        ]);
        let layout = resolve_columns(&headers, Path::new("chicago.csv")).unwrap();
        assert_eq!(layout.start_time, 1);
        assert_eq!(layout.duration, 3);
        assert_eq!(layout.gender, Some(7));
        assert_eq!(layout.birth_year, Some(8));
    }

    #[test]
    fn resolve_columns_without_demographics() {
        let headers = csv::StringRecord::from(vec![
            "",
            START_TIME,
            END_TIME,
            TRIP_DURATION,
            START_STATION,
            END_STATION,
            USER_TYPE,
        ]);
        let layout = resolve_columns(&headers, Path::new("washington.csv")).unwrap();
        assert_eq!(layout.gender, None);
        assert_eq!(layout.birth_year, None);
    }

    #[test]
    fn resolve_columns_missing_required() {
        let headers = csv::StringRecord::from(vec!["", START_TIME, END_TIME]);
        let err = resolve_columns(&headers, Path::new("broken.csv")).unwrap_err();
        match err {
            LoadError::MissingColumn { name, .. } => {
                assert_eq!(name, START_STATION);
            }
            other => panic!("expected LoadError::MissingColumn, got {other:?}"),
        }
    }
}
