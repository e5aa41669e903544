//! Validated filter selections.

use bikestats_calendar::{MonthSelector, WeekdaySelector};
use bikestats_io::City;

use crate::error::SelectionError;

/// A validated `(city, month, weekday)` filter triple.
///
/// Built by [`resolve_filters`] from raw selection strings, or assembled
/// directly from already-validated parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    /// City whose records are loaded.
    pub city: City,
    /// Month restriction, or all months.
    pub month: MonthSelector,
    /// Weekday restriction, or all days.
    pub weekday: WeekdaySelector,
}

/// Resolve raw selection strings into a [`FilterSelection`].
///
/// This is the validation boundary between user input and the pipeline:
/// inputs are expected to be trimmed and lowercased already, and anything
/// that does not resolve fails here, before any file is touched. Fields
/// are checked in city, month, weekday order and the first failure is
/// returned.
///
/// # Errors
///
/// Returns [`SelectionError::UnknownCity`] for an unrecognized city, or a
/// wrapped [`CalendarError`](bikestats_calendar::CalendarError) for an
/// unrecognized month or weekday name.
pub fn resolve_filters(
    city: &str,
    month: &str,
    weekday: &str,
) -> Result<FilterSelection, SelectionError> {
    let city = City::from_name(city).ok_or_else(|| SelectionError::UnknownCity {
        name: city.to_string(),
    })?;
    let month = MonthSelector::parse(month)?;
    let weekday = WeekdaySelector::parse(weekday)?;

    Ok(FilterSelection {
        city,
        month,
        weekday,
    })
}
