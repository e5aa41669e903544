//! Filter selectors: a concrete month/weekday, or the `"all"` sentinel.

use crate::error::CalendarError;
use crate::month::Month;
use crate::weekday::Weekday;

/// The sentinel name users type to leave a filter dimension unrestricted.
pub const ALL_NAME: &str = "all";

/// A month filter choice: every month, or one specific month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    /// No month restriction.
    All,
    /// Only trips starting in the given month.
    Only(Month),
}

impl MonthSelector {
    /// Parses an already-normalized selector name: `"all"` or a month name.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownMonth`] if `name` is neither `"all"`
    /// nor a covered month name.
    pub fn parse(name: &str) -> Result<Self, CalendarError> {
        if name == ALL_NAME {
            Ok(Self::All)
        } else {
            Month::from_name(name).map(Self::Only)
        }
    }

    /// Whether a trip with the given month code passes this selector.
    ///
    /// `All` passes every code, out-of-coverage codes included.
    pub fn matches(self, code: u8) -> bool {
        match self {
            Self::All => true,
            Self::Only(month) => month.code() == code,
        }
    }

    /// The name this selector parses from.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => ALL_NAME,
            Self::Only(month) => month.name(),
        }
    }
}

/// A weekday filter choice: every day, or one specific weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdaySelector {
    /// No weekday restriction.
    All,
    /// Only trips starting on the given weekday.
    Only(Weekday),
}

impl WeekdaySelector {
    /// Parses an already-normalized selector name: `"all"` or a weekday name.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownWeekday`] if `name` is neither
    /// `"all"` nor a weekday name.
    pub fn parse(name: &str) -> Result<Self, CalendarError> {
        if name == ALL_NAME {
            Ok(Self::All)
        } else {
            Weekday::from_name(name).map(Self::Only)
        }
    }

    /// Whether a trip with the given weekday code passes this selector.
    pub fn matches(self, code: u8) -> bool {
        match self {
            Self::All => true,
            Self::Only(day) => day.code() == code,
        }
    }

    /// The name this selector parses from.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => ALL_NAME,
            Self::Only(day) => day.name(),
        }
    }
}
