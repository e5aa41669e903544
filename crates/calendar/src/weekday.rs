//! Weekday codec with Monday-first numbering.

use crate::error::CalendarError;
use crate::selector::ALL_NAME;

/// A day of the week.
///
/// Codes are 0-based starting from Monday (Monday = 0, ..., Sunday = 6),
/// the same numbering chrono's `num_days_from_monday` produces for a trip's
/// start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Lowercase display names in variant order.
const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Looks up a weekday by its lowercase name.
    ///
    /// The match is exact; trimming and lowercasing are the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownWeekday`] if `name` is not one of
    /// `"monday"`..`"sunday"`.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == name)
            .ok_or_else(|| CalendarError::UnknownWeekday {
                name: name.to_string(),
            })
    }

    /// Looks up a weekday by its 0-based code.
    ///
    /// Returns `None` for codes outside 0..=6.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0..=6 => Some(Self::ALL[usize::from(code)]),
            _ => None,
        }
    }

    /// The 0-based weekday code (Monday = 0, ..., Sunday = 6).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The lowercase display name.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

/// Display name for a weekday code, for report output.
///
/// Out-of-range codes fall back to the `"all"` sentinel, mirroring
/// [`month_name`](crate::month_name).
pub fn weekday_name(code: u8) -> &'static str {
    Weekday::from_code(code).map_or(ALL_NAME, Weekday::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_valid() {
        assert_eq!(Weekday::from_name("monday").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::from_name("sunday").unwrap(), Weekday::Sunday);
    }

    #[test]
    fn from_name_is_exact() {
        assert!(Weekday::from_name("Monday").is_err());
        assert!(Weekday::from_name("mon").is_err());
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(
            Weekday::from_name("someday").unwrap_err(),
            CalendarError::UnknownWeekday {
                name: "someday".to_string(),
            }
        );
    }

    #[test]
    fn codes_start_at_monday() {
        assert_eq!(Weekday::Monday.code(), 0);
        assert_eq!(Weekday::Wednesday.code(), 2);
        assert_eq!(Weekday::Sunday.code(), 6);
    }

    #[test]
    fn round_trips() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_name(day.name()).unwrap(), day);
            assert_eq!(Weekday::from_code(day.code()), Some(day));
        }
    }

    #[test]
    fn weekday_name_falls_back_to_sentinel() {
        assert_eq!(weekday_name(0), "monday");
        assert_eq!(weekday_name(6), "sunday");
        assert_eq!(weekday_name(7), "all");
    }
}
