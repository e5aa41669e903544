//! Month codec restricted to the datasets' January..June coverage.

use crate::error::CalendarError;
use crate::selector::ALL_NAME;

/// A calendar month covered by the trip datasets.
///
/// The source files only contain trips from the first half of the year, so
/// the codec stops at June. Month codes are 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

/// Lowercase display names in variant order.
const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

impl Month {
    /// All covered months in calendar order.
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Looks up a month by its lowercase name.
    ///
    /// The match is exact; trimming and lowercasing are the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownMonth`] if `name` is not one of
    /// `"january"`..`"june"`.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| CalendarError::UnknownMonth {
                name: name.to_string(),
            })
    }

    /// Looks up a month by its 1-based code.
    ///
    /// Returns `None` for codes outside 1..=6, including the months of the
    /// second half of the year.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[usize::from(code) - 1]),
            _ => None,
        }
    }

    /// The 1-based month code (January = 1, ..., June = 6).
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// The lowercase display name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

/// Display name for a month code, for report output.
///
/// Codes without an exact match (anything outside 1..=6) fall back to the
/// `"all"` sentinel instead of failing, so a stray out-of-coverage trip can
/// never break a report.
pub fn month_name(code: u8) -> &'static str {
    Month::from_code(code).map_or(ALL_NAME, Month::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_valid() {
        assert_eq!(Month::from_name("january").unwrap(), Month::January);
        assert_eq!(Month::from_name("june").unwrap(), Month::June);
    }

    #[test]
    fn from_name_is_exact() {
        // Normalization happens upstream.
        assert!(Month::from_name("January").is_err());
        assert!(Month::from_name(" january").is_err());
    }

    #[test]
    fn from_name_rejects_misspellings() {
        assert_eq!(Month::from_name("february").unwrap(), Month::February);
        assert!(Month::from_name("febuary").is_err());
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(
            Month::from_name("july").unwrap_err(),
            CalendarError::UnknownMonth {
                name: "july".to_string(),
            }
        );
    }

    #[test]
    fn codes_are_one_based() {
        assert_eq!(Month::January.code(), 1);
        assert_eq!(Month::June.code(), 6);
    }

    #[test]
    fn round_trips() {
        for month in Month::ALL {
            assert_eq!(Month::from_name(month.name()).unwrap(), month);
            assert_eq!(Month::from_code(month.code()), Some(month));
        }
    }

    #[test]
    fn from_code_out_of_coverage() {
        assert_eq!(Month::from_code(0), None);
        assert_eq!(Month::from_code(7), None);
        assert_eq!(Month::from_code(12), None);
    }

    #[test]
    fn month_name_falls_back_to_sentinel() {
        assert_eq!(month_name(1), "january");
        assert_eq!(month_name(6), "june");
        assert_eq!(month_name(7), "all");
        assert_eq!(month_name(0), "all");
    }
}
