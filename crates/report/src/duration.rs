//! Whole-unit decomposition of trip durations.

use std::fmt;

use serde::Serialize;

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// A span of seconds split into whole days, hours, minutes, and seconds.
///
/// Rendered via [`fmt::Display`] as
/// `D day(s) H hour(s) M minute(s) S second(s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    /// Whole days.
    pub days: u64,
    /// Whole hours left after the days are taken out (0..=23).
    pub hours: u64,
    /// Whole minutes left after the hours are taken out (0..=59).
    pub minutes: u64,
    /// Remaining whole seconds (0..=59).
    pub seconds: u64,
}

impl DurationBreakdown {
    /// Decomposes an exact number of seconds.
    ///
    /// The components always recombine exactly:
    /// `days * 86_400 + hours * 3_600 + minutes * 60 + seconds == total`.
    pub fn from_seconds(total: u64) -> Self {
        let days = total / SECS_PER_DAY;
        let rem = total % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        let rem = rem % SECS_PER_HOUR;
        Self {
            days,
            hours,
            minutes: rem / SECS_PER_MINUTE,
            seconds: rem % SECS_PER_MINUTE,
        }
    }

    /// Decomposes a fractional, non-negative number of seconds.
    ///
    /// Each component is truncated toward zero independently, never
    /// rounded: 150.0 seconds reads as 2 minute(s) 30 second(s), and
    /// 59.9 seconds reads as 59 second(s).
    pub fn from_seconds_f64(total: f64) -> Self {
        Self {
            days: (total / 86_400.0).trunc() as u64,
            hours: ((total % 86_400.0) / 3_600.0).trunc() as u64,
            minutes: ((total % 3_600.0) / 60.0).trunc() as u64,
            seconds: (total % 60.0).trunc() as u64,
        }
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} day(s) {} hour(s) {} minute(s) {} second(s)",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
