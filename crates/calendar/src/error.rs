//! Error types for the bikestats-calendar crate.

/// Error type for all fallible operations in the bikestats-calendar crate.
///
/// This enum covers name lookups that fail because the input is not one of
/// the month or weekday names the trip datasets cover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month name is not one of the six covered months.
    #[error("unknown month: '{name}' (must be january..june)")]
    UnknownMonth {
        /// The unrecognized month name that was provided.
        name: String,
    },

    /// Returned when a weekday name is not one of the seven weekday names.
    #[error("unknown weekday: '{name}' (must be monday..sunday)")]
    UnknownWeekday {
        /// The unrecognized weekday name that was provided.
        name: String,
    },
}
