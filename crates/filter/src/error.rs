//! Error types for the bikestats-filter crate.

use bikestats_calendar::CalendarError;

/// Error type for all fallible operations in the bikestats-filter crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// Returned when a city name is not one of the three known cities.
    #[error("unknown city: '{name}' (must be chicago, new york city, or washington)")]
    UnknownCity {
        /// The unrecognized city name that was provided.
        name: String,
    },

    /// Returned when a month or weekday name does not resolve.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_city() {
        let err = SelectionError::UnknownCity {
            name: "gotham".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown city: 'gotham' (must be chicago, new york city, or washington)"
        );
    }

    #[test]
    fn calendar_errors_pass_through_unchanged() {
        let inner = CalendarError::UnknownMonth {
            name: "octember".to_string(),
        };
        let err = SelectionError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, SelectionError::Calendar(_)));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SelectionError>();
    }
}
