//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`LoadError::Validation`], plus standalone helpers that
//! check invariants on trip-table columns.

use crate::error::LoadError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`LoadError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(LoadError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), LoadError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(LoadError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that every column length matches the row count given by the
/// start-time column.
///
/// `required` columns must always match; `optional` columns are only
/// checked when the dataset carries them.
pub(crate) fn validate_lengths(
    n_rows: usize,
    required: &[(&str, usize)],
    optional: &[(&str, Option<usize>)],
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for &(name, len) in required {
        if len != n_rows {
            c.push(format!("{name} length {len} != start_times length {n_rows}"));
        }
    }

    for &(name, maybe_len) in optional {
        if let Some(len) = maybe_len
            && len != n_rows
        {
            c.push(format!("{name} length {len} != start_times length {n_rows}"));
        }
    }

    c
}

/// Check that every trip duration is finite and non-negative.
///
/// Records one message per offending index.
pub(crate) fn validate_durations(durations: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &val) in durations.iter().enumerate() {
        if !val.is_finite() {
            c.push(format!("non-finite trip duration at index {i}: {val}"));
        } else if val < 0.0 {
            c.push(format!("negative trip duration at index {i}: {val}"));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ValidationCollector -------------------------------------------------

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_non_empty_is_err_with_correct_count() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        assert!(!c.is_empty());
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            LoadError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("error one"));
                assert!(details.contains("error two"));
                assert!(details.contains("; "));
            }
            other => panic!("expected LoadError::Validation, got {other:?}"),
        }
    }

    // -- validate_lengths ----------------------------------------------------

    #[test]
    fn lengths_all_match_is_empty() {
        let c = validate_lengths(
            4,
            &[("end_times", 4), ("durations", 4)],
            &[("genders", Some(4)), ("birth_years", None)],
        );
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn lengths_absent_optional_columns_are_skipped() {
        let c = validate_lengths(10, &[], &[("genders", None), ("birth_years", None)]);
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn lengths_mismatches_produce_errors() {
        let c = validate_lengths(
            4,
            &[("end_times", 3), ("durations", 4)],
            &[("genders", Some(5))],
        );
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            LoadError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("end_times length 3 != start_times length 4"));
                assert!(details.contains("genders length 5 != start_times length 4"));
            }
            other => panic!("expected LoadError::Validation, got {other:?}"),
        }
    }

    // -- validate_durations --------------------------------------------------

    #[test]
    fn durations_all_valid_is_empty() {
        let data = vec![0.0, 120.5, 86_400.0];
        let c = validate_durations(&data);
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn durations_negative_produce_errors() {
        let data = vec![60.0, -1.0, 30.0];
        let c = validate_durations(&data);
        assert_eq!(c.len(), 1);

        let err = c.finish().unwrap_err();
        match err {
            LoadError::Validation { count, details } => {
                assert_eq!(count, 1);
                assert!(details.contains("negative trip duration at index 1"));
            }
            other => panic!("expected LoadError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn durations_non_finite_produce_errors() {
        let data = vec![60.0, f64::NAN, f64::INFINITY];
        let c = validate_durations(&data);
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            LoadError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("non-finite trip duration at index 1"));
                assert!(details.contains("non-finite trip duration at index 2"));
            }
            other => panic!("expected LoadError::Validation, got {other:?}"),
        }
    }
}
