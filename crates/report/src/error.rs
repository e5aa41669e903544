//! Error types for the bikestats-report crate.

/// Error type for all fallible operations in the bikestats-report crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    /// Returned when a report is requested over a table with no trips.
    #[error("dataset contains no trips")]
    EmptyTable,

    /// Returned when a column is present but holds no usable values.
    #[error("column '{column}' has no usable values")]
    EmptyColumn {
        /// Name of the exhausted column.
        column: &'static str,
    },
}
