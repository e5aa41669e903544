//! # bikestats-filter
//!
//! Resolve user-typed `(city, month, weekday)` strings into validated
//! selections and apply them to loaded trip tables. Filtering never mutates
//! the source table; it builds a new one from the matching rows.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bikestats_filter::{apply, resolve_filters};
//!
//! let selection = resolve_filters("chicago", "march", "all")?;
//! let table = bikestats_io::read_trips(selection.city, &config)?;
//! let filtered = apply(&table, selection.month, selection.weekday);
//! ```

mod apply;
mod error;
mod selection;

pub use apply::apply;
pub use error::SelectionError;
pub use selection::{FilterSelection, resolve_filters};
