//! # bikestats-io
//!
//! Read city bikeshare trip exports from CSV into column-oriented
//! [`TripTable`]s with pre-derived calendar columns, ready for filtering
//! and reporting over plain slices.

mod city;
mod csv_read;
mod error;
mod reader;
mod trips;
mod validate;

pub use city::City;
pub use error::LoadError;
pub use reader::{ReaderConfig, read_trips};
pub use trips::{OptionalColumn, TripTable};
