//! # bikestats-calendar
//!
//! Month and weekday codec for bikeshare trip data.
//!
//! The source datasets cover January through June only, so [`Month`] stops
//! at June on purpose. [`Weekday`] covers the full week with Monday-first
//! numbering (Monday = 0, ..., Sunday = 6).
//!
//! ## Quick Start
//!
//! ```ignore
//! use bikestats_calendar::{Month, MonthSelector, month_name};
//!
//! // Name -> code
//! let month = Month::from_name("march").unwrap();
//! assert_eq!(month.code(), 3);
//!
//! // Filter selectors accept the "all" sentinel
//! let selector = MonthSelector::parse("all").unwrap();
//! assert!(selector.matches(month.code()));
//!
//! // Code -> name, with a sentinel fallback outside the covered range
//! assert_eq!(month_name(3), "march");
//! assert_eq!(month_name(7), "all");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Six-month codec and display-name lookup |
//! | `weekday` | Monday-first weekday codec |
//! | `selector` | `all`-or-one filter selectors |
//! | `error` | Error types |

mod error;
mod month;
mod selector;
mod weekday;

pub use error::CalendarError;
pub use month::{Month, month_name};
pub use selector::{ALL_NAME, MonthSelector, WeekdaySelector};
pub use weekday::{Weekday, weekday_name};
