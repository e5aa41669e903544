//! Row filtering over derived calendar columns.

use tracing::debug;

use bikestats_calendar::{MonthSelector, WeekdaySelector};
use bikestats_io::TripTable;

/// Keep the rows whose start month and weekday pass both selectors.
///
/// Builds a new table from the matching rows in their original order; the
/// input table is not modified. `All` selectors impose no constraint, so
/// applying `All`/`All` copies the table. The result may be empty; that is
/// a valid table and reporting over it is the caller's concern.
pub fn apply(table: &TripTable, month: MonthSelector, weekday: WeekdaySelector) -> TripTable {
    let indices: Vec<usize> = table
        .months()
        .iter()
        .zip(table.weekdays())
        .enumerate()
        .filter(|&(_, (&m, &w))| month.matches(m) && weekday.matches(w))
        .map(|(i, _)| i)
        .collect();

    debug!(
        rows_in = table.len(),
        rows_out = indices.len(),
        month = month.name(),
        weekday = weekday.name(),
        "applied trip filters"
    );

    table.select(&indices)
}
