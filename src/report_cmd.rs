use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use bikestats_filter::{apply, resolve_filters};
use bikestats_io::read_trips;
use bikestats_report::{
    StationPopularityReport, TimeOfTravelReport, TripDurationReport, UserStatsReport,
    station_popularity, time_of_travel, trip_duration, user_stats,
};

use crate::cli::ReportArgs;
use crate::config;
use crate::render;

/// One combined document for `--json` output.
#[derive(Serialize)]
struct CombinedReport {
    city: String,
    month_filter: String,
    weekday_filter: String,
    trips: usize,
    time_of_travel: TimeOfTravelReport,
    stations: StationPopularityReport,
    durations: TripDurationReport,
    users: UserStatsReport,
}

/// Run the one-shot report pipeline.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    // 1. Load project TOML
    let config = config::load(&args.config)?;
    let reader_cfg = config.reader_config(args.data_dir.as_deref());

    // 2. Resolve the filter selection from the CLI names
    let selection = resolve_filters(
        &args.city.trim().to_lowercase(),
        &args.month.trim().to_lowercase(),
        &args.day.trim().to_lowercase(),
    )
    .context("invalid filter selection")?;

    // 3. Load and filter
    let table = read_trips(selection.city, &reader_cfg)
        .with_context(|| format!("failed to load trip data for {}", selection.city.name()))?;
    let filtered = apply(&table, selection.month, selection.weekday);

    if filtered.is_empty() {
        println!("No trips match the chosen filters.");
        return Ok(());
    }

    // 4. Compute all four reports
    let time_of_travel = time_of_travel(&filtered).context("time-of-travel report failed")?;
    let stations = station_popularity(&filtered).context("station report failed")?;
    let durations = trip_duration(&filtered).context("trip-duration report failed")?;
    let users = user_stats(&filtered).context("user-stats report failed")?;

    // 5. Render
    if args.json {
        let combined = CombinedReport {
            city: selection.city.name().to_string(),
            month_filter: selection.month.name().to_string(),
            weekday_filter: selection.weekday.name().to_string(),
            trips: filtered.len(),
            time_of_travel,
            stations,
            durations,
            users,
        };
        let json =
            serde_json::to_string_pretty(&combined).context("failed to serialize report")?;
        println!("{json}");
    } else {
        println!(
            "Reports for {} (month: {}, weekday: {}) over {} trips",
            render::title_case(selection.city.name()),
            selection.month.name(),
            selection.weekday.name(),
            filtered.len()
        );
        render::print_rule();
        println!("The Most Frequent Times of Travel:");
        render::print_time_of_travel(&time_of_travel);
        render::print_rule();
        println!("The Most Popular Stations and Trip:");
        render::print_station_popularity(&stations);
        render::print_rule();
        println!("Trip Duration:");
        render::print_trip_duration(&durations);
        render::print_rule();
        println!("User Stats:");
        render::print_user_stats(&users);
        render::print_rule();
    }

    Ok(())
}
