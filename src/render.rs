use bikestats_io::TripTable;
use bikestats_report::{
    ColumnReport, StationPopularityReport, TimeOfTravelReport, TripDurationReport,
    UserStatsReport, ValueCount,
};

/// Number of raw rows shown per page.
pub const PAGE_SIZE: usize = 5;

const RULE_WIDTH: usize = 40;

/// Prints the separator rule between report sections.
pub fn print_rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// Uppercases the first letter of each whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_time_of_travel(report: &TimeOfTravelReport) {
    println!("  The most common month is: {}", title_case(&report.month));
    println!(
        "  The most common weekday is: {}",
        title_case(&report.weekday)
    );
    println!("  The most common start hour is: {}:00", report.hour);
}

pub fn print_station_popularity(report: &StationPopularityReport) {
    println!(
        "  The most common start station is: {}",
        report.start_station
    );
    println!("  The most common end station is: {}", report.end_station);
    println!(
        "  The most common trip from start to end is: {}",
        report.trip
    );
}

pub fn print_trip_duration(report: &TripDurationReport) {
    println!(
        "  The total travel time of all (filtered) trips is: {}",
        report.total
    );
    println!(
        "  The mean travel time of all (filtered) trips is: {}",
        report.mean
    );
}

pub fn print_user_stats(report: &UserStatsReport) {
    println!("  User types and their counts:");
    print_counts(&report.user_types);

    match &report.genders {
        ColumnReport::Available(counts) => {
            println!("  Genders and their counts:");
            print_counts(counts);
        }
        ColumnReport::Unavailable => {
            println!("  Sorry, we do not have gender information for the chosen city.");
        }
    }

    match &report.birth_years {
        ColumnReport::Available(years) => {
            println!("  Earliest year of birth: {}", years.earliest);
            println!("  Most recent year of birth: {}", years.most_recent);
            println!("  Most common year of birth: {}", years.most_common);
        }
        ColumnReport::Unavailable => {
            println!("  Sorry, we do not have birth year information for the chosen city.");
        }
    }
}

fn print_counts(counts: &[ValueCount]) {
    for entry in counts {
        println!("    {}: {}", entry.value, entry.count);
    }
}

/// Prints rows `offset..offset + PAGE_SIZE`, clamped to the table length.
///
/// Gender and birth-year fields appear only when the table carries the
/// respective column; each is checked on its own.
pub fn print_rows(table: &TripTable, offset: usize) {
    let end = (offset + PAGE_SIZE).min(table.len());
    for i in offset..end {
        let mut line = format!(
            "{} | {} | {} | {} | {}",
            table.start_times()[i],
            table.end_times()[i],
            table.start_stations()[i],
            table.end_stations()[i],
            table.user_types()[i].as_deref().unwrap_or("-"),
        );
        if let Some(genders) = table.genders() {
            line.push_str(" | ");
            line.push_str(genders[i].as_deref().unwrap_or("-"));
        }
        if let Some(years) = table.birth_years() {
            match years[i] {
                Some(year) => line.push_str(&format!(" | {year}")),
                None => line.push_str(" | -"),
            }
        }
        println!("  {line}");
    }
}
