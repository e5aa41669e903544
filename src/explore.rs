use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info_span;

use bikestats_calendar::{MonthSelector, WeekdaySelector};
use bikestats_filter::{FilterSelection, apply};
use bikestats_io::{City, ReaderConfig, TripTable, read_trips};
use bikestats_report::{station_popularity, time_of_travel, trip_duration, user_stats};

use crate::cli::ExploreArgs;
use crate::config;
use crate::render;

/// Run the interactive exploration session.
pub fn run(args: ExploreArgs) -> Result<()> {
    let _cmd = info_span!("explore").entered();

    // 1. Load project TOML
    let config = config::load(&args.config)?;
    let reader_cfg = config.reader_config(args.data_dir.as_deref());

    // 2. Prompt, report, restart until the user leaves
    let stdin = io::stdin();
    let mut input = stdin.lock();
    explore_loop(&mut input, &reader_cfg)
}

fn explore_loop(input: &mut impl BufRead, reader_cfg: &ReaderConfig) -> Result<()> {
    println!();
    println!("Hello! Let's explore some US bikeshare data!");
    println!();

    loop {
        // 1. Gather a valid (city, month, weekday) selection
        let Some(selection) = prompt_filters(input)? else {
            return Ok(());
        };
        render::print_rule();

        // 2. Load the city's records and apply the filters
        match read_trips(selection.city, reader_cfg) {
            Ok(table) => {
                let filtered = apply(&table, selection.month, selection.weekday);
                if filtered.is_empty() {
                    println!();
                    println!("No trips match the chosen filters.");
                } else {
                    print_reports(&filtered);
                    page_raw_rows(input, &filtered)?;
                }
            }
            Err(e) => {
                println!();
                println!("Could not load trip data: {e}");
            }
        }

        // 3. Restart?
        let Some(answer) =
            prompt_line(input, "\nWould you like to restart? Enter yes or no.\n")?
        else {
            return Ok(());
        };
        if answer != "yes" {
            return Ok(());
        }
    }
}

/// Prompts for city, month, and weekday until each answer validates.
///
/// Invalid answers print a short guidance line and re-prompt; they never
/// end the session. Returns `None` once stdin reaches end of input.
fn prompt_filters(input: &mut impl BufRead) -> Result<Option<FilterSelection>> {
    let city = loop {
        let Some(answer) = prompt_line(
            input,
            "Which city would you like to look at: chicago, new york city or washington?  ",
        )?
        else {
            return Ok(None);
        };
        match City::from_name(&answer) {
            Some(city) => break city,
            None => println!("That city is not in our list. Please enter a valid city."),
        }
    };

    let month = loop {
        let Some(answer) = prompt_line(
            input,
            "Which month (january through june) would you like to look at: all or a specific month?  ",
        )?
        else {
            return Ok(None);
        };
        match MonthSelector::parse(&answer) {
            Ok(selector) => break selector,
            Err(_) => println!("That month is not in our list. Please enter a valid month or all."),
        }
    };

    let weekday = loop {
        let Some(answer) = prompt_line(
            input,
            "Which day would you like to look at: all or a specific day?  ",
        )?
        else {
            return Ok(None);
        };
        match WeekdaySelector::parse(&answer) {
            Ok(selector) => break selector,
            Err(_) => println!("That day is not in our list. Please enter a valid day or all."),
        }
    };

    println!();
    println!(
        "Looking at {}, month: {}, weekday: {}",
        city.name(),
        month.name(),
        weekday.name()
    );
    Ok(Some(FilterSelection {
        city,
        month,
        weekday,
    }))
}

/// Prints `prompt` without a newline, then reads one answer: the next
/// input line, trimmed and lowercased.
///
/// Returns `None` once the input reaches end of file.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if n == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Prints the four reports in order, each with its own timing line.
fn print_reports(table: &TripTable) {
    print_timed("Calculating The Most Frequent Times of Travel...", || {
        match time_of_travel(table) {
            Ok(report) => render::print_time_of_travel(&report),
            Err(e) => println!("  {e}"),
        }
    });
    print_timed("Calculating The Most Popular Stations and Trip...", || {
        match station_popularity(table) {
            Ok(report) => render::print_station_popularity(&report),
            Err(e) => println!("  {e}"),
        }
    });
    print_timed("Calculating Trip Duration...", || {
        match trip_duration(table) {
            Ok(report) => render::print_trip_duration(&report),
            Err(e) => println!("  {e}"),
        }
    });
    print_timed("Calculating User Stats...", || match user_stats(table) {
        Ok(report) => render::print_user_stats(&report),
        Err(e) => println!("  {e}"),
    });
}

fn print_timed(heading: &str, body: impl FnOnce()) {
    println!();
    println!("{heading}");
    println!();
    let started = Instant::now();
    body();
    println!();
    println!("This took {:.4} seconds.", started.elapsed().as_secs_f64());
    render::print_rule();
}

/// Offers raw trips five rows at a time until the user declines or the
/// rows run out.
fn page_raw_rows(input: &mut impl BufRead, table: &TripTable) -> Result<()> {
    let Some(answer) = prompt_line(
        input,
        "\nWould you like to see 5 lines of raw trip data? Enter yes or no.\n",
    )?
    else {
        return Ok(());
    };
    if answer != "yes" {
        return Ok(());
    }

    let mut offset = 0;
    loop {
        render::print_rows(table, offset);
        offset += render::PAGE_SIZE;
        if offset >= table.len() {
            println!();
            println!("No more rows to show.");
            return Ok(());
        }

        let Some(answer) = prompt_line(
            input,
            "\nWould you like to see 5 more lines? Enter yes or no.\n",
        )?
        else {
            return Ok(());
        };
        if answer != "yes" {
            return Ok(());
        }
    }
}
