use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bikestats US bikeshare trip explorer.
#[derive(Parser)]
#[command(
    name = "bikestats",
    version,
    about = "Explore US bikeshare trip data for Chicago, New York City, and Washington"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Interactively explore a city's trip data.
    Explore(ExploreArgs),
    /// Print one filtered set of reports without prompting.
    Report(ReportArgs),
}

/// Arguments for the `explore` subcommand.
#[derive(clap::Args)]
pub struct ExploreArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "bikestats.toml")]
    pub config: PathBuf,

    /// Override the data directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "bikestats.toml")]
    pub config: PathBuf,

    /// Override the data directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// City to report on: chicago, new york city, or washington.
    #[arg(long)]
    pub city: String,

    /// Month filter: all, or january through june.
    #[arg(long, default_value = "all")]
    pub month: String,

    /// Weekday filter: all, or monday through sunday.
    #[arg(long, default_value = "all")]
    pub day: String,

    /// Emit one combined JSON object instead of text reports.
    #[arg(long)]
    pub json: bool,
}
