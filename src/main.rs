mod cli;
mod config;
mod explore;
mod logging;
mod render;
mod report_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Explore(args) => explore::run(args),
        Command::Report(args) => report_cmd::run(args),
    }
}
