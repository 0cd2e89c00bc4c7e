mod cli;
mod commands;
mod config;
mod logging;
mod report_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::UlsConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = UlsConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Now(args) => commands::run_now(args, &config),
        Command::Render(args) => commands::run_render(args, &config),
        Command::Month(args) => commands::run_month(args, &config),
        Command::Zodiac(args) => commands::run_zodiac(args),
        Command::Grid(args) => commands::run_grid(args, &config),
        Command::Anchors(args) => commands::run_anchors(args),
        Command::Prophecy(args) => commands::run_prophecy(args),
        Command::Report(args) => report_cmd::run(args, &config),
    }
}
