use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ULS chronometry: one continuous second count since 0001-01-01 UTC.
#[derive(Parser)]
#[command(
    name = "uls",
    version,
    about = "Universal Linear Second coordinates and calendar renderings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Sample the clock once and print every reading.
    Now(NowArgs),
    /// Render one coordinate in every calendar.
    Render(RenderArgs),
    /// Print the layered grid of one civil month.
    Month(MonthArgs),
    /// Tropical and sidereal sign for a birth date.
    Zodiac(ZodiacArgs),
    /// Timeline grid around a coordinate.
    Grid(GridArgs),
    /// List the forensic anchor table.
    Anchors(AnchorsArgs),
    /// Project a prophetic year count onto the civil calendar.
    Prophecy(ProphecyArgs),
    /// Assemble a forensic report request, optionally replaying a saved response.
    Report(ReportArgs),
}

/// Where a command reads its coordinate from.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct InstantArgs {
    /// Raw ULS seconds.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "date")]
    pub uls: Option<f64>,

    /// Civil date (YYYY-MM-DD), read as UTC midnight.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Enabled theory (repeatable); replaces the configured set.
    #[arg(short, long = "theory")]
    pub theories: Vec<String>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub at: InstantArgs,

    /// Only this calendar (civil, julian, mayan, prophetic, nibiru).
    #[arg(short = 'k', long)]
    pub calendar: Option<String>,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Civil year.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Month, 1-12.
    pub month: u32,

    /// Hide reform gaps even if the configuration shows them.
    #[arg(long)]
    pub no_gaps: bool,
}

/// Arguments for the `zodiac` subcommand.
#[derive(clap::Args)]
pub struct ZodiacArgs {
    /// Birth date (YYYY-MM-DD).
    pub date: String,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub at: InstantArgs,

    /// Scale id (24h, month, year, decade, century, millennium).
    #[arg(short, long)]
    pub scale: Option<String>,

    /// Step the view by whole cells (negative goes back).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub step: i64,
}

/// Arguments for the `anchors` subcommand.
#[derive(clap::Args)]
pub struct AnchorsArgs {
    /// Show a single anchor with its description.
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the `prophecy` subcommand.
#[derive(clap::Args)]
pub struct ProphecyArgs {
    /// Year the prophecy was issued.
    #[arg(allow_hyphen_values = true)]
    pub origin: i64,

    /// Duration in prophetic (360-day) years.
    pub duration: i64,

    /// Reference year; defaults to the current civil year.
    #[arg(long)]
    pub current_year: Option<i64>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Free-text audit query.
    pub query: String,

    #[command(flatten)]
    pub at: InstantArgs,

    /// Saved backend response (JSON) to decode instead of printing the prompt.
    #[arg(short, long)]
    pub response: Option<PathBuf>,

    /// Override the configured request timeout (e.g. "10s").
    #[arg(long)]
    pub timeout: Option<String>,
}
