use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Miti Bikram Sambat date utilities.
#[derive(Parser)]
#[command(name = "miti", version, about = "Bikram Sambat date utilities")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (miti.toml is picked up when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's date in the Bikram Sambat calendar.
    Today(TodayArgs),
    /// Convert a Gregorian date to its Bikram Sambat equivalent.
    Convert(ConvertArgs),
    /// Lay out a Bikram Sambat month as a weekday grid.
    Grid(GridArgs),
    /// Describe how long ago a timestamp was.
    Ago(AgoArgs),
    /// Render an integer with Nepali digit grouping.
    Number(NumberArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date to convert, as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// BS year of the month to lay out, together with --month (defaults to
    /// the current month).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// BS month number, 1..=12, together with --year.
    #[arg(short, long)]
    pub month: Option<u8>,

    /// Months to step from the selected view; negative steps backwards.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `ago` subcommand.
#[derive(clap::Args)]
pub struct AgoArgs {
    /// Past timestamp, RFC 3339 (e.g. 2024-01-01T09:30:00Z).
    #[arg(short, long)]
    pub since: String,

    /// Reference timestamp, RFC 3339 (defaults to the current time).
    #[arg(short, long)]
    pub now: Option<String>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `number` subcommand.
#[derive(clap::Args)]
pub struct NumberArgs {
    /// Integer to render; Devanagari digits and separators are accepted.
    pub value: String,

    /// Skip digit grouping.
    #[arg(long)]
    pub plain: bool,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}
