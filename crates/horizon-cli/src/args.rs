use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use horizon_core::{dates, display::DEFAULT_CHART_WIDTH};
use jiff::civil::Date;

/// Quarter and year timeline for dated tasks
///
/// Horizon lays out tasks from a JSON snapshot file on a quarter or year
/// grid, packing overlapping tasks into separate rows.
#[derive(Parser)]
#[command(version, about, name = "hz")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/horizon/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this date (DD.MM.YYYY) as today instead of the system clock
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the timeline for a quarter or a year
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Validate a task snapshot file without showing a timeline
    #[command(alias = "c")]
    Check(CheckArgs),
}

/// Show the timeline
///
/// Starts at the quarter containing today unless a year or quarter is given,
/// then steps backwards or forwards the requested number of times.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// JSON file with an array of tasks (name, start_date, end_date, color)
    #[arg(short, long)]
    pub tasks: Option<PathBuf>,

    /// Year to show
    #[arg(short, long)]
    pub year: Option<i16>,

    /// Quarter to show (1-4)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub quarter: Option<u8>,

    /// Show the whole year instead of a single quarter
    #[arg(long)]
    pub full_year: bool,

    /// Step back this many quarters (or years with --full-year)
    #[arg(long, default_value_t = 0)]
    pub back: u32,

    /// Step forward this many quarters (or years with --full-year)
    #[arg(long, default_value_t = 0)]
    pub forward: u32,

    /// Width of the chart grid in characters
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: usize,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            tasks: None,
            year: None,
            quarter: None,
            full_year: false,
            back: 0,
            forward: 0,
            width: DEFAULT_CHART_WIDTH,
        }
    }
}

/// Validate every entry of a task snapshot file
#[derive(ClapArgs)]
pub struct CheckArgs {
    /// JSON file with an array of tasks
    #[arg(short, long)]
    pub tasks: PathBuf,
}

fn parse_date_arg(input: &str) -> Result<Date, String> {
    dates::parse_date(input).map_err(|e| e.to_string())
}
