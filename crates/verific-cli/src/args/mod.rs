// NOTE: Command Organization
//
// `group` works on any JSON export (registrations, check-ins) through a date
// field path; `schedule` reads the typed activity export and adds per-day
// summaries. Both share the reference-time flags in `GroupingArgs`.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "verific")]
#[command(about = "Group event schedules into Today / Tomorrow / per-date buckets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding config.toml [default: $VERIFIC_PATH, then the system data dir]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
