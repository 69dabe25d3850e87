use super::common::GroupingArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Group dated JSON records into Today / Tomorrow / per-date buckets",
        after_long_help = "EXAMPLES:
  verific group registrations.json --date-field createdAt
  verific group checkins.jsonl --date-field scan.at --now 2024-01-15 --format json
  cat export.json | verific group - --tz America/Sao_Paulo"
    )]
    Group {
        #[arg(help = "JSON array or JSON Lines file ('-' reads stdin)")]
        file: PathBuf,

        #[arg(long, help = "Dotted path of the date field [default: from config, startsAt]")]
        date_field: Option<String>,

        #[command(flatten)]
        grouping: GroupingArgs,
    },

    #[command(about = "Show an event's activities grouped by day")]
    Schedule {
        #[arg(help = "Activity export: JSON array or JSON Lines ('-' reads stdin)")]
        file: PathBuf,

        #[command(flatten)]
        grouping: GroupingArgs,
    },

    #[command(about = "Manage the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },
}
