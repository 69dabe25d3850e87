use clap::Args;
use verific_types::{Locale, YearDisplay};

/// Flags shared by every grouping command. Unset flags fall back to config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct GroupingArgs {
    #[arg(
        long,
        help = "Reference instant (RFC 3339, YYYY-MM-DD or YYYY-MM-DDTHH:MM) [default: current time]"
    )]
    pub now: Option<String>,

    #[arg(long, help = "IANA timezone that decides calendar days (e.g. America/Sao_Paulo)")]
    pub tz: Option<String>,

    #[arg(long, help = "Label language: pt-br or en-us")]
    pub locale: Option<Locale>,

    #[arg(long, help = "Year in date labels: never, auto or always")]
    pub year_display: Option<YearDisplay>,
}
