use crate::args::{GroupingArgs, OutputFormat};
use crate::config::Config;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use is_terminal::IsTerminal;
use serde::Serialize;
use verific_engine::BucketOptions;
use verific_types::{parse_instant, parse_tz};

/// Everything a grouping call needs, with flags already merged over config
#[derive(Debug, Clone)]
pub struct GroupingSettings {
    pub tz: Tz,
    pub now: DateTime<Tz>,
    pub options: BucketOptions,
}

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub config: Config,
    pub color: bool,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, config: Config) -> Self {
        Self {
            format,
            config,
            color: format == OutputFormat::Plain && std::io::stdout().is_terminal(),
        }
    }

    /// Merge command-line flags over the config file.
    ///
    /// The wall clock is read here and nowhere else; everything below takes
    /// the reference instant as an argument.
    pub fn grouping(&self, args: &GroupingArgs) -> Result<GroupingSettings> {
        let tz_name = args.tz.as_deref().unwrap_or(&self.config.timezone);
        let tz = parse_tz(tz_name)?;

        let now = match args.now.as_deref() {
            Some(raw) => parse_instant(raw, &tz).context("Invalid --now")?,
            None => Utc::now().with_timezone(&tz),
        };

        let options = BucketOptions {
            locale: args.locale.unwrap_or(self.config.locale),
            year_display: args.year_display.unwrap_or(self.config.year_display),
        };

        tracing::debug!(%now, timezone = tz.name(), ?options, "resolved grouping settings");
        Ok(GroupingSettings { tz, now, options })
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format, self.color).render(view_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verific_types::{Locale, YearDisplay};

    #[test]
    fn test_flags_override_config() {
        let ctx = HandlerContext::new(OutputFormat::Json, Config::default());
        let args = GroupingArgs {
            now: Some("2024-01-15T10:00".to_string()),
            tz: Some("America/Sao_Paulo".to_string()),
            locale: Some(Locale::EnUs),
            year_display: None,
        };

        let settings = ctx.grouping(&args).unwrap();
        assert_eq!(settings.tz.name(), "America/Sao_Paulo");
        assert_eq!(settings.now.to_rfc3339(), "2024-01-15T10:00:00-03:00");
        assert_eq!(settings.options.locale, Locale::EnUs);
        assert_eq!(settings.options.year_display, YearDisplay::Auto);
    }

    #[test]
    fn test_invalid_now_is_reported() {
        let ctx = HandlerContext::new(OutputFormat::Json, Config::default());
        let args = GroupingArgs {
            now: Some("yesterday".to_string()),
            ..GroupingArgs::default()
        };

        let err = ctx.grouping(&args).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Invalid --now"));
    }
}
