use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use verific_types::{Locale, YearDisplay};

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_DATE_FIELD: &str = "startsAt";
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VERIFIC_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.verific (fallback for systems without a data directory)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VERIFIC_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("verific"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".verific"));
    }

    bail!("Could not determine data directory: no HOME directory or system data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Settings read from `<data-dir>/config.toml`; command-line flags win over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone deciding where calendar days start
    pub timezone: String,
    pub locale: Locale,
    pub year_display: YearDisplay,
    /// Dotted path of the date field used by `group`
    pub date_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: Locale::default(),
            year_display: YearDisplay::default(),
            date_field: DEFAULT_DATE_FIELD.to_string(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        verific_types::parse_tz(&config.timezone)
            .with_context(|| format!("Invalid timezone in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
