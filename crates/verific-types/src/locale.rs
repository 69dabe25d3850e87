use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for calendar-date bucket labels.
///
/// The relative labels ("Today", "Tomorrow") are the same in every locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// "20 de janeiro"
    #[default]
    PtBr,
    /// "January 20"
    EnUs,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-br"),
            Locale::EnUs => write!(f, "en-us"),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

/// When a calendar-date label carries the year.
///
/// With `Never`, two days sharing day and month in different years collapse
/// into one bucket whose sort position is its earliest day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearDisplay {
    Never,
    /// Only when the day's year differs from the reference day's year
    #[default]
    Auto,
    Always,
}

impl fmt::Display for YearDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearDisplay::Never => write!(f, "never"),
            YearDisplay::Auto => write!(f, "auto"),
            YearDisplay::Always => write!(f, "always"),
        }
    }
}

impl FromStr for YearDisplay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "never" => Ok(YearDisplay::Never),
            "auto" => Ok(YearDisplay::Auto),
            "always" => Ok(YearDisplay::Always),
            _ => Err(Error::UnknownYearDisplay(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str_accepts_aliases() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_round_trips_through_from_str() {
        for locale in [Locale::PtBr, Locale::EnUs] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_year_display_serde_is_lowercase() {
        let json = serde_json::to_string(&YearDisplay::Always).unwrap();
        assert_eq!(json, "\"always\"");
        let parsed: YearDisplay = serde_json::from_str("\"never\"").unwrap();
        assert_eq!(parsed, YearDisplay::Never);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Locale::default(), Locale::PtBr);
        assert_eq!(YearDisplay::default(), YearDisplay::Auto);
    }
}
