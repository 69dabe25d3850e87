use std::fmt;

/// Result type for verific-types and verific-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the library crates
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Input was not valid JSON / JSON Lines
    Json(serde_json::Error),

    /// Date projection failed for the item at `index`; the whole call is rejected
    InvalidDate { index: usize, reason: String },

    /// A value could not be read as a point in time
    InvalidInstant(String),

    /// Unknown IANA timezone name
    UnknownTimezone(String),

    /// Unknown locale identifier
    UnknownLocale(String),

    /// Unknown year display policy
    UnknownYearDisplay(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidDate { index, reason } => {
                write!(f, "Invalid date for item {}: {}", index, reason)
            }
            Error::InvalidInstant(msg) => write!(f, "Invalid instant: {}", msg),
            Error::UnknownTimezone(name) => write!(f, "Unknown timezone: {}", name),
            Error::UnknownLocale(name) => {
                write!(f, "Unknown locale: {} (expected pt-br or en-us)", name)
            }
            Error::UnknownYearDisplay(name) => write!(
                f,
                "Unknown year display: {} (expected never, auto or always)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidDate { .. }
            | Error::InvalidInstant(_)
            | Error::UnknownTimezone(_)
            | Error::UnknownLocale(_)
            | Error::UnknownYearDisplay(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
