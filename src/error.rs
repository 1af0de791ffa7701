//! Unified error type for all gatelog operations.

/// Error type for gatelog operations.
#[derive(Debug)]
pub enum Error {
    /// Assert mode turned an ERROR-level message into a failure; carries the formatted line.
    Assertion(String),
    /// I/O error from a sink or config file.
    Io(std::io::Error),
    /// Failure reported by a user-supplied sink.
    Sink(String),
    /// Level name or rank outside the five known levels.
    InvalidLevel(String),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assertion(line) => write!(f, "assertion failed: {line}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Sink(s) => write!(f, "sink error: {s}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
