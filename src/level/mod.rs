//! Severity levels that tag messages and gate which of them reach the sink.

use std::fmt;
use std::str::FromStr;

/// Returned by [`to_string`] for any rank outside the five known levels.
pub const INVALID: &str = "INVALID";

/// Derives `Ord` so the gate is a plain `threshold <= level` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Step-by-step detail, off unless a logger is lowered to it.
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Suspicious conditions; the initial threshold of every logger.
    #[default]
    Warn = 2,
    /// Failures. Escalated to [`crate::Error::Assertion`] in assert mode.
    Error = 3,
    /// Threshold-only value that silences a logger.
    None = 4,
}

impl Level {
    /// Upper-case because it is spliced verbatim into `name [LEVEL]: message`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::None => "NONE",
        }
    }

    /// Numeric rank, `Debug = 0` through `None = 4`.
    #[must_use]
    pub const fn rank(self) -> i64 {
        self as i64
    }

    /// Display names never fail: unknown ranks render as [`INVALID`].
    #[must_use]
    pub const fn name_of(rank: i64) -> &'static str {
        match Self::from_rank(rank) {
            Some(level) => level.as_str(),
            None => INVALID,
        }
    }

    /// Checked inverse of [`Level::rank`]; the threshold path relies on it to reject bad ranks.
    #[must_use]
    pub const fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::None),
            _ => None,
        }
    }

    /// Rank order, for callers that list or iterate the vocabulary.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::None]
    }
}

/// Free-function form of [`Level::name_of`].
#[must_use]
pub const fn to_string(rank: i64) -> &'static str {
    Level::name_of(rank)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown level" apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "none" | "off" => Ok(Self::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Thresholds outside the five ranks are rejected rather than compared literally.
impl TryFrom<i64> for Level {
    type Error = crate::Error;

    fn try_from(rank: i64) -> Result<Self, crate::Error> {
        Self::from_rank(rank).ok_or_else(|| crate::Error::InvalidLevel(rank.to_string()))
    }
}
