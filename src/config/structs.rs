//! Configuration struct definitions.

use serde::Deserialize;

/// Settings shared by every logger a registry creates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial threshold for new loggers.
    pub threshold: String,
    /// Strict mode; unset means "take it from the environment".
    pub strict: Option<bool>,
    /// Assert mode: ERROR messages become failures.
    pub assert: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threshold: "warn".to_string(),
            strict: None,
            assert: false,
        }
    }
}

/// Per-name overrides, keyed by logger name under `[loggers.<name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Initial threshold for loggers with this name.
    pub threshold: Option<String>,
}
