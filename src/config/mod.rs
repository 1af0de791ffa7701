//! TOML configuration for the registry: the initial threshold, the two process-wide
//! flags, and per-name threshold overrides.
//!
//! Separated from struct definitions so that the loading logic (file I/O, path
//! resolution, fallbacks) stays independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, LoggerConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working registry, so every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold and flags applied to every logger.
    pub general: GeneralConfig,
    /// Named loggers that need a different starting threshold than the rest.
    pub loggers: HashMap<String, LoggerConfig>,
}

impl Config {
    /// Loads `<config dir>/gatelog/config.toml`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::init();
        internal::debug("Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info(&format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path; `~` is expanded first.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses config text directly, for embedders that keep it elsewhere.
    ///
    /// # Errors
    /// Returns error on TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG-style path, e.g. `~/.config/gatelog/config.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gatelog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown names fall back to `Warn` so a typo never silences or floods output.
    #[must_use]
    pub fn parse_threshold(&self) -> Level {
        parse_or_warn(&self.general.threshold)
    }

    /// Starting threshold for a logger called `name`, honoring `[loggers.<name>]`.
    #[must_use]
    pub fn threshold_for(&self, name: &str) -> Level {
        self.loggers
            .get(name)
            .and_then(|logger| logger.threshold.as_deref())
            .map_or_else(|| self.parse_threshold(), parse_or_warn)
    }
}

fn parse_or_warn(value: &str) -> Level {
    value.parse().unwrap_or_else(|e| {
        internal::warn(&format!("{e}, using WARN"));
        Level::Warn
    })
}
