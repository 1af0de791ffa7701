//! The factory side of gatelog: the two process-wide switches and the function that
//! manufactures independent loggers.
//!
//! The switches are read at different times. Strict mode is copied into each logger
//! when it is created, so flipping it later leaves existing loggers alone. Assert mode
//! is shared through an [`AssertFlag`] handle and read on every ERROR emission, so
//! flipping it affects every logger immediately.

use crate::config::Config;
use crate::internal;
use crate::logger::Logger;
use crate::sink::{ConsoleSink, Sink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Environment variable that puts a fresh registry into strict mode (`1`, `true`, `yes`, `on`).
pub const STRICT_ENV: &str = "GATELOG_STRICT";

/// Live view of the assert switch; clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct AssertFlag(Arc<AtomicBool>);

impl AssertFlag {
    /// Each registry gets its own switch; loggers share it by cloning the handle.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Read on every ERROR emission, so the current value always applies.
    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Visible to every logger holding a clone of this handle.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }
}

/// Owns the switches and the config new loggers start from.
#[derive(Debug)]
pub struct Registry {
    strict: AtomicBool,
    assert: AssertFlag,
    config: Config,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Strict mode comes from the environment at construction; assert mode starts off.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// An explicit `general.strict` wins over the environment.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let strict = config.general.strict.unwrap_or_else(strict_from_env);
        let assert = config.general.assert;
        internal::debug(&format!("Registry created: strict={strict}, assert={assert}"));
        Self {
            strict: AtomicBool::new(strict),
            assert: AssertFlag::new(assert),
            config,
        }
    }

    /// A logger writing to stdout.
    #[must_use]
    pub fn create_logger(&self, name: impl Into<String>) -> Logger {
        self.create_logger_with_sink(name, ConsoleSink::new())
    }

    /// Names need not be unique; every call yields a fully independent logger.
    #[must_use]
    pub fn create_logger_with_sink(
        &self,
        name: impl Into<String>,
        sink: impl Sink + 'static,
    ) -> Logger {
        let name = name.into();
        let threshold = self.config.threshold_for(&name);
        let mut logger = Logger::new(
            name,
            Box::new(sink),
            self.is_strict(),
            self.assert.clone(),
        );
        logger.set_threshold(threshold);
        logger
    }

    /// Affects only loggers created after this call.
    pub fn set_strict(&self, enabled: bool) {
        self.strict.store(enabled, Ordering::Relaxed);
    }

    /// The value the next created logger will capture.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict.load(Ordering::Relaxed)
    }

    /// Affects every logger from this registry, including existing ones.
    pub fn set_assert(&self, enabled: bool) {
        self.assert.set(enabled);
    }

    /// Current assert switch, as existing loggers see it.
    #[must_use]
    pub fn is_assert(&self) -> bool {
        self.assert.get()
    }

    /// Handle for toggling assert mode from code that doesn't hold the registry.
    #[must_use]
    pub fn assert_flag(&self) -> AssertFlag {
        self.assert.clone()
    }

    /// The config new loggers take their starting threshold from.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

fn strict_from_env() -> bool {
    std::env::var(STRICT_ENV).is_ok_and(|value| {
        matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created from the environment on first use
/// unless [`install`] ran earlier.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Makes `registry` the process-wide one, e.g. after `Config::load`.
///
/// # Errors
/// Gives the registry back if the global one was already set or used.
pub fn install(registry: Registry) -> Result<(), Registry> {
    GLOBAL.set(registry)
}
