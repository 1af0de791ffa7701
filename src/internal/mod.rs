//! gatelog's own diagnostics (config fallbacks, load paths), reported through a
//! regular [`Logger`] so they share the `name [LEVEL]: message` format.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! entry points race to call `init`.

use crate::level::Level;
use crate::logger::Logger;
use crate::registry::AssertFlag;
use crate::sink::WriterSink;
use std::io;
use std::sync::OnceLock;

/// Environment variable holding the diagnostic threshold (`debug`, `info`, ...).
pub const LOG_ENV: &str = "GATELOG_LOG";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(build_internal_logger);
    if !was_init {
        debug("Internal logger ready");
    }
}

fn build_internal_logger() -> Logger {
    let threshold = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(Level::Warn);

    // Diagnostics go to stderr and must never escalate, whatever the caller's assert mode.
    let mut logger = Logger::new(
        "gatelog",
        Box::new(WriterSink::new(io::stderr())),
        false,
        AssertFlag::new(false),
    );
    logger.set_threshold(threshold);
    logger
}

/// Pre-init calls silently vanish rather than failing; safe during early startup.
fn log(level: Level, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        let _ = logger.print(level, msg);
    }
}

/// Startup and config-resolution detail, hidden at the default threshold.
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Milestones such as which config file was loaded.
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Non-fatal anomalies such as an unknown threshold name in config.
pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}
