//! `gatelog` - Per-instance loggers with a threshold gate and explicit call tracing.
//!
//! A [`Registry`] manufactures independent [`Logger`]s. Each one has a name, a
//! replaceable [`Sink`], and a mutable threshold (initially `WARN`). A message is
//! delivered as `name [LEVEL]: message` only when its level is at or above the
//! threshold.
//!
//! # Example
//!
//! ```
//! use gatelog::{Level, MemorySink, Registry};
//!
//! let registry = Registry::new();
//! let sink = MemorySink::new();
//! let mut logger = registry.create_logger_with_sink("svc", sink.clone());
//!
//! logger.info("filtered").unwrap();
//! logger.set_threshold(Level::Debug);
//! logger.info("ready").unwrap();
//!
//! assert_eq!(sink.lines(), vec!["svc [INFO]: ready"]);
//! ```
//!
//! # Process-wide switches
//!
//! - Strict mode disables call tracing for loggers created while it is on.
//!   It starts from `GATELOG_STRICT` or `general.strict` in the config file.
//! - Assert mode turns every emitted ERROR message into [`Error::Assertion`] instead
//!   of writing it. Loggers read it live.

pub mod config;
mod error;
pub mod internal;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod trace;

pub use config::Config;
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, format_line};
pub use registry::{AssertFlag, Registry};
pub use sink::{ConsoleSink, MemorySink, Sink, WriterSink};
pub use trace::TraceArg;

/// Creates a stdout logger from the process-wide registry.
#[must_use]
pub fn create_logger(name: impl Into<String>) -> Logger {
    registry::global().create_logger(name)
}

/// Creates a logger with its own sink from the process-wide registry.
#[must_use]
pub fn create_logger_with_sink(name: impl Into<String>, sink: impl Sink + 'static) -> Logger {
    registry::global().create_logger_with_sink(name, sink)
}
