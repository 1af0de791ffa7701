//! One independent logging channel: a name, a replaceable sink, and a mutable threshold.
//!
//! Every emission path funnels through [`Logger::print`], so the gate, the line format
//! and the assert escalation live in exactly one place.

use crate::level::Level;
use crate::registry::AssertFlag;
use crate::sink::Sink;
use crate::trace::TraceArg;
use std::fmt;

/// Renders the single line format every logger emits: `name [LEVEL]: message`.
#[must_use]
pub fn format_line(name: &str, level: Level, msg: &str) -> String {
    format!("{name} [{level}]: {msg}")
}

/// Created through [`crate::Registry`]; holds no resources beyond the sink it calls.
pub struct Logger {
    name: String,
    threshold: Level,
    sink: Box<dyn Sink>,
    /// Captured from the registry at construction and never re-read.
    strict: bool,
    /// Shared with the registry and read on every ERROR emission.
    assert: AssertFlag,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("strict", &self.strict)
            .field("assert", &self.assert.get())
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub(crate) fn new(
        name: impl Into<String>,
        sink: Box<dyn Sink>,
        strict: bool,
        assert: AssertFlag,
    ) -> Self {
        Self {
            name: name.into(),
            threshold: Level::Warn,
            sink,
            strict,
            assert,
        }
    }

    /// Fixed at construction and spliced into every line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum level; callers and tests check what the gate will do.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    /// Takes effect for the next call; `Level::None` silences the logger.
    pub const fn set_threshold(&mut self, level: Level) {
        self.threshold = level;
    }

    /// The previous sink receives nothing after this returns.
    pub fn set_sink(&mut self, sink: impl Sink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Whether the logger was created while strict mode was on.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// The gate: `threshold <= level`. `None` tags no message, so it never passes.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::None && self.threshold <= level
    }

    /// Core emission path. Below the threshold nothing happens at all.
    ///
    /// # Errors
    /// [`crate::Error::Assertion`] carrying the formatted line when assert mode is on
    /// and `level` is `Error` (the sink is not called); otherwise whatever the sink returns.
    pub fn print(&self, level: Level, msg: &str) -> Result<(), crate::Error> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let line = format_line(&self.name, level, msg);
        if level == Level::Error && self.assert.get() {
            return Err(crate::Error::Assertion(line));
        }

        self.sink.write(&line)
    }

    /// Prints only when `condition` holds.
    ///
    /// # Errors
    /// Same as [`Logger::print`].
    pub fn when(&self, condition: bool, level: Level, msg: &str) -> Result<(), crate::Error> {
        if condition {
            self.print(level, msg)
        } else {
            Ok(())
        }
    }

    /// Prints only when `condition` does not hold.
    ///
    /// # Errors
    /// Same as [`Logger::print`].
    pub fn unless(&self, condition: bool, level: Level, msg: &str) -> Result<(), crate::Error> {
        self.when(!condition, level, msg)
    }

    /// # Errors
    /// Fails in assert mode, or when the sink fails.
    pub fn error(&self, msg: &str) -> Result<(), crate::Error> {
        self.print(Level::Error, msg)
    }

    /// # Errors
    /// Same as [`Logger::print`].
    pub fn warn(&self, msg: &str) -> Result<(), crate::Error> {
        self.print(Level::Warn, msg)
    }

    /// # Errors
    /// Same as [`Logger::print`].
    pub fn info(&self, msg: &str) -> Result<(), crate::Error> {
        self.print(Level::Info, msg)
    }

    /// # Errors
    /// Same as [`Logger::print`].
    pub fn debug(&self, msg: &str) -> Result<(), crate::Error> {
        self.print(Level::Debug, msg)
    }

    /// Whether [`Logger::trace_call`] at `level` would do any work. Lets call sites
    /// skip rendering arguments that would be thrown away.
    #[must_use]
    pub fn is_tracing(&self, level: Level) -> bool {
        !self.strict && self.is_enabled(level)
    }

    /// Prints `function(arg1, arg2, ...)` at `level` through [`Logger::print`].
    ///
    /// Call sites pass their own name and arguments; see [`crate::invocation!`] for a
    /// macro that fills in the name. Loggers created in strict mode ignore this call.
    ///
    /// # Errors
    /// Same as [`Logger::print`].
    pub fn trace_call(
        &self,
        function: &str,
        args: &[TraceArg],
        level: Level,
    ) -> Result<(), crate::Error> {
        if !self.is_tracing(level) {
            return Ok(());
        }

        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.print(level, &format!("{function}({})", rendered.join(", ")))
    }

    /// [`Logger::trace_call`] at `Debug`.
    ///
    /// # Errors
    /// Same as [`Logger::print`].
    pub fn invocation(&self, function: &str, args: &[TraceArg]) -> Result<(), crate::Error> {
        self.trace_call(function, args, Level::Debug)
    }
}
