//! Default sink for loggers created without one.

use super::Sink;
use std::io::{self, Write};

/// Writes each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Stateless; every write locks stdout for the duration of one line.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }
}
