//! Adapts any `io::Write` (stderr, an open file, a socket) into a sink.

use super::Sink;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// The writer sits behind a mutex because `Sink::write` only gets `&self`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Gives the writer back, e.g. to inspect a `Vec<u8>` after logging.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writeln!(writer, "{line}").and_then(|()| writer.flush());
        drop(writer);
        Ok(result?)
    }
}
