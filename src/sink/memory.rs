//! Captures emitted lines in memory so embedders and tests can inspect exactly what a
//! logger produced.

use super::Sink;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Clones share one buffer: hand one clone to the logger, keep the other to read back.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Starts with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of lines captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing passed the gate, the usual assertion for filtered calls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Most recent line, when only the latest emission matters.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Lets one sink be reused across phases of a test.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock can't leave a Vec<String> half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        self.lock().push(line.to_string());
        Ok(())
    }
}
