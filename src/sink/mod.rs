//! A logger delivers each formatted line to exactly one sink. The `Sink` trait is the
//! only capability the logger needs, so callers can plug in closures, buffers, or writers.

mod console;
mod memory;
mod writer;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

/// `Send + Sync` lets a logger be moved to or shared with other threads behind a lock.
pub trait Sink: Send + Sync {
    /// Delivers one fully formatted line.
    ///
    /// # Errors
    /// Whatever the underlying destination reports; the logger returns it unchanged.
    fn write(&self, line: &str) -> Result<(), crate::Error>;
}

impl<F> Sink for F
where
    F: Fn(&str) -> Result<(), crate::Error> + Send + Sync,
{
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        self(line)
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write(&self, line: &str) -> Result<(), crate::Error> {
        (**self).write(line)
    }
}

/// Pins a closure to the `Sink` signature so its argument and error types are inferred.
///
/// ```
/// use gatelog::sink;
///
/// let quiet = sink::from_fn(|line| {
///     assert!(!line.is_empty());
///     Ok(())
/// });
/// let logger = gatelog::create_logger_with_sink("svc", quiet);
/// assert_eq!(logger.name(), "svc");
/// ```
pub const fn from_fn<F>(f: F) -> F
where
    F: Fn(&str) -> Result<(), crate::Error> + Send + Sync,
{
    f
}
