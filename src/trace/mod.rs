//! Call tracing: a call site reports its own name and arguments and the logger prints
//! them as `function(arg1, arg2, ...)`.
//!
//! Nothing here inspects the stack. [`TraceArg`] turns each argument into text ahead of
//! time, and the [`crate::invocation!`] macro fills in the enclosing function's name from
//! its type path at compile time.

use serde::Serialize;
use std::fmt;

/// One argument of a traced call, already reduced to what will be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceArg {
    /// A function or closure, shown by name.
    Callable(String),
    /// No value; renders as `None`.
    Absent,
    /// Compact JSON produced by `serde_json`.
    Json(String),
    /// Serialization failed; shown by its explicit name if it has one, else its type.
    Opaque {
        name: Option<String>,
        type_name: &'static str,
    },
}

impl TraceArg {
    /// Functions and closures don't serialize, so the call site names them.
    #[must_use]
    pub fn callable(name: impl Into<String>) -> Self {
        Self::Callable(name.into())
    }

    /// An argument the caller left out.
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// JSON when `value` serializes to something non-empty, its type name otherwise.
    /// Values that serialize to `null`, such as `Option::None`, are [`TraceArg::Absent`].
    #[must_use]
    pub fn value<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::serialize(value, None)
    }

    /// Like [`TraceArg::value`], but falls back to `name` before the type name.
    #[must_use]
    pub fn named_value<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        Self::serialize(value, Some(name.into()))
    }

    fn serialize<T: Serialize + ?Sized>(value: &T, name: Option<String>) -> Self {
        match serde_json::to_string(value) {
            Ok(json) if json == "null" => Self::Absent,
            Ok(json) if !json.is_empty() => Self::Json(json),
            _ => Self::Opaque {
                name,
                type_name: std::any::type_name::<T>(),
            },
        }
    }
}

impl fmt::Display for TraceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(name)
            | Self::Json(name)
            | Self::Opaque {
                name: Some(name), ..
            } => f.write_str(name),
            Self::Absent => f.write_str("None"),
            Self::Opaque {
                name: None,
                type_name,
            } => f.write_str(type_name),
        }
    }
}

impl<T: Serialize> From<Option<T>> for TraceArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, |v| Self::value(&v))
    }
}

/// Reduces a marker item's type path (`crate::module::function::marker`) to `function`,
/// looking through closures and async blocks.
#[doc(hidden)]
#[must_use]
pub fn enclosing_fn_name(marker_path: &'static str) -> &'static str {
    let mut path = marker_path
        .rsplit_once("::")
        .map_or(marker_path, |(parent, _marker)| parent);
    while let Some(parent) = path.strip_suffix("::{{closure}}") {
        path = parent;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Traces the enclosing function with the given arguments.
///
/// The level is `Debug` unless one is named with `level = ...`.
/// Arguments must implement `serde::Serialize`. They are only rendered when
/// the logger would emit.
///
/// ```
/// use gatelog::{Level, MemorySink, Registry};
///
/// let registry = Registry::new();
/// let sink = MemorySink::new();
/// let mut logger = registry.create_logger_with_sink("svc", sink.clone());
/// logger.set_threshold(Level::Debug);
///
/// fn connect(logger: &gatelog::Logger, host: &str, port: u16) {
///     gatelog::invocation!(logger, host, port).unwrap();
/// }
///
/// connect(&logger, "db", 5432);
/// # if !logger.is_strict() {
/// assert_eq!(sink.lines(), vec![r#"svc [DEBUG]: connect("db", 5432)"#]);
/// # }
/// ```
#[macro_export]
macro_rules! invocation {
    ($logger:expr, level = $level:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_tracing(level) {
            fn __gatelog_marker() {}
            let function = $crate::trace::enclosing_fn_name(
                ::std::any::type_name_of_val(&__gatelog_marker),
            );
            logger.trace_call(function, &[$($crate::TraceArg::value(&$arg)),*], level)
        } else {
            ::std::result::Result::<(), $crate::Error>::Ok(())
        }
    }};
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::invocation!($logger, level = $crate::Level::Debug $(, $arg)*)
    };
}
