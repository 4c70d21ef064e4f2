//! Styled console logging with a plugin pipeline.
//!
//! A log call is parsed into a message, optional [`LogOptions`] and the rest
//! values, threaded through the registered [`Plugin`]s and written to a
//! [`Sink`] with a colored label prefix.
//!
//! What this crate provides:
//! - the [`Logger`] facade and the thread-default logger behind `log!`,
//!   `info!`, `warn!` and `error!`
//! - the plugin protocol (`transform`, `before_log`, `after_log`)
//! - [`RedactSensitive`], a cycle-safe redaction of sensitive keys
//! - [`DevOnly`], which silences output outside development
//! - [`Logger::spinner`], animated feedback for a pending future (feature
//!   `spinner`)
//! - sinks for the terminal, memory, `tracing` and `slog`
//!
//! Arguments are converted into the dynamic [`Value`] graph through
//! [`Loggable`]; `#[derive(Loggable)]` lives in `stylog-derive` and is
//! re-exported from this crate.
//!
//! ```rust
//! use stylog::{LogOptions, LogTag, Logger, MemorySink, Object, RedactSensitive, args};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .sink(sink.clone())
//!     .plugin(RedactSensitive::new())
//!     .build();
//!
//! let user = Object::new().with("name", "alice").with("password", "hunter2");
//! logger.info(args!["signed in", LogOptions::new().label(LogTag::Info), user]);
//!
//! let entry = sink.last_write().unwrap();
//! assert_eq!(entry.prefix(), Some("%cINFO%csigned in"));
//! assert_eq!(entry.rest()[0].get("password").unwrap(), "********");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use stylog_derive::Loggable;

#[allow(unused_extern_crates)]
extern crate self as stylog;

// Module declarations
mod error;
mod gate;
pub mod global;
mod level;
mod logger;
mod options;
pub mod plugin;
pub mod policy;
mod redaction;
pub mod sink;
#[cfg(feature = "spinner")]
mod spinner;
mod style;
mod value;

pub use error::{Error, Result};
pub use gate::SinkGate;
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use options::{Arg, LogOptions, ParsedCall, ResolvedOptions};
pub use plugin::{DevOnly, LogEvent, Payload, Plugin, RedactSensitive, Registry};
pub use policy::{
    DEFAULT_MAX_DEPTH, KeepConfig, KeyClass, PartialSecret, REDACTED_PLACEHOLDER,
    RedactionConfig, RedactionPolicy, StrongSecret, TextRedactionPolicy,
};
pub use redaction::{CIRCULAR, MAX_DEPTH_REACHED, Redactor, redact};
pub use sink::{ConsoleSink, Entry, MemorySink, Record, Sink};
#[cfg(feature = "spinner")]
pub use spinner::{FAILURE_MARK, SPINNER_FRAMES, SPINNER_INTERVAL, SUCCESS_MARK};
pub use style::{
    DEFAULT_LABEL_COLOR, LogTag, MESSAGE_STYLE, make_label_style, parse_style_color,
};
pub use value::{Array, Map, Object, Set, Value};
// The trait shares its name with the derive macro re-exported above.
pub use value::Loggable;

/// Builds the argument list of a log call.
///
/// Every argument is converted through [`Loggable`]; [`LogOptions`] become
/// [`Arg::Options`], everything else [`Arg::Value`].
///
/// ```rust
/// use stylog::{Arg, LogOptions, args};
///
/// let call = args!["message", LogOptions::new().label("X"), 1];
/// assert!(matches!(call[1], Arg::Options(_)));
/// assert!(stylog::args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Loggable::to_arg(&$arg)),+]
    };
}

/// Logs at log level through the thread's default logger.
#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {
        $crate::global::log($crate::args![$($arg),*])
    };
}

/// Logs at info level through the thread's default logger.
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::global::info($crate::args![$($arg),*])
    };
}

/// Logs at warn level through the thread's default logger.
#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::global::warn($crate::args![$($arg),*])
    };
}

/// Logs at error level through the thread's default logger.
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::global::error($crate::args![$($arg),*])
    };
}
