//! The plugin protocol.
//!
//! A plugin takes part in every log call through up to three hooks:
//!
//! - [`Plugin::transform`] rewrites the message and rest values. Transforms
//!   run in registration order, each one seeing the output of the previous.
//! - [`Plugin::before_log`] runs after parsing, before the sink write. It may
//!   mute the level through [`LogEvent::gate`].
//! - [`Plugin::after_log`] runs after the sink write and typically undoes
//!   what `before_log` changed.
//!
//! Hooks are not isolated from each other: a panicking hook unwinds through
//! the log call and the remaining hooks (and possibly the write) are skipped.
//! Mutes installed during that call are still lifted.
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use stylog::{LogEvent, Logger, MemorySink, Payload, Plugin, args};
//!
//! #[derive(Default)]
//! struct Counter(Cell<usize>);
//!
//! impl Plugin for Counter {
//!     fn after_log(&self, _event: &LogEvent<'_>) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//!
//! struct Shout;
//!
//! impl Plugin for Shout {
//!     fn transform(&self, payload: &Payload) -> Option<Payload> {
//!         Some(Payload::new(payload.message.to_uppercase(), payload.rest.clone()))
//!     }
//! }
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).plugin(Shout).build();
//! logger.log(args!["hello"]);
//! assert_eq!(sink.last_write().unwrap().prefix(), Some("%cDEV MODE MESSAGE%cHELLO"));
//! ```

mod dev_only;
mod redact_sensitive;
mod registry;

pub use dev_only::{DEV_ENV_VAR, DEVELOPMENT, DevOnly, read_env};
pub use redact_sensitive::RedactSensitive;
pub use registry::Registry;

use crate::{gate::SinkGate, level::LogLevel, value::Value};

/// Message and rest values as seen by the transform chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub message: String,
    pub rest: Vec<Value>,
}

impl Payload {
    #[must_use]
    pub fn new(message: impl Into<String>, rest: Vec<Value>) -> Self {
        Self {
            message: message.into(),
            rest,
        }
    }
}

/// What `before_log` and `after_log` observe.
#[derive(Clone, Copy, Debug)]
pub struct LogEvent<'a> {
    level: LogLevel,
    message: &'a str,
    rest: &'a [Value],
    gate: &'a SinkGate,
}

impl<'a> LogEvent<'a> {
    pub(crate) fn new(
        level: LogLevel,
        message: &'a str,
        rest: &'a [Value],
        gate: &'a SinkGate,
    ) -> Self {
        Self {
            level,
            message,
            rest,
            gate,
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The message after the transform chain.
    #[must_use]
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The rest values after the transform chain.
    #[must_use]
    pub fn rest(&self) -> &'a [Value] {
        self.rest
    }

    /// The logger's mute table.
    #[must_use]
    pub fn gate(&self) -> &'a SinkGate {
        self.gate
    }
}

/// A logging middleware. Every hook is optional.
pub trait Plugin {
    /// Rewrites the payload. `None` means the plugin does not transform, and
    /// the payload is passed on unchanged.
    fn transform(&self, _payload: &Payload) -> Option<Payload> {
        None
    }

    /// Runs before the sink write.
    fn before_log(&self, _event: &LogEvent<'_>) {}

    /// Runs after the sink write.
    fn after_log(&self, _event: &LogEvent<'_>) {}

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
