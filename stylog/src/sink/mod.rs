//! Output sinks.
//!
//! A [`Sink`] is the console-equivalent the logger writes to: one method per
//! level plus `clear`. Every write receives a [`Record`] made of the styled
//! prefix `"%c{label}%c{text}"`, the label style, the message style and the
//! rest values.
//!
//! - [`ConsoleSink`]: the terminal (stdout for log/info, stderr for warn/error)
//! - [`MemorySink`]: records every call, for tests and assertions
//! - `TracingSink`: forwards to `tracing` (feature `tracing`)
//! - `SlogSink`: forwards to `slog` (feature `slog`)

mod console;
mod memory;
#[cfg(feature = "slog")]
mod slog;
#[cfg(feature = "tracing")]
mod tracing;

pub use console::ConsoleSink;
pub use memory::{Entry, MemorySink};
#[cfg(feature = "slog")]
pub use self::slog::SlogSink;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;

use crate::{
    style::MESSAGE_STYLE,
    value::{Value, render_values},
};

/// Destination of log output.
pub trait Sink {
    fn log(&self, record: &Record<'_>);
    fn info(&self, record: &Record<'_>);
    fn warn(&self, record: &Record<'_>);
    fn error(&self, record: &Record<'_>);
    /// Clears the display, where the sink has one.
    fn clear(&self);
}

/// One write to a sink.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    label: &'a str,
    text: &'a str,
    label_style: &'a str,
    rest: &'a [Value],
}

impl<'a> Record<'a> {
    /// Creates a record. `text` is everything that follows the label.
    #[must_use]
    pub fn new(label: &'a str, text: &'a str, label_style: &'a str, rest: &'a [Value]) -> Self {
        Self {
            label,
            text,
            label_style,
            rest,
        }
    }

    /// The format string with two style segments: `"%c{label}%c{text}"`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("%c{}%c{}", self.label, self.text)
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Style of the label segment.
    #[must_use]
    pub fn label_style(&self) -> &'a str {
        self.label_style
    }

    /// Style of the text segment. Always [`MESSAGE_STYLE`].
    #[must_use]
    pub fn message_style(&self) -> &'static str {
        MESSAGE_STYLE
    }

    #[must_use]
    pub fn rest(&self) -> &'a [Value] {
        self.rest
    }

    /// The rest values rendered and joined with spaces.
    #[must_use]
    pub fn render_rest(&self) -> String {
        render_values(self.rest)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn log(&self, record: &Record<'_>) {
        (**self).log(record);
    }

    fn info(&self, record: &Record<'_>) {
        (**self).info(record);
    }

    fn warn(&self, record: &Record<'_>) {
        (**self).warn(record);
    }

    fn error(&self, record: &Record<'_>) {
        (**self).error(record);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
