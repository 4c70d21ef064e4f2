//! Sink that forwards records to `tracing`.
//!
//! Each record becomes one event. The event message is the record text; the
//! label and the rendered rest values are attached as fields. Log and info
//! records are emitted at `INFO`.

use ::tracing::{Level, event};

use super::{Record, Sink};

/// Forwards records to the current `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

macro_rules! forward {
    ($level:expr, $record:expr) => {
        event!(
            $level,
            label = $record.label(),
            rest = %$record.render_rest(),
            "{}",
            $record.text().trim_start()
        )
    };
}

impl Sink for TracingSink {
    fn log(&self, record: &Record<'_>) {
        forward!(Level::INFO, record);
    }

    fn info(&self, record: &Record<'_>) {
        forward!(Level::INFO, record);
    }

    fn warn(&self, record: &Record<'_>) {
        forward!(Level::WARN, record);
    }

    fn error(&self, record: &Record<'_>) {
        forward!(Level::ERROR, record);
    }

    fn clear(&self) {}
}
