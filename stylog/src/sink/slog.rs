//! Sink that forwards records to a `slog::Logger`.
//!
//! The record text is the slog message; `label` and `rest` are attached as
//! key-value pairs. With the `json` feature the rest values are emitted as a
//! nested JSON array through `slog::Serde`, otherwise as one rendered string.

use ::slog::{Key, Logger, Result as SlogResult, Serializer, Value as SlogValue};

use super::{Record, Sink};
use crate::value::Value;

/// Forwards records to a `slog` logger.
#[derive(Clone, Debug)]
pub struct SlogSink {
    logger: Logger,
}

impl SlogSink {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

/// Rest values as a single slog value.
struct Rest<'a>(&'a [Value]);

impl SlogValue for Rest<'_> {
    #[cfg(feature = "json")]
    fn serialize(
        &self,
        record: &::slog::Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let json = serde_json::Value::Array(self.0.iter().map(Value::to_json).collect());
        SlogValue::serialize(&::slog::Serde(json), record, key, serializer)
    }

    #[cfg(not(feature = "json"))]
    fn serialize(
        &self,
        _record: &::slog::Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &crate::value::render_values(self.0))
    }
}

impl Sink for SlogSink {
    fn log(&self, record: &Record<'_>) {
        ::slog::info!(self.logger, "{}", record.text().trim_start();
            "label" => record.label(), "rest" => Rest(record.rest()));
    }

    fn info(&self, record: &Record<'_>) {
        ::slog::info!(self.logger, "{}", record.text().trim_start();
            "label" => record.label(), "rest" => Rest(record.rest()));
    }

    fn warn(&self, record: &Record<'_>) {
        ::slog::warn!(self.logger, "{}", record.text().trim_start();
            "label" => record.label(), "rest" => Rest(record.rest()));
    }

    fn error(&self, record: &Record<'_>) {
        ::slog::error!(self.logger, "{}", record.text().trim_start();
            "label" => record.label(), "rest" => Rest(record.rest()));
    }

    fn clear(&self) {}
}
