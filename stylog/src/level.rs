//! Log levels and their mapping onto sink methods.

use std::fmt;

use crate::sink::{Record, Sink};

/// Severity of a log call.
///
/// The set is closed: every level maps to exactly one [`Sink`] method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Log,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// All levels, in ascending severity.
    pub const ALL: [LogLevel; 4] = [LogLevel::Log, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Lower-case name of the level (`"log"`, `"info"`, `"warn"`, `"error"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            LogLevel::Log => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    /// Writes `record` to the sink method that corresponds to this level.
    pub fn write_to(self, sink: &dyn Sink, record: &Record<'_>) {
        match self {
            LogLevel::Log => sink.log(record),
            LogLevel::Info => sink.info(record),
            LogLevel::Warn => sink.warn(record),
            LogLevel::Error => sink.error(record),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::LogLevel;
    use crate::sink::{Entry, MemorySink, Record};

    #[test]
    fn every_level_reaches_its_own_sink_method() {
        let sink = MemorySink::new();
        for level in LogLevel::ALL {
            let record = Record::new("TAG", "msg", "color: red", &[]);
            level.write_to(&sink, &record);
        }

        let levels: Vec<_> = sink
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Write { level, .. } => Some(level),
                Entry::Clear => None,
            })
            .collect();
        assert_eq!(levels, LogLevel::ALL);
    }

    #[test]
    fn names_are_lower_case() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Log.as_str(), "log");
    }
}
