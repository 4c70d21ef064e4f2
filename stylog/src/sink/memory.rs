//! In-memory sink that records every write and clear.

use std::{cell::RefCell, rc::Rc};

use super::{Record, Sink};
use crate::{level::LogLevel, value::Value};

/// One call received by a [`MemorySink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Write {
        level: LogLevel,
        prefix: String,
        label_style: String,
        message_style: String,
        rest: Vec<Value>,
    },
    Clear,
}

impl Entry {
    /// The level of a write, `None` for a clear.
    #[must_use]
    pub fn level(&self) -> Option<LogLevel> {
        match self {
            Entry::Write { level, .. } => Some(*level),
            Entry::Clear => None,
        }
    }

    /// The prefix of a write, `None` for a clear.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Entry::Write { prefix, .. } => Some(prefix),
            Entry::Clear => None,
        }
    }

    /// The rest values of a write. Empty for a clear.
    #[must_use]
    pub fn rest(&self) -> &[Value] {
        match self {
            Entry::Write { rest, .. } => rest,
            Entry::Clear => &[],
        }
    }
}

/// Sink that records every call in memory.
///
/// Clones share the same entry list, so a test can keep one clone and hand
/// another to the logger.
///
/// ```rust
/// use stylog::{Logger, MemorySink, args};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
/// logger.info(args!["ready"]);
///
/// let last = sink.last_write().unwrap();
/// assert_eq!(last.prefix(), Some("%cDEV MODE MESSAGE%cready"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// Writes only, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<Entry> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| !matches!(entry, Entry::Clear))
            .cloned()
            .collect()
    }

    /// The most recent write.
    #[must_use]
    pub fn last_write(&self) -> Option<Entry> {
        self.entries
            .borrow()
            .iter()
            .rev()
            .find(|entry| !matches!(entry, Entry::Clear))
            .cloned()
    }

    /// Number of clear calls received.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| matches!(entry, Entry::Clear))
            .count()
    }

    /// Forgets every recorded entry.
    pub fn reset(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, level: LogLevel, record: &Record<'_>) {
        self.entries.borrow_mut().push(Entry::Write {
            level,
            prefix: record.prefix(),
            label_style: record.label_style().to_string(),
            message_style: record.message_style().to_string(),
            rest: record.rest().to_vec(),
        });
    }
}

impl Sink for MemorySink {
    fn log(&self, record: &Record<'_>) {
        self.push(LogLevel::Log, record);
    }

    fn info(&self, record: &Record<'_>) {
        self.push(LogLevel::Info, record);
    }

    fn warn(&self, record: &Record<'_>) {
        self.push(LogLevel::Warn, record);
    }

    fn error(&self, record: &Record<'_>) {
        self.push(LogLevel::Error, record);
    }

    fn clear(&self) {
        self.entries.borrow_mut().push(Entry::Clear);
    }
}
