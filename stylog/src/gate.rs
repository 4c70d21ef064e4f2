//! Per-level muting of the sink.
//!
//! Plugins silence output by muting a level on the [`SinkGate`] in
//! `before_log` and unmuting it in `after_log`. Every emit runs inside a
//! [`GateScope`]; when the scope ends, mutes installed during the emit are
//! lifted even if a hook panicked in between.

use std::cell::Cell;

use crate::level::LogLevel;

/// Mute table consulted before every sink write.
#[derive(Debug, Default)]
pub struct SinkGate {
    muted: Cell<[bool; 4]>,
}

impl SinkGate {
    /// Creates a gate with every level open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutes `level`. Returns `true` if the level was open before.
    pub fn mute(&self, level: LogLevel) -> bool {
        self.set(level, true)
    }

    /// Unmutes `level`. Returns `true` if the level was muted before.
    pub fn unmute(&self, level: LogLevel) -> bool {
        self.set(level, false)
    }

    /// Returns `true` if writes at `level` are suppressed.
    #[must_use]
    pub fn is_muted(&self, level: LogLevel) -> bool {
        self.muted.get()[level.index()]
    }

    /// Opens a scope that lifts mutes added while it is alive.
    pub(crate) fn scope(&self) -> GateScope<'_> {
        GateScope {
            gate: self,
            baseline: self.muted.get(),
        }
    }

    fn set(&self, level: LogLevel, muted: bool) -> bool {
        let mut table = self.muted.get();
        let changed = table[level.index()] != muted;
        table[level.index()] = muted;
        self.muted.set(table);
        changed
    }
}

/// Guard returned by [`SinkGate::scope`].
#[must_use = "mutes are lifted when the scope is dropped"]
pub(crate) struct GateScope<'a> {
    gate: &'a SinkGate,
    baseline: [bool; 4],
}

impl Drop for GateScope<'_> {
    fn drop(&mut self) {
        let mut table = self.gate.muted.get();
        for (muted, was_muted) in table.iter_mut().zip(self.baseline) {
            *muted &= was_muted;
        }
        self.gate.muted.set(table);
    }
}
