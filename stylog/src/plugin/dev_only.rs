//! Plugin that silences output outside the development environment.

use std::{
    borrow::Cow,
    cell::Cell,
    env::{self, VarError},
    fmt,
};

use super::{LogEvent, Plugin};
use crate::{
    error::{Error, Result},
    level::LogLevel,
};

/// Environment variable read by [`DevOnly::new`].
pub const DEV_ENV_VAR: &str = "STYLOG_ENV";

/// Value of the environment variable that enables output.
pub const DEVELOPMENT: &str = "development";

/// Reads an environment variable.
///
/// An absent variable is `Ok(None)`; a value that is not valid unicode is an
/// error.
pub fn read_env(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::NonUnicodeEnv {
            name: name.to_string(),
        }),
    }
}

enum Probe {
    EnvVar(Cow<'static, str>),
    Custom(Box<dyn Fn() -> bool>),
}

/// Suppresses output unless the environment is development.
///
/// The environment is checked on every call. Outside development the plugin
/// mutes the call's level in `before_log` and lifts that mute in `after_log`.
/// A level that was already muted by someone else is left alone.
pub struct DevOnly {
    probe: Probe,
    muted: Cell<[bool; 4]>,
}

impl DevOnly {
    /// Checks [`DEV_ENV_VAR`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_env_var(DEV_ENV_VAR)
    }

    /// Checks the variable `name` instead.
    #[must_use]
    pub fn with_env_var(name: impl Into<Cow<'static, str>>) -> Self {
        Self::from_probe(Probe::EnvVar(name.into()))
    }

    /// Uses `probe` to decide whether the environment is development.
    #[must_use]
    pub fn with_probe(probe: impl Fn() -> bool + 'static) -> Self {
        Self::from_probe(Probe::Custom(Box::new(probe)))
    }

    fn from_probe(probe: Probe) -> Self {
        Self {
            probe,
            muted: Cell::new([false; 4]),
        }
    }

    /// Returns `true` if output is currently allowed.
    ///
    /// An absent or non-unicode variable counts as "not development".
    #[must_use]
    pub fn is_development(&self) -> bool {
        match &self.probe {
            Probe::EnvVar(name) => read_env(name)
                .ok()
                .flatten()
                .is_some_and(|value| value == DEVELOPMENT),
            Probe::Custom(probe) => probe(),
        }
    }

    fn set_muted(&self, level: LogLevel, muted: bool) {
        let mut table = self.muted.get();
        table[level.index()] = muted;
        self.muted.set(table);
    }
}

impl std::default::Default for DevOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DevOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let probe = match &self.probe {
            Probe::EnvVar(name) => name.as_ref(),
            Probe::Custom(_) => "<probe>",
        };
        f.debug_struct("DevOnly")
            .field("probe", &probe)
            .field("muted", &self.muted.get())
            .finish()
    }
}

impl Plugin for DevOnly {
    fn before_log(&self, event: &LogEvent<'_>) {
        // Overwritten on every call, so a flag left behind by an unwound
        // call cannot lift someone else's mute.
        let level = event.level();
        self.set_muted(level, !self.is_development() && event.gate().mute(level));
    }

    fn after_log(&self, event: &LogEvent<'_>) {
        let level = event.level();
        if self.muted.get()[level.index()] {
            event.gate().unmute(level);
            self.set_muted(level, false);
        }
    }

    fn name(&self) -> &str {
        "dev-only"
    }
}
