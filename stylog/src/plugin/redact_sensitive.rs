//! Plugin that masks sensitive values in the rest arguments.

use super::{Payload, Plugin};
use crate::{policy::RedactionConfig, redaction::Redactor};

/// Redacts object-like rest values. The message is never altered.
///
/// ```rust
/// use stylog::{Logger, MemorySink, Object, RedactSensitive, args};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .sink(sink.clone())
///     .plugin(RedactSensitive::new())
///     .build();
///
/// logger.log(args!["login", Object::new().with("password", "hunter2")]);
/// let rest = sink.last_write().unwrap().rest().to_vec();
/// assert_eq!(rest[0].get("password").unwrap(), "********");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RedactSensitive {
    redactor: Redactor,
}

impl RedactSensitive {
    /// Uses the built-in key sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` for key classification and depth.
    #[must_use]
    pub fn with_config(config: RedactionConfig) -> Self {
        Self {
            redactor: Redactor::new(config),
        }
    }
}

impl Plugin for RedactSensitive {
    fn transform(&self, payload: &Payload) -> Option<Payload> {
        let rest = payload
            .rest
            .iter()
            .map(|value| {
                if value.is_object() {
                    self.redactor.redact(value)
                } else {
                    value.clone()
                }
            })
            .collect();
        Some(Payload::new(payload.message.clone(), rest))
    }

    fn name(&self) -> &str {
        "redact-sensitive"
    }
}
