//! Recursive, cycle-safe redaction of value graphs.
//!
//! The walk never mutates its input: it returns a freshly allocated graph in
//! which values under sensitive keys are masked. It always terminates:
//!
//! - a handle seen earlier in the same walk becomes [`CIRCULAR`];
//! - nesting beyond the configured depth becomes [`MAX_DEPTH_REACHED`];
//! - maps and sets are replaced by `"[Map]"` / `"[Set]"` without being opened.
//!
//! The visited set lives only for one top-level [`Redactor::redact`] call and
//! entries are never removed during it, so a handle that appears twice (even
//! without a cycle) is reported as circular on its second appearance.

use std::collections::HashSet;

use crate::{
    policy::{
        KeyClass, PartialSecret, REDACTED_PLACEHOLDER, RedactionConfig, RedactionPolicy,
        StrongSecret, TextRedactionPolicy,
    },
    value::{Object, Value},
};

/// Substituted for a handle already visited during the walk.
pub const CIRCULAR: &str = "[CIRCULAR]";

/// Substituted for values nested deeper than the depth ceiling.
pub const MAX_DEPTH_REACHED: &str = "[MAX_DEPTH_REACHED]";

/// Redacts `value` with the default [`RedactionConfig`].
///
/// ```rust
/// use stylog::{Object, Value, redact};
///
/// let user = Object::new().with("name", "alice").with("password", "hunter2");
/// let redacted = redact(&Value::Object(user));
/// assert_eq!(redacted.get("name").unwrap(), "alice");
/// assert_eq!(redacted.get("password").unwrap(), "********");
/// ```
#[must_use]
pub fn redact(value: &Value) -> Value {
    Redactor::default().redact(value)
}

/// A redaction walk bound to a configuration.
#[derive(Clone, Debug)]
pub struct Redactor {
    config: RedactionConfig,
    strong: TextRedactionPolicy,
    partial: TextRedactionPolicy,
}

impl Redactor {
    /// Creates a redactor for `config`.
    #[must_use]
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            config,
            strong: StrongSecret::policy(),
            partial: PartialSecret::policy(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Returns a sanitized copy of `value`.
    #[must_use]
    pub fn redact(&self, value: &Value) -> Value {
        let mut visited = HashSet::new();
        self.walk(value, &mut visited, 0)
    }

    fn walk(&self, value: &Value, visited: &mut HashSet<usize>, depth: usize) -> Value {
        if depth > self.config.max_depth() {
            return Value::String(MAX_DEPTH_REACHED.to_string());
        }

        if !value.is_object() {
            return value.clone();
        }

        if let Some(identity) = value.identity() {
            if !visited.insert(identity) {
                return Value::String(CIRCULAR.to_string());
            }
        }

        match value {
            Value::Array(array) => Value::Array(
                array
                    .borrow()
                    .iter()
                    .map(|item| self.walk(item, visited, depth + 1))
                    .collect(),
            ),
            Value::Date(date) => Value::String(date.to_rfc3339()),
            Value::Pattern(pattern) => Value::String(format!("/{}/", pattern.as_str())),
            Value::Map(_) | Value::Set(_) => Value::String(format!("[{}]", value.kind())),
            Value::Object(object) => Value::Object(self.walk_object(object, visited, depth)),
            _ => value.clone(),
        }
    }

    fn walk_object(&self, object: &Object, visited: &mut HashSet<usize>, depth: usize) -> Object {
        let redacted = Object::new();
        for (key, item) in object.borrow().iter() {
            let replacement = match self.config.classify(key) {
                KeyClass::Strong => Value::String(self.strong.placeholder()),
                KeyClass::Sensitive => self.mask(item),
                KeyClass::Plain if item.is_object() => self.walk(item, visited, depth + 1),
                KeyClass::Plain => item.clone(),
            };
            redacted.insert(key.clone(), replacement);
        }
        redacted
    }

    fn mask(&self, value: &Value) -> Value {
        let masked = match value {
            Value::String(text) => self.partial.apply_to(text),
            Value::Int(_) | Value::Float(_) => self.partial.placeholder(),
            _ => REDACTED_PLACEHOLDER.to_string(),
        };
        Value::String(masked)
    }
}

impl std::default::Default for Redactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}
