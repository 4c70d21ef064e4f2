//! Human-readable rendering of values.
//!
//! `Display` prints top-level strings bare and everything else in an
//! inspection format (`{ key: 'value' }`, `[ 1, 2 ]`). `Debug` quotes strings
//! at every level. A handle that is its own ancestor renders as `[Circular]`,
//! so cyclic graphs print in finite time.

use std::fmt::{self, Write as _};

use super::{Array, Map, Object, Set, Value};

struct Inspector {
    ancestors: Vec<usize>,
}

impl Inspector {
    fn new() -> Self {
        Self {
            ancestors: Vec::new(),
        }
    }

    fn write<W: fmt::Write>(&mut self, out: &mut W, value: &Value) -> fmt::Result {
        match value {
            Value::Null => out.write_str("null"),
            Value::Bool(flag) => write!(out, "{flag}"),
            Value::Int(number) => write!(out, "{number}"),
            Value::Float(number) => write!(out, "{number}"),
            Value::String(text) => write!(out, "'{}'", text.replace('\'', "\\'")),
            Value::Date(date) => out.write_str(&date.to_rfc3339()),
            Value::Pattern(pattern) => write!(out, "/{}/", pattern.as_str()),
            Value::Error(message) => write!(out, "Error: {message}"),
            Value::Array(array) => {
                self.guarded(out, array.identity(), |this, out| this.write_array(out, array))
            }
            Value::Object(object) => self.guarded(out, object.identity(), |this, out| {
                this.write_object(out, object)
            }),
            Value::Map(map) => {
                self.guarded(out, map.identity(), |this, out| this.write_map(out, map))
            }
            Value::Set(set) => {
                self.guarded(out, set.identity(), |this, out| this.write_set(out, set))
            }
        }
    }

    /// Runs `body` with `identity` on the ancestor stack, or prints
    /// `[Circular]` if it is already there.
    fn guarded<W: fmt::Write>(
        &mut self,
        out: &mut W,
        identity: usize,
        body: impl FnOnce(&mut Self, &mut W) -> fmt::Result,
    ) -> fmt::Result {
        if self.ancestors.contains(&identity) {
            return out.write_str("[Circular]");
        }
        self.ancestors.push(identity);
        let result = body(self, out);
        self.ancestors.pop();
        result
    }

    fn write_array<W: fmt::Write>(&mut self, out: &mut W, array: &Array) -> fmt::Result {
        let items = array.borrow();
        if items.is_empty() {
            return out.write_str("[]");
        }
        out.write_str("[ ")?;
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            self.write(out, item)?;
        }
        out.write_str(" ]")
    }

    fn write_object<W: fmt::Write>(&mut self, out: &mut W, object: &Object) -> fmt::Result {
        let entries = object.borrow();
        if entries.is_empty() {
            return out.write_str("{}");
        }
        out.write_str("{ ")?;
        for (index, (key, item)) in entries.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{key}: ")?;
            self.write(out, item)?;
        }
        out.write_str(" }")
    }

    fn write_map<W: fmt::Write>(&mut self, out: &mut W, map: &Map) -> fmt::Result {
        let entries = map.borrow();
        write!(out, "Map({})", entries.len())?;
        if entries.is_empty() {
            return out.write_str(" {}");
        }
        out.write_str(" { ")?;
        for (index, (key, item)) in entries.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            self.write(out, key)?;
            out.write_str(" => ")?;
            self.write(out, item)?;
        }
        out.write_str(" }")
    }

    fn write_set<W: fmt::Write>(&mut self, out: &mut W, set: &Set) -> fmt::Result {
        let members = set.borrow();
        write!(out, "Set({})", members.len())?;
        if members.is_empty() {
            return out.write_str(" {}");
        }
        out.write_str(" { ")?;
        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            self.write(out, member)?;
        }
        out.write_str(" }")
    }
}

impl Value {
    /// Renders the value in inspection format, quoting strings.
    #[must_use]
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Inspector::new().write(&mut out, self);
        out
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().write(f, self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(text) => f.write_str(text),
            other => Inspector::new().write(f, other),
        }
    }
}

/// Joins values with single spaces, the way a console prints variadic data.
pub(crate) fn render_values(values: &[Value]) -> String {
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out
}
