//! The dynamic value graph carried by log calls.
//!
//! Log arguments are converted into [`Value`]s before they enter the plugin
//! pipeline. Container values ([`Array`], [`Object`], [`Map`], [`Set`]) are
//! shared handles: cloning one shares the underlying storage and identity, so
//! a graph may contain cycles (`obj.insert("self", obj.clone())`). Identity is
//! what the redaction walk uses to detect cycles.
//!
//! Cyclic graphs built from `Rc` handles are never freed; they are meant for
//! short-lived diagnostic payloads.
//!
//! - **`convert`**: the [`Loggable`] conversion trait and std implementations
//! - **`inspect`**: `Debug`/`Display` rendering with cycle detection
//! - **`json`**: `serde_json` interop (feature `json`)

mod convert;
mod inspect;
#[cfg(feature = "json")]
mod json;

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use chrono::{DateTime, Utc};
use regex::Regex;

pub use convert::Loggable;
pub(crate) use inspect::render_values;

/// A loggable value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
    Object(Object),
    Date(DateTime<Utc>),
    Pattern(Regex),
    Map(Map),
    Set(Set),
    /// A rendered error. Treated as a primitive by the redaction walk.
    Error(String),
}

impl Value {
    /// Returns `true` for object-like values: arrays, objects, dates, patterns,
    /// maps and sets.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            Value::Array(_)
                | Value::Object(_)
                | Value::Date(_)
                | Value::Pattern(_)
                | Value::Map(_)
                | Value::Set(_)
        )
    }

    /// Returns `true` for `Int` and `Float`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the string slice if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the object handle if this is an `Object`.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array handle if this is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Looks up `key` if this is an `Object`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Looks up `index` if this is an `Array`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<Value> {
        self.as_array().and_then(|array| array.get(index))
    }

    /// Identity of the shared handle behind this value, if any.
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            Value::Array(array) => Some(array.identity()),
            Value::Object(object) => Some(object.identity()),
            Value::Map(map) => Some(map.identity()),
            Value::Set(set) => Some(set.identity()),
            _ => None,
        }
    }

    /// Returns `true` if both values are the same shared handle.
    #[must_use]
    pub fn same_handle(&self, other: &Value) -> bool {
        matches!((self.identity(), other.identity()), (Some(a), Some(b)) if a == b)
    }

    /// Name of the value kind, as used in placeholders.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) | Value::Float(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Date(_) => "Date",
            Value::Pattern(_) => "RegExp",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Error(_) => "Error",
        }
    }
}

/// Structural equality.
///
/// Handles that share identity are equal without being walked. Comparing two
/// distinct cyclic graphs does not terminate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            #[allow(clippy::cast_precision_loss)]
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::String(a), Value::String(b)) | (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

// =============================================================================
// Shared handles
// =============================================================================

macro_rules! shared_handle {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name(Rc<RefCell<$inner>>);

        impl $name {
            pub(crate) fn identity(&self) -> usize {
                Rc::as_ptr(&self.0).cast::<()>() as usize
            }

            /// Returns `true` if both handles point at the same storage.
            #[must_use]
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.0, &other.0)
            }

            /// Number of entries.
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.borrow().len()
            }

            /// Returns `true` if there are no entries.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.borrow().is_empty()
            }

            pub(crate) fn borrow(&self) -> Ref<'_, $inner> {
                self.0.borrow()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
            }
        }
    };
}

shared_handle!(
    /// Ordered sequence handle.
    Array,
    Vec<Value>
);

shared_handle!(
    /// Insertion-ordered, string-keyed record handle.
    Object,
    Vec<(String, Value)>
);

shared_handle!(
    /// Opaque keyed container handle. Never descended into by redaction.
    Map,
    Vec<(Value, Value)>
);

shared_handle!(
    /// Opaque set container handle. Never descended into by redaction.
    Set,
    Vec<Value>
);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn push(&self, value: impl Loggable) {
        self.0.borrow_mut().push(value.into_log_value());
    }

    /// Returns a clone of the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Clones the elements out of the handle.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(values)))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`. A new key is appended at the end; an
    /// existing key keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: impl Loggable) {
        let key = key.into();
        let value = value.into_log_value();
        let mut entries = self.0.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }

    /// Builder-style [`Object::insert`].
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Loggable) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns a clone of the value stored at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.clone())
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().iter().any(|(existing, _)| existing == key)
    }

    /// Keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(key, _)| key.clone()).collect()
    }

    /// Clones the entries out of the handle.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0.borrow().clone()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Keys are compared structurally.
    pub fn insert(&self, key: impl Loggable, value: impl Loggable) {
        let key = key.into_log_value();
        let value = value.into_log_value();
        let mut entries = self.0.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }
}

impl Set {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` unless an equal value is already present.
    pub fn insert(&self, value: impl Loggable) {
        let value = value.into_log_value();
        let mut members = self.0.borrow_mut();
        if !members.contains(&value) {
            members.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Array, Object, Set, Value};

    #[test]
    fn cloned_handles_share_identity() {
        let object = Object::new();
        let alias = object.clone();
        alias.insert("a", 1);

        assert!(object.ptr_eq(&alias));
        assert_eq!(object.get("a"), Some(Value::Int(1)));
        assert!(Value::Object(object).same_handle(&Value::Object(alias)));
    }

    #[test]
    fn structurally_equal_handles_compare_equal() {
        let left = Object::new().with("a", "x");
        let right = Object::new().with("a", "x");
        assert!(!left.ptr_eq(&right));
        assert_eq!(Value::Object(left), Value::Object(right));
    }

    #[test]
    fn insert_keeps_position_of_existing_key() {
        let object = Object::new().with("first", 1).with("second", 2);
        object.insert("first", 3);
        assert_eq!(object.keys(), vec!["first".to_string(), "second".to_string()]);
        assert_eq!(object.get("first"), Some(Value::Int(3)));
    }

    #[test]
    fn cycles_can_be_built() {
        let object = Object::new();
        object.insert("self", object.clone());
        let inner = object.get("self").expect("self key");
        assert!(inner.same_handle(&Value::Object(object)));
    }

    #[test]
    fn set_ignores_duplicates() {
        let set = Set::new();
        set.insert("a");
        set.insert("a");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn object_like_values() {
        assert!(Value::Array(Array::new()).is_object());
        assert!(!Value::Null.is_object());
        assert!(!Value::Error("boom".into()).is_object());
        assert!(Value::Float(1.5).is_number());
    }
}
