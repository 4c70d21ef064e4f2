//! Conversion of Rust values into [`Value`].
//!
//! [`Loggable`] is the bound every log argument satisfies. It is implemented
//! here for scalars, strings, std containers and a few well-known leaf types;
//! `#[derive(Loggable)]` covers user structs and enums.
//!
//! String-keyed maps become [`Object`]s because they are the natural "record"
//! shape in Rust. Sets become opaque [`Set`] handles.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;

use super::{Array, Map, Object, Set, Value};
use crate::options::Arg;

/// Converts a value into the dynamic [`Value`] graph.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be passed to a log call",
    label = "this type does not implement `Loggable`",
    note = "use `#[derive(Loggable)]` on the type definition"
)]
pub trait Loggable {
    /// Builds the value representation of `self`.
    fn to_log_value(&self) -> Value;

    /// Consuming variant of [`Loggable::to_log_value`].
    fn into_log_value(self) -> Value
    where
        Self: Sized,
    {
        self.to_log_value()
    }

    /// Wraps `self` as a log-call argument.
    ///
    /// Everything except [`LogOptions`](crate::LogOptions) is data.
    #[doc(hidden)]
    fn to_arg(&self) -> Arg {
        Arg::Value(self.to_log_value())
    }
}

impl Loggable for Value {
    fn to_log_value(&self) -> Value {
        self.clone()
    }

    fn into_log_value(self) -> Value {
        self
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_log_value(&self) -> Value {
        (**self).to_log_value()
    }

    fn to_arg(&self) -> Arg {
        (**self).to_arg()
    }
}

impl Loggable for str {
    fn to_log_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Loggable for String {
    fn to_log_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn into_log_value(self) -> Value {
        Value::String(self)
    }
}

impl Loggable for Cow<'_, str> {
    fn to_log_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Loggable for char {
    fn to_log_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Loggable for bool {
    fn to_log_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Loggable for () {
    fn to_log_value(&self) -> Value {
        Value::Null
    }
}

impl<T: ?Sized> Loggable for PhantomData<T> {
    fn to_log_value(&self) -> Value {
        Value::Null
    }
}

macro_rules! impl_loggable_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn to_log_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_loggable_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_loggable_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                #[allow(clippy::cast_precision_loss)]
                fn to_log_value(&self) -> Value {
                    i64::try_from(*self).map_or(Value::Float(*self as f64), Value::Int)
                }
            }
        )*
    };
}

impl_loggable_wide_int!(u64, usize, isize, i128, u128);

impl Loggable for f32 {
    fn to_log_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Loggable for f64 {
    fn to_log_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl<T: Loggable> Loggable for Option<T> {
    fn to_log_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Loggable::to_log_value)
    }
}

impl<T: Loggable> Loggable for [T] {
    fn to_log_value(&self) -> Value {
        Value::Array(self.iter().map(Loggable::to_log_value).collect())
    }
}

impl<T: Loggable, const N: usize> Loggable for [T; N] {
    fn to_log_value(&self) -> Value {
        self.as_slice().to_log_value()
    }
}

impl<T: Loggable> Loggable for Vec<T> {
    fn to_log_value(&self) -> Value {
        self.as_slice().to_log_value()
    }
}

impl<T: Loggable> Loggable for VecDeque<T> {
    fn to_log_value(&self) -> Value {
        Value::Array(self.iter().map(Loggable::to_log_value).collect())
    }
}

impl<K, V, S> Loggable for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Loggable,
{
    fn to_log_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.as_ref().to_string(), value.to_log_value()))
                .collect(),
        )
    }
}

impl<K, V> Loggable for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Loggable,
{
    fn to_log_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.as_ref().to_string(), value.to_log_value()))
                .collect(),
        )
    }
}

impl<T: Loggable, S> Loggable for HashSet<T, S> {
    fn to_log_value(&self) -> Value {
        let set = Set::new();
        for member in self {
            set.insert(member.to_log_value());
        }
        Value::Set(set)
    }
}

impl<T: Loggable> Loggable for BTreeSet<T> {
    fn to_log_value(&self) -> Value {
        let set = Set::new();
        for member in self {
            set.insert(member.to_log_value());
        }
        Value::Set(set)
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn to_log_value(&self) -> Value {
        (**self).to_log_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Rc<T> {
    fn to_log_value(&self) -> Value {
        (**self).to_log_value()
    }
}

impl<T: Loggable + ?Sized> Loggable for Arc<T> {
    fn to_log_value(&self) -> Value {
        (**self).to_log_value()
    }
}

impl<Tz: TimeZone> Loggable for DateTime<Tz> {
    fn to_log_value(&self) -> Value {
        Value::Date(self.with_timezone(&Utc))
    }
}

impl Loggable for Regex {
    fn to_log_value(&self) -> Value {
        Value::Pattern(self.clone())
    }
}

// Handles convert by sharing, so identity survives the conversion.
macro_rules! impl_loggable_handle {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn to_log_value(&self) -> Value {
                    Value::$ty(self.clone())
                }

                fn into_log_value(self) -> Value {
                    Value::$ty(self)
                }
            }
        )*
    };
}

impl_loggable_handle!(Array, Object, Map, Set);

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use chrono::TimeZone;

    use super::Loggable;
    use crate::value::{Object, Value};

    #[test]
    fn scalars_convert_to_primitives() {
        assert_eq!("hi".to_log_value(), Value::String("hi".into()));
        assert_eq!(7u8.to_log_value(), Value::Int(7));
        assert_eq!(true.to_log_value(), Value::Bool(true));
        assert_eq!(None::<i32>.to_log_value(), Value::Null);
        assert_eq!(u64::MAX.to_log_value(), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn sequences_convert_to_arrays() {
        let value = vec![1, 2, 3].to_log_value();
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(2), Some(Value::Int(3)));
    }

    #[test]
    fn string_keyed_maps_convert_to_objects() {
        let mut map = BTreeMap::new();
        map.insert("user", "alice");
        let value = map.to_log_value();
        assert_eq!(value.get("user"), Some(Value::String("alice".into())));
    }

    #[test]
    fn sets_convert_to_opaque_sets() {
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert!(matches!(set.to_log_value(), Value::Set(set) if set.len() == 2));
    }

    #[test]
    fn handles_keep_identity() {
        let object = Object::new();
        let value = object.to_log_value();
        assert!(value.same_handle(&Value::Object(object)));
    }

    #[test]
    fn dates_are_normalized_to_utc() {
        let date = chrono::FixedOffset::east_opt(3600)
            .expect("offset")
            .with_ymd_and_hms(2023, 1, 1, 1, 0, 0)
            .unwrap();
        let Value::Date(converted) = date.to_log_value() else {
            panic!("expected a date");
        };
        assert_eq!(converted.to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }
}
