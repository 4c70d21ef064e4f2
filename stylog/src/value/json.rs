//! `serde_json` interop.
//!
//! `serde_json::Value` converts into the value graph as plain data, so JSON
//! payloads go through the same redaction walk as any other argument.
//! Going the other way, a handle that is its own ancestor becomes the string
//! `"[Circular]"` and opaque containers become arrays (sets) or arrays of
//! `[key, value]` pairs (maps).

use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use super::{Array, Loggable, Object, Value};

impl Loggable for JsonValue {
    fn to_log_value(&self) -> Value {
        match self {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(*flag),
            JsonValue::Number(number) => number
                .as_i64()
                .map(Value::Int)
                .or_else(|| number.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            JsonValue::String(text) => Value::String(text.clone()),
            JsonValue::Array(items) => {
                Value::Array(items.iter().map(Loggable::to_log_value).collect::<Array>())
            }
            JsonValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), item.to_log_value()))
                    .collect::<Object>(),
            ),
        }
    }
}

impl Value {
    /// Converts the graph into a `serde_json::Value`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        to_json(self, &mut Vec::new())
    }
}

fn to_json(value: &Value, ancestors: &mut Vec<usize>) -> JsonValue {
    if let Some(identity) = value.identity() {
        if ancestors.contains(&identity) {
            return JsonValue::String("[Circular]".to_string());
        }
        ancestors.push(identity);
        let json = handle_to_json(value, ancestors);
        ancestors.pop();
        return json;
    }

    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(flag) => JsonValue::Bool(*flag),
        Value::Int(number) => JsonValue::from(*number),
        Value::Float(number) => Number::from_f64(*number).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(text) | Value::Error(text) => JsonValue::String(text.clone()),
        Value::Date(date) => JsonValue::String(date.to_rfc3339()),
        Value::Pattern(pattern) => JsonValue::String(format!("/{}/", pattern.as_str())),
        Value::Array(_) | Value::Object(_) | Value::Map(_) | Value::Set(_) => JsonValue::Null,
    }
}

fn handle_to_json(value: &Value, ancestors: &mut Vec<usize>) -> JsonValue {
    match value {
        Value::Array(array) => JsonValue::Array(
            array
                .borrow()
                .iter()
                .map(|item| to_json(item, ancestors))
                .collect(),
        ),
        Value::Object(object) => JsonValue::Object(
            object
                .borrow()
                .iter()
                .map(|(key, item)| (key.clone(), to_json(item, ancestors)))
                .collect(),
        ),
        Value::Map(map) => JsonValue::Array(
            map.borrow()
                .iter()
                .map(|(key, item)| {
                    JsonValue::Array(vec![to_json(key, ancestors), to_json(item, ancestors)])
                })
                .collect(),
        ),
        Value::Set(set) => JsonValue::Array(
            set.borrow()
                .iter()
                .map(|member| to_json(member, ancestors))
                .collect(),
        ),
        _ => JsonValue::Null,
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::value::{Loggable, Object, Value};

    #[test]
    fn json_objects_become_objects() {
        let value = json!({"user": {"name": "alice", "age": 30}}).to_log_value();
        let user = value.get("user").expect("user");
        assert_eq!(user.get("name"), Some(Value::String("alice".into())));
        assert_eq!(user.get("age"), Some(Value::Int(30)));
    }

    #[test]
    fn cycles_serialize_as_placeholders() {
        let object = Object::new().with("id", 1);
        object.insert("self", object.clone());
        assert_eq!(
            Value::Object(object).to_json(),
            json!({"id": 1, "self": "[Circular]"})
        );
    }

    #[test]
    fn serialize_matches_to_json() {
        let value = Value::Object(Object::new().with("ok", true));
        assert_eq!(
            serde_json::to_string(&value).expect("serialize"),
            r#"{"ok":true}"#
        );
    }
}
