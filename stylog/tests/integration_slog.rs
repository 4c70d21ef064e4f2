//! Integration tests for the `slog` sink.
//!
//! A capturing drain records every slog record so the tests can check the
//! level, the message and the `label`/`rest` key-value pairs produced by
//! `SlogSink`.

#![cfg(feature = "slog")]

use std::{
    collections::HashMap,
    fmt::Arguments,
    sync::{Arc, Mutex},
};

use slog::KV as _;
use stylog::{LogOptions, Logger, Object, RedactSensitive, args, sink::SlogSink};

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    #[cfg(feature = "json")]
    Serde(serde_json::Value),
}

#[derive(Default)]
struct CapturingSerializer {
    captured: HashMap<String, CapturedValue>,
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    #[cfg(feature = "json")]
    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(serde_json::Value::Null);
        self.captured.insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

#[derive(Debug)]
struct CapturedRecord {
    level: slog::Level,
    message: String,
    fields: HashMap<String, CapturedValue>,
}

#[derive(Clone, Default)]
struct CapturingDrain {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl slog::Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        _values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        let mut serializer = CapturingSerializer::default();
        record
            .kv()
            .serialize(record, &mut serializer)
            .expect("capturing serializer never fails");
        self.records.lock().unwrap().push(CapturedRecord {
            level: record.level(),
            message: record.msg().to_string(),
            fields: serializer.captured,
        });
        Ok(())
    }
}

fn slog_logger() -> (Logger, CapturingDrain) {
    let drain = CapturingDrain::default();
    let root = slog::Logger::root(drain.clone(), slog::o!());
    (Logger::new(SlogSink::new(root)), drain)
}

#[test]
fn levels_map_onto_slog_levels() {
    let (logger, drain) = slog_logger();
    logger.log(args!["a"]);
    logger.info(args!["b"]);
    logger.warn(args!["c"]);
    logger.error(args!["d"]);

    let records = drain.records.lock().unwrap();
    let levels: Vec<_> = records.iter().map(|record| record.level).collect();
    assert_eq!(
        levels,
        [
            slog::Level::Info,
            slog::Level::Info,
            slog::Level::Warning,
            slog::Level::Error
        ]
    );
}

#[test]
fn message_and_label_are_forwarded() {
    let (logger, drain) = slog_logger();
    logger.warn(args!["disk low", LogOptions::new().label("STORAGE")]);

    let records = drain.records.lock().unwrap();
    let record = &records[0];
    assert_eq!(record.message, "disk low");
    assert_eq!(
        record.fields.get("label"),
        Some(&CapturedValue::Str("STORAGE".into()))
    );
}

#[test]
fn rest_values_are_redacted_before_reaching_slog() {
    let (logger, drain) = slog_logger();
    logger.use_plugin(RedactSensitive::new());
    logger.info(args![
        "login",
        Object::new().with("user", "alice").with("password", "hunter2")
    ]);

    let records = drain.records.lock().unwrap();
    let rest = records[0].fields.get("rest").expect("rest field");

    #[cfg(feature = "json")]
    assert_eq!(
        rest,
        &CapturedValue::Serde(serde_json::json!([{"user": "alice", "password": "********"}]))
    );

    #[cfg(not(feature = "json"))]
    assert_eq!(
        rest,
        &CapturedValue::Str("{ user: 'alice', password: '********' }".into())
    );
}
