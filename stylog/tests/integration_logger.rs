//! End-to-end tests for the logging facade.
//!
//! These tests exercise:
//! - argument parsing (message, options, rest),
//! - the transform chain and hook ordering across plugins, and
//! - the record handed to each sink method.

use std::{cell::RefCell, rc::Rc};

use stylog::{
    Entry, LogEvent, LogLevel, LogOptions, LogTag, Logger, MESSAGE_STYLE, MemorySink, Object,
    Payload, Plugin, Value, args, make_label_style,
};

/// Records hook calls into a shared journal.
struct Journal {
    name: &'static str,
    calls: Rc<RefCell<Vec<String>>>,
}

impl Plugin for Journal {
    fn before_log(&self, event: &LogEvent<'_>) {
        self.calls
            .borrow_mut()
            .push(format!("{}:before:{}", self.name, event.level()));
    }

    fn after_log(&self, event: &LogEvent<'_>) {
        self.calls
            .borrow_mut()
            .push(format!("{}:after:{}", self.name, event.level()));
    }
}

/// Appends a suffix to the message.
struct Suffix(&'static str);

impl Plugin for Suffix {
    fn transform(&self, payload: &Payload) -> Option<Payload> {
        Some(Payload::new(
            format!("{}{}", payload.message, self.0),
            payload.rest.clone(),
        ))
    }
}

fn logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(sink.clone()), sink)
}

mod parsing {
    use super::*;

    #[test]
    fn message_options_and_rest_reach_the_sink() {
        let (logger, sink) = logger();
        logger.log(args![
            "hello",
            LogOptions::new().label("X").style("color: red"),
            1,
            2
        ]);

        assert_eq!(
            sink.entries(),
            vec![Entry::Write {
                level: LogLevel::Log,
                prefix: "%cX%chello".to_string(),
                label_style: "color: red".to_string(),
                message_style: MESSAGE_STYLE.to_string(),
                rest: vec![Value::Int(1), Value::Int(2)],
            }]
        );
    }

    #[test]
    fn no_arguments_use_the_defaults() {
        let (logger, sink) = logger();
        logger.log(args![]);

        let Some(Entry::Write {
            prefix,
            label_style,
            rest,
            ..
        }) = sink.last_write()
        else {
            panic!("expected a write");
        };
        assert_eq!(prefix, "%cDEV MODE MESSAGE%c");
        assert_eq!(label_style, make_label_style("#3498db"));
        assert!(rest.is_empty());
    }

    #[test]
    fn non_string_first_argument_is_data() {
        let (logger, sink) = logger();
        let data = Object::new().with("a", 1);
        logger.log(args![data.clone()]);

        let entry = sink.last_write().unwrap();
        assert_eq!(entry.prefix(), Some("%cDEV MODE MESSAGE%c"));
        assert_eq!(entry.rest().len(), 1);
        assert!(entry.rest()[0].same_handle(&Value::Object(data)));
    }

    #[test]
    fn partial_options_fill_from_defaults() {
        let (logger, sink) = logger();
        logger.info(args!["m", LogOptions::new().label(LogTag::Info)]);

        let Some(Entry::Write {
            prefix,
            label_style,
            ..
        }) = sink.last_write()
        else {
            panic!("expected a write");
        };
        assert_eq!(prefix, "%cINFO%cm");
        assert_eq!(label_style, make_label_style("#3498db"));
    }

    #[test]
    fn label_shaped_data_is_not_options() {
        let (logger, sink) = logger();
        let lookalike = Object::new().with("label", "Y");
        logger.log(args!["msg", lookalike]);

        let entry = sink.last_write().unwrap();
        assert_eq!(entry.prefix(), Some("%cDEV MODE MESSAGE%cmsg"));
        assert_eq!(entry.rest()[0].get("label").unwrap(), "Y");
    }

    #[test]
    fn later_options_are_demoted_to_data() {
        let (logger, sink) = logger();
        logger.log(args!["msg", 1, LogOptions::new().label("late")]);

        let entry = sink.last_write().unwrap();
        assert_eq!(entry.prefix(), Some("%cDEV MODE MESSAGE%cmsg"));
        assert_eq!(entry.rest().len(), 2);
        assert_eq!(entry.rest()[1].get("label").unwrap(), "late");
    }

    #[test]
    fn arrays_are_always_data() {
        let (logger, sink) = logger();
        logger.log(args!["msg", vec!["label"]]);

        let entry = sink.last_write().unwrap();
        assert_eq!(entry.rest()[0].at(0).unwrap(), "label");
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn muted_levels_are_not_written() {
        let (logger, sink) = logger();
        assert!(logger.gate().mute(LogLevel::Warn));
        logger.warn(args!["hidden"]);
        logger.error(args!["shown"]);
        assert!(logger.gate().unmute(LogLevel::Warn));
        logger.warn(args!["back"]);

        let prefixes: Vec<_> = sink
            .writes()
            .iter()
            .filter_map(|entry| entry.prefix().map(str::to_string))
            .collect();
        assert_eq!(
            prefixes,
            ["%cDEV MODE MESSAGE%cshown", "%cDEV MODE MESSAGE%cback"]
        );
    }
}

mod plugins {
    use super::*;

    #[test]
    fn transforms_compose_in_registration_order() {
        let (logger, sink) = logger();
        logger.use_plugin(Suffix("-a"));
        logger.use_plugin(Journal {
            name: "noop",
            calls: Rc::default(),
        });
        logger.use_plugin(Suffix("-b"));
        logger.log(args!["m"]);

        assert_eq!(
            sink.last_write().unwrap().prefix(),
            Some("%cDEV MODE MESSAGE%cm-a-b")
        );
    }

    #[test]
    fn hooks_fire_in_order_around_the_write() {
        let (logger, sink) = logger();
        let calls = Rc::new(RefCell::new(Vec::new()));
        logger.use_plugin(Journal {
            name: "p1",
            calls: Rc::clone(&calls),
        });
        logger.use_plugin(Journal {
            name: "p2",
            calls: Rc::clone(&calls),
        });

        logger.info(args!["m"]);

        assert_eq!(
            *calls.borrow(),
            ["p1:before:info", "p2:before:info", "p1:after:info", "p2:after:info"]
        );
        assert_eq!(sink.writes().len(), 1);
    }

    #[test]
    fn hooks_see_the_transformed_payload() {
        struct Witness(Rc<RefCell<Option<String>>>);

        impl Plugin for Witness {
            fn before_log(&self, event: &LogEvent<'_>) {
                *self.0.borrow_mut() = Some(event.message().to_string());
            }
        }

        let (logger, _sink) = logger();
        let seen = Rc::new(RefCell::new(None));
        logger.use_plugin(Suffix("!"));
        logger.use_plugin(Witness(Rc::clone(&seen)));
        logger.log(args!["m"]);

        assert_eq!(seen.borrow().as_deref(), Some("m!"));
    }

    #[test]
    fn shared_instance_registered_twice_runs_twice() {
        let (logger, sink) = logger();
        let suffix: Rc<dyn Plugin> = Rc::new(Suffix("+"));
        logger.use_shared_plugin(Rc::clone(&suffix));
        logger.use_shared_plugin(suffix);
        logger.log(args!["m"]);

        assert_eq!(logger.plugins().len(), 2);
        assert_eq!(
            sink.last_write().unwrap().prefix(),
            Some("%cDEV MODE MESSAGE%cm++")
        );
    }

    #[test]
    fn parse_runs_transforms_without_writing() {
        let (logger, sink) = logger();
        logger.use_plugin(Suffix("?"));
        let call = logger.parse(args!["m", LogOptions::new().label("L"), true]);

        assert_eq!(call.message, "m?");
        assert_eq!(call.options.label, "L");
        assert_eq!(call.rest, [Value::Bool(true)]);
        assert!(sink.entries().is_empty());
    }
}
