//! Ordered plugin list and the dispatch of each hook across it.

use std::{fmt, rc::Rc};

use super::{LogEvent, Payload, Plugin};

/// Ordered, append-only list of plugins.
///
/// Order is registration order. The same instance may be registered more
/// than once and then runs once per registration.
#[derive(Clone, Default)]
pub struct Registry {
    plugins: Vec<Rc<dyn Plugin>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `plugin`.
    pub fn register(&mut self, plugin: impl Plugin + 'static) {
        self.plugins.push(Rc::new(plugin));
    }

    /// Appends an already shared plugin.
    pub fn register_shared(&mut self, plugin: Rc<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    /// Builder-style [`Registry::register`].
    #[must_use]
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.register(plugin);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Threads `payload` through every transform in order.
    #[must_use]
    pub fn transform(&self, payload: Payload) -> Payload {
        self.plugins
            .iter()
            .fold(payload, |payload, plugin| {
                plugin.transform(&payload).unwrap_or(payload)
            })
    }

    pub(crate) fn before_log(&self, event: &LogEvent<'_>) {
        for plugin in &self.plugins {
            plugin.before_log(event);
        }
    }

    pub(crate) fn after_log(&self, event: &LogEvent<'_>) {
        for plugin in &self.plugins {
            plugin.after_log(event);
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::Registry;
    use crate::{
        gate::SinkGate,
        level::LogLevel,
        plugin::{LogEvent, Payload, Plugin},
        value::Value,
    };

    struct Append(&'static str);

    impl Plugin for Append {
        fn transform(&self, payload: &Payload) -> Option<Payload> {
            let mut rest = payload.rest.clone();
            rest.push(Value::String(self.0.to_string()));
            Some(Payload::new(format!("{}{}", payload.message, self.0), rest))
        }
    }

    struct Hooks;

    impl Plugin for Hooks {}

    struct Trace {
        id: &'static str,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Plugin for Trace {
        fn before_log(&self, event: &LogEvent<'_>) {
            self.calls
                .borrow_mut()
                .push(format!("before:{}:{}", self.id, event.level()));
        }

        fn after_log(&self, event: &LogEvent<'_>) {
            self.calls
                .borrow_mut()
                .push(format!("after:{}:{}", self.id, event.level()));
        }
    }

    #[test]
    fn transforms_compose_in_registration_order() {
        let registry = Registry::new().with(Append("a")).with(Hooks).with(Append("b"));
        let payload = registry.transform(Payload::new("m", Vec::new()));
        assert_eq!(payload.message, "mab");
        assert_eq!(
            payload.rest,
            vec![Value::String("a".into()), Value::String("b".into())]
        );
    }

    #[test]
    fn empty_registry_is_identity() {
        let payload = Payload::new("m", vec![Value::Int(1)]);
        assert_eq!(Registry::new().transform(payload.clone()), payload);
    }

    #[test]
    fn hooks_fire_once_per_plugin_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = Registry::new()
            .with(Trace {
                id: "p1",
                calls: Rc::clone(&calls),
            })
            .with(Trace {
                id: "p2",
                calls: Rc::clone(&calls),
            });

        let gate = SinkGate::new();
        let event = LogEvent::new(LogLevel::Warn, "m", &[], &gate);
        registry.before_log(&event);
        registry.after_log(&event);

        assert_eq!(
            *calls.borrow(),
            ["before:p1:warn", "before:p2:warn", "after:p1:warn", "after:p2:warn"]
        );
    }

    #[test]
    fn shared_plugin_runs_once_per_registration() {
        let shared: Rc<dyn Plugin> = Rc::new(Append("x"));
        let mut registry = Registry::new();
        registry.register_shared(Rc::clone(&shared));
        registry.register_shared(shared);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.transform(Payload::default()).message, "xx");
    }

    #[test]
    fn names_default_to_type_names() {
        let registry = Registry::new().with(Hooks);
        assert!(registry.names()[0].ends_with("Hooks"));
    }
}
