//! The logging facade.
//!
//! A [`Logger`] owns a sink, the default label and style, a plugin
//! [`Registry`] and the [`SinkGate`]. Every call runs to completion:
//!
//! 1. parse the arguments into message, options and rest;
//! 2. thread message and rest through the transform chain;
//! 3. `before_log` on every plugin;
//! 4. write the record to the sink method for the level, unless muted;
//! 5. `after_log` on every plugin.
//!
//! Hooks run over a snapshot of the registry taken at the start of the call,
//! so a plugin registered from inside a hook takes effect on the next call.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    gate::SinkGate,
    level::LogLevel,
    options::{Arg, ParsedCall, ResolvedOptions},
    plugin::{LogEvent, Payload, Plugin, Registry},
    sink::{ConsoleSink, Record, Sink},
    style::{DEFAULT_LABEL_COLOR, LogTag, make_label_style},
};

/// Styled logger with a plugin pipeline.
///
/// ```rust
/// use stylog::{LogOptions, LogTag, Logger, MemorySink, args};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(sink.clone());
/// logger.warn(args!["disk almost full", LogOptions::new().label(LogTag::Warning), 93]);
///
/// let entry = sink.last_write().unwrap();
/// assert_eq!(entry.prefix(), Some("%cWARNING%cdisk almost full"));
/// ```
pub struct Logger {
    sink: Box<dyn Sink>,
    defaults: ResolvedOptions,
    registry: RefCell<Registry>,
    gate: SinkGate,
}

impl Logger {
    /// Logger writing to `sink` with default label and style.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::builder().sink(sink).build()
    }

    /// Logger writing to the terminal.
    #[must_use]
    pub fn console() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Appends a plugin to the registry.
    pub fn use_plugin(&self, plugin: impl Plugin + 'static) {
        self.use_shared_plugin(Rc::new(plugin));
    }

    /// Appends an already shared plugin. Registering the same instance twice
    /// runs it twice.
    pub fn use_shared_plugin(&self, plugin: Rc<dyn Plugin>) {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(plugin = plugin.name(), "plugin registered");
        self.registry.borrow_mut().register_shared(plugin);
    }

    /// A snapshot of the registered plugins.
    #[must_use]
    pub fn plugins(&self) -> Registry {
        self.registry.borrow().clone()
    }

    /// Label and style used when a call supplies no options.
    #[must_use]
    pub fn defaults(&self) -> &ResolvedOptions {
        &self.defaults
    }

    /// The mute table consulted before every write.
    #[must_use]
    pub fn gate(&self) -> &SinkGate {
        &self.gate
    }

    /// Parses `args` and runs the transform chain, without writing anything.
    pub fn parse(&self, args: impl IntoIterator<Item = Arg>) -> ParsedCall {
        self.parse_with(&self.plugins(), args)
    }

    pub fn log(&self, args: impl IntoIterator<Item = Arg>) {
        self.emit(LogLevel::Log, args);
    }

    pub fn info(&self, args: impl IntoIterator<Item = Arg>) {
        self.emit(LogLevel::Info, args);
    }

    pub fn warn(&self, args: impl IntoIterator<Item = Arg>) {
        self.emit(LogLevel::Warn, args);
    }

    pub fn error(&self, args: impl IntoIterator<Item = Arg>) {
        self.emit(LogLevel::Error, args);
    }

    /// Runs the full pipeline for one call at `level`.
    ///
    /// A panicking hook propagates to the caller. Mutes installed during the
    /// call are lifted on the way out.
    pub fn emit(&self, level: LogLevel, args: impl IntoIterator<Item = Arg>) {
        let plugins = self.plugins();
        let ParsedCall {
            message,
            options,
            rest,
        } = self.parse_with(&plugins, args);

        let _scope = self.gate.scope();
        let event = LogEvent::new(level, &message, &rest, &self.gate);
        plugins.before_log(&event);
        self.write(
            level,
            &Record::new(&options.label, &message, &options.style, &rest),
        );
        plugins.after_log(&event);
    }

    fn parse_with(&self, plugins: &Registry, args: impl IntoIterator<Item = Arg>) -> ParsedCall {
        let ParsedCall {
            message,
            options,
            rest,
        } = ParsedCall::parse(args, &self.defaults);
        let payload = plugins.transform(Payload::new(message, rest));
        ParsedCall {
            message: payload.message,
            options,
            rest: payload.rest,
        }
    }

    /// Writes straight to the sink, honoring the gate.
    pub(crate) fn write(&self, level: LogLevel, record: &Record<'_>) {
        if !self.gate.is_muted(level) {
            level.write_to(self.sink.as_ref(), record);
        }
    }

    pub(crate) fn clear(&self) {
        self.sink.clear();
    }
}

impl std::default::Default for Logger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("defaults", &self.defaults)
            .field("plugins", &*self.registry.borrow())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
///
/// ```rust
/// use stylog::{DevOnly, Logger, MemorySink, RedactSensitive};
///
/// let logger = Logger::builder()
///     .sink(MemorySink::new())
///     .label("API")
///     .color("tomato")
///     .plugin(RedactSensitive::new())
///     .plugin(DevOnly::new())
///     .build();
/// assert_eq!(logger.plugins().len(), 2);
/// assert_eq!(logger.defaults().label, "API");
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    sink: Option<Box<dyn Sink>>,
    label: Option<String>,
    style: Option<String>,
    registry: Registry,
}

impl LoggerBuilder {
    /// Output sink. Defaults to [`ConsoleSink`].
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Default label. Defaults to [`LogTag::Default`].
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Default label style built from `color`.
    #[must_use]
    pub fn color(self, color: &str) -> Self {
        self.style(make_label_style(color))
    }

    /// Default label style, verbatim.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Registers a plugin.
    #[must_use]
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.registry.register(plugin);
        self
    }

    /// Starts from an existing registry. Replaces plugins added so far.
    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let defaults = ResolvedOptions {
            label: self.label.unwrap_or_else(|| LogTag::Default.into()),
            style: self
                .style
                .unwrap_or_else(|| make_label_style(DEFAULT_LABEL_COLOR)),
        };
        Logger {
            sink: self.sink.unwrap_or_else(|| Box::new(ConsoleSink::new())),
            defaults,
            registry: RefCell::new(self.registry),
            gate: SinkGate::new(),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
