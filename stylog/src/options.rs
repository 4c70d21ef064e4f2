//! Call options and argument parsing.
//!
//! A log call is a list of [`Arg`]s. Configuration travels as the
//! [`Arg::Options`] variant, so a data value is never mistaken for options no
//! matter which keys it carries.

use crate::{
    style::{DEFAULT_LABEL_COLOR, LogTag, make_label_style},
    value::{Loggable, Object, Value},
};

/// One argument of a log call.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// Loggable data.
    Value(Value),
    /// Call configuration.
    Options(LogOptions),
}

impl Arg {
    /// Returns the data representation of the argument.
    ///
    /// Options that end up outside the options slot are logged as an object.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Arg::Value(value) => value,
            Arg::Options(options) => options.to_log_value(),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<LogOptions> for Arg {
    fn from(options: LogOptions) -> Self {
        Arg::Options(options)
    }
}

/// Per-call configuration. Unset fields fall back to the logger defaults.
///
/// ```rust
/// use stylog::{LogOptions, LogTag, make_label_style};
///
/// let options = LogOptions::new()
///     .label(LogTag::Warning)
///     .style(make_label_style("orange"));
/// assert_eq!(options.label.as_deref(), Some("WARNING"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Label text.
    pub label: Option<String>,
    /// Label style descriptor.
    pub style: Option<String>,
}

impl LogOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the label style.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Merges the set fields over `defaults`.
    #[must_use]
    pub fn resolve(&self, defaults: &ResolvedOptions) -> ResolvedOptions {
        ResolvedOptions {
            label: self.label.clone().unwrap_or_else(|| defaults.label.clone()),
            style: self.style.clone().unwrap_or_else(|| defaults.style.clone()),
        }
    }
}

impl Loggable for LogOptions {
    fn to_log_value(&self) -> Value {
        let object = Object::new();
        if let Some(label) = &self.label {
            object.insert("label", label.as_str());
        }
        if let Some(style) = &self.style {
            object.insert("style", style.as_str());
        }
        Value::Object(object)
    }

    fn to_arg(&self) -> Arg {
        Arg::Options(self.clone())
    }
}

/// Options with every field defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub label: String,
    pub style: String,
}

impl ResolvedOptions {
    /// Defaults for a label drawn in `color`.
    #[must_use]
    pub fn with_color(label: impl Into<String>, color: &str) -> Self {
        Self {
            label: label.into(),
            style: make_label_style(color),
        }
    }
}

impl std::default::Default for ResolvedOptions {
    fn default() -> Self {
        Self::with_color(LogTag::Default, DEFAULT_LABEL_COLOR)
    }
}

/// A log call split into its parts.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedCall {
    pub message: String,
    pub options: ResolvedOptions,
    pub rest: Vec<Value>,
}

impl ParsedCall {
    /// Splits `args` into message, options and rest.
    ///
    /// A leading string is the message. The next argument is consumed as
    /// options only if it is [`Arg::Options`]. Everything after that is data.
    ///
    /// ```rust
    /// use stylog::{LogOptions, ParsedCall, ResolvedOptions, args};
    ///
    /// let call = ParsedCall::parse(
    ///     args!["saved", LogOptions::new().label("DB"), 42],
    ///     &ResolvedOptions::default(),
    /// );
    /// assert_eq!(call.message, "saved");
    /// assert_eq!(call.options.label, "DB");
    /// assert_eq!(call.rest.len(), 1);
    /// ```
    pub fn parse(args: impl IntoIterator<Item = Arg>, defaults: &ResolvedOptions) -> Self {
        let mut args = args.into_iter().peekable();

        let message = match args.next_if(|arg| matches!(arg, Arg::Value(Value::String(_)))) {
            Some(Arg::Value(Value::String(message))) => message,
            _ => String::new(),
        };

        let options = match args.next_if(|arg| matches!(arg, Arg::Options(_))) {
            Some(Arg::Options(options)) => options.resolve(defaults),
            _ => defaults.clone(),
        };

        Self {
            message,
            options,
            rest: args.map(Arg::into_value).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arg, LogOptions, ParsedCall, ResolvedOptions};
    use crate::{
        args,
        style::{LogTag, make_label_style},
        value::{Object, Value},
    };

    #[test]
    fn defaults_apply_without_options() {
        let call = ParsedCall::parse(args!["hello", 1], &ResolvedOptions::default());
        assert_eq!(call.message, "hello");
        assert_eq!(call.options.label, "DEV MODE MESSAGE");
        assert_eq!(call.options.style, make_label_style("#3498db"));
        assert_eq!(call.rest, vec![Value::Int(1)]);
    }

    #[test]
    fn partial_options_merge_field_by_field() {
        let call = ParsedCall::parse(
            args!["m", LogOptions::new().label(LogTag::Info)],
            &ResolvedOptions::default(),
        );
        assert_eq!(call.options.label, "INFO");
        assert_eq!(call.options.style, ResolvedOptions::default().style);
    }

    #[test]
    fn non_string_first_argument_leaves_message_empty() {
        let data = Object::new().with("a", 1);
        let call = ParsedCall::parse(args![data.clone()], &ResolvedOptions::default());
        assert_eq!(call.message, "");
        assert_eq!(call.rest, vec![Value::Object(data)]);
    }

    #[test]
    fn options_may_come_first() {
        let call = ParsedCall::parse(
            args![LogOptions::new().style("color: red"), "data"],
            &ResolvedOptions::default(),
        );
        assert_eq!(call.message, "");
        assert_eq!(call.options.style, "color: red");
        assert_eq!(call.rest, vec![Value::String("data".into())]);
    }

    #[test]
    fn data_that_looks_like_options_stays_data() {
        let lookalike = Object::new()
            .with("marker", true)
            .with("label", "X")
            .with("style", "color: red");
        let call = ParsedCall::parse(args!["m", lookalike], &ResolvedOptions::default());
        assert_eq!(call.options, ResolvedOptions::default());
        assert_eq!(call.rest.len(), 1);
    }

    #[test]
    fn later_options_are_demoted_to_data() {
        let call = ParsedCall::parse(
            args!["m", 1, LogOptions::new().label("late")],
            &ResolvedOptions::default(),
        );
        assert_eq!(call.options, ResolvedOptions::default());
        assert_eq!(call.rest[1].get("label"), Some(Value::String("late".into())));
    }

    #[test]
    fn only_one_options_argument_is_consumed() {
        let call = ParsedCall::parse(
            vec![
                Arg::from(LogOptions::new().label("first")),
                Arg::from(LogOptions::new().label("second")),
            ],
            &ResolvedOptions::default(),
        );
        assert_eq!(call.options.label, "first");
        assert_eq!(call.rest.len(), 1);
    }

    #[test]
    fn empty_call_is_all_defaults() {
        let call = ParsedCall::parse(Vec::new(), &ResolvedOptions::default());
        assert_eq!(call.message, "");
        assert!(call.rest.is_empty());
    }
}
