//! Label styles and the built-in label tags.
//!
//! A style is an opaque descriptor string (CSS-like declarations). Sinks that
//! understand it may use it, others ignore it. [`make_label_style`] never
//! validates the color token; it is embedded verbatim.

use std::fmt;

/// Color used for the default label style.
pub const DEFAULT_LABEL_COLOR: &str = "#3498db";

/// Style applied to the message segment that follows the label.
pub const MESSAGE_STYLE: &str = "color: inherit";

/// Builds the display style for a label drawn in `color`.
///
/// ```rust
/// let style = stylog::make_label_style("red");
/// assert!(style.contains("color: red;"));
/// assert!(style.contains("border: 1px solid red;"));
/// ```
#[must_use]
pub fn make_label_style(color: &str) -> String {
    format!(
        "display: inline-block; border: 1px solid {color}; color: {color}; \
         padding: 1px 4px; border-radius: 4px; margin-right: 8px;"
    )
}

/// Extracts the value of the `color` declaration from a style descriptor.
///
/// Returns `None` when the descriptor has no `color:` declaration or its value
/// is empty. `border-color` and similar declarations are not matched.
#[must_use]
pub fn parse_style_color(style: &str) -> Option<&str> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .find(|(property, _)| property.trim().eq_ignore_ascii_case("color"))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// The built-in label tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogTag {
    Default,
    Info,
    Warning,
    Error,
    Debug,
}

impl LogTag {
    /// Display string of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogTag::Default => "DEV MODE MESSAGE",
            LogTag::Info => "INFO",
            LogTag::Warning => "WARNING",
            LogTag::Error => "ERROR",
            LogTag::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogTag> for String {
    fn from(tag: LogTag) -> Self {
        tag.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{LogTag, make_label_style, parse_style_color};

    #[test]
    fn label_style_is_deterministic() {
        assert_eq!(make_label_style("teal"), make_label_style("teal"));
    }

    #[test]
    fn label_style_embeds_any_token_verbatim() {
        let style = make_label_style("not a color");
        assert!(style.contains("color: not a color;"));
    }

    #[test]
    fn parses_color_declaration() {
        assert_eq!(parse_style_color("color: purple"), Some("purple"));
        assert_eq!(
            parse_style_color(&make_label_style("#ff0000")),
            Some("#ff0000")
        );
        assert_eq!(parse_style_color("background: red; COLOR : white;"), Some("white"));
    }

    #[test]
    fn ignores_compound_color_properties() {
        assert_eq!(parse_style_color("border-color: red"), None);
        assert_eq!(parse_style_color("color:"), None);
        assert_eq!(parse_style_color(""), None);
    }

    #[test]
    fn tags_render_their_labels() {
        assert_eq!(LogTag::Default.as_str(), "DEV MODE MESSAGE");
        assert_eq!(String::from(LogTag::Warning), "WARNING");
        assert_eq!(LogTag::Debug.to_string(), "DEBUG");
    }
}
