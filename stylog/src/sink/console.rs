//! Colored terminal output.

use std::{
    io::{self, Write},
    ops::Range,
};

use colored::{Color, Colorize as _};

use super::{Record, Sink};
use crate::style::parse_style_color;

/// Terminal sink.
///
/// Log and info records go to stdout, warn and error records to stderr. The
/// label is painted with the `color` declaration of its style when that color
/// is a named terminal color or a `#rrggbb` hex triple.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render(record: &Record<'_>) -> String {
        let label = match parse_style_color(record.label_style()).and_then(ansi_color) {
            Some(color) => record.label().color(color).bold(),
            None => record.label().bold(),
        };
        let mut line = format!("{label} {}", record.text().trim_start());
        if !record.rest().is_empty() {
            line.push(' ');
            line.push_str(&record.render_rest());
        }
        line
    }
}

/// Writes `line` to `out`.
///
/// A closed stream (a reader that went away, say) drops the line instead of
/// panicking.
fn write_line(mut out: impl Write, line: &str) {
    let _ = writeln!(out, "{line}");
}

impl Sink for ConsoleSink {
    fn log(&self, record: &Record<'_>) {
        write_line(io::stdout().lock(), &Self::render(record));
    }

    fn info(&self, record: &Record<'_>) {
        write_line(io::stdout().lock(), &Self::render(record));
    }

    fn warn(&self, record: &Record<'_>) {
        write_line(io::stderr().lock(), &Self::render(record));
    }

    fn error(&self, record: &Record<'_>) {
        write_line(io::stderr().lock(), &Self::render(record));
    }

    fn clear(&self) {
        let mut stdout = io::stdout().lock();
        // A closed stdout has nothing left to clear.
        let _ = stdout.write_all(b"\x1B[2J\x1B[1;1H");
        let _ = stdout.flush();
    }
}

/// Maps a style color token onto a terminal color.
fn ansi_color(token: &str) -> Option<Color> {
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        return Some(Color::TrueColor {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }
    token.parse::<Color>().ok()
}
