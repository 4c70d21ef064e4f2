//! Animated feedback while a future is pending.
//!
//! The animation runs on the caller's task: a `tokio::select!` loop polls the
//! operation first and the interval second. The loop, and with it the
//! interval, is gone before the final line is written, so no tick can land
//! after it.
//!
//! A failed operation is reported on the error sink and turned into `None`.
//! The error itself does not reach the caller.

use std::{fmt, future::Future, pin::pin, time::Duration};

use tokio::time::{Instant, interval_at};

use crate::{
    level::LogLevel,
    logger::Logger,
    options::LogOptions,
    sink::Record,
    value::{Loggable, Value},
};

/// Time between two animation frames.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(200);

/// Animation frames, in order.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Marker of the success line.
pub const SUCCESS_MARK: &str = "✅";

/// Marker of the failure line.
pub const FAILURE_MARK: &str = "❌";

impl Logger {
    /// Animates `message` until `operation` settles.
    ///
    /// Each tick clears the sink and writes `" {frame} {message}"` after the
    /// label at log level. On `Ok(value)` the sink is cleared and
    /// `" ✅ {message}"` is logged with the value, which is then returned. On
    /// `Err(error)` the sink is cleared, `" ❌ {message}"` goes to the error
    /// sink with the rendered error, and `None` is returned.
    ///
    /// Spinner output bypasses the plugin pipeline.
    pub async fn spinner<T, E, F>(
        &self,
        message: &str,
        operation: F,
        options: Option<LogOptions>,
    ) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        T: Loggable,
        E: fmt::Display,
    {
        let options = options.unwrap_or_default().resolve(self.defaults());

        let outcome = {
            let mut operation = pin!(operation);
            let mut ticks = interval_at(Instant::now() + SPINNER_INTERVAL, SPINNER_INTERVAL);
            let mut frame = 0;
            loop {
                tokio::select! {
                    biased;
                    outcome = &mut operation => break outcome,
                    _ = ticks.tick() => {
                        frame = (frame + 1) % SPINNER_FRAMES.len();
                        let text = format!(" {} {message}", SPINNER_FRAMES[frame]);
                        self.clear();
                        self.write(
                            LogLevel::Log,
                            &Record::new(&options.label, &text, &options.style, &[]),
                        );
                    }
                }
            }
        };

        self.clear();
        match outcome {
            Ok(value) => {
                #[cfg(feature = "tracing")]
                ::tracing::trace!(spinner = message, "resolved");
                let text = format!(" {SUCCESS_MARK} {message}");
                let rest = [value.to_log_value()];
                self.write(
                    LogLevel::Log,
                    &Record::new(&options.label, &text, &options.style, &rest),
                );
                Some(value)
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                ::tracing::trace!(spinner = message, "rejected");
                let text = format!(" {FAILURE_MARK} {message}");
                let rest = [Value::Error(error.to_string())];
                self.write(
                    LogLevel::Error,
                    &Record::new(&options.label, &text, &options.style, &rest),
                );
                None
            }
        }
    }
}
