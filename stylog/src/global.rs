//! The thread's default logger.
//!
//! The `log!`, `info!`, `warn!` and `error!` macros write through this logger.
//! It starts out as [`Logger::console`] with no plugins and lives as long as
//! the thread. [`install`] swaps in another one, for example a logger writing
//! to a [`MemorySink`](crate::MemorySink) in tests.

use std::{cell::RefCell, rc::Rc};

use crate::{logger::Logger, options::Arg, plugin::Plugin};

thread_local! {
    static LOGGER: RefCell<Rc<Logger>> = RefCell::new(Rc::new(Logger::console()));
}

/// The current default logger.
#[must_use]
pub fn logger() -> Rc<Logger> {
    LOGGER.with(|logger| Rc::clone(&logger.borrow()))
}

/// Replaces the default logger and returns the previous one.
pub fn install(logger: Logger) -> Rc<Logger> {
    LOGGER.with(|slot| slot.replace(Rc::new(logger)))
}

/// Registers a plugin on the default logger.
pub fn use_plugin(plugin: impl Plugin + 'static) {
    logger().use_plugin(plugin);
}

pub fn log(args: impl IntoIterator<Item = Arg>) {
    logger().log(args);
}

pub fn info(args: impl IntoIterator<Item = Arg>) {
    logger().info(args);
}

pub fn warn(args: impl IntoIterator<Item = Arg>) {
    logger().warn(args);
}

pub fn error(args: impl IntoIterator<Item = Arg>) {
    logger().error(args);
}

/// [`Logger::spinner`] on the default logger.
#[cfg(feature = "spinner")]
pub async fn spinner<T, E, F>(
    message: &str,
    operation: F,
    options: Option<crate::options::LogOptions>,
) -> Option<T>
where
    F: std::future::Future<Output = Result<T, E>>,
    T: crate::value::Loggable,
    E: std::fmt::Display,
{
    logger().spinner(message, operation, options).await
}
