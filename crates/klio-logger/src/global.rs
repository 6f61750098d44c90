//! crates/klio-logger/src/global.rs
//! Process-wide loggers and the level-named convenience functions.
//!
//! Both loggers are created on first access and live until the process
//! exits. They are only reachable through [`standard_logger`] and
//! [`error_logger`].

use std::fmt::{self, Display};
use std::sync::OnceLock;

use crate::level::Level;
use crate::logger::Logger;
use crate::mutable::MutableLogger;
use crate::output::Output;

static STANDARD_LOGGER: OnceLock<MutableLogger> = OnceLock::new();
static ERROR_LOGGER: OnceLock<MutableLogger> = OnceLock::new();

/// Shared logger for regular output.
///
/// Writes to stdout at [`Level::Info`] until reconfigured. The level-named
/// functions in this crate all go through it.
#[must_use]
pub fn standard_logger() -> &'static MutableLogger {
    STANDARD_LOGGER.get_or_init(|| MutableLogger::new(Output::stdout()))
}

/// Shared logger for error output.
///
/// Writes to stderr at [`Level::Error`] until reconfigured.
#[must_use]
pub fn error_logger() -> &'static MutableLogger {
    ERROR_LOGGER.get_or_init(|| {
        MutableLogger::from_logger(Logger::new(Output::stderr()).with_level(Level::Error))
    })
}

fn print_at<T>(level: Level, message: T)
where
    T: Display,
{
    standard_logger().with_level(level).print(message);
}

fn printf_at(level: Level, args: fmt::Arguments<'_>) {
    standard_logger().with_level(level).printf(args);
}

/// Writes `message` at [`Level::Fatal`] on the standard logger.
///
/// Only the level changes; the process keeps running.
pub fn fatal<T: Display>(message: T) {
    print_at(Level::Fatal, message);
}

/// Writes `message` at [`Level::Error`] on the standard logger.
pub fn error<T: Display>(message: T) {
    print_at(Level::Error, message);
}

/// Writes `message` at [`Level::Warn`] on the standard logger.
pub fn warn<T: Display>(message: T) {
    print_at(Level::Warn, message);
}

/// Writes `message` at [`Level::Info`] on the standard logger.
pub fn info<T: Display>(message: T) {
    print_at(Level::Info, message);
}

/// Writes `message` at [`Level::Verbose`] on the standard logger.
pub fn verbose<T: Display>(message: T) {
    print_at(Level::Verbose, message);
}

/// Writes `message` at [`Level::Debug`] on the standard logger.
pub fn debug<T: Display>(message: T) {
    print_at(Level::Debug, message);
}

/// Writes `message` at [`Level::Spam`] on the standard logger.
pub fn spam<T: Display>(message: T) {
    print_at(Level::Spam, message);
}

/// Formatted variant of [`fatal`]; see [`fatal_log!`](crate::fatal_log).
pub fn fatalf(args: fmt::Arguments<'_>) {
    printf_at(Level::Fatal, args);
}

/// Formatted variant of [`error()`]; see [`error_log!`](crate::error_log).
pub fn errorf(args: fmt::Arguments<'_>) {
    printf_at(Level::Error, args);
}

/// Formatted variant of [`warn`]; see [`warn_log!`](crate::warn_log).
pub fn warnf(args: fmt::Arguments<'_>) {
    printf_at(Level::Warn, args);
}

/// Formatted variant of [`info`]; see [`info_log!`](crate::info_log).
pub fn infof(args: fmt::Arguments<'_>) {
    printf_at(Level::Info, args);
}

/// Formatted variant of [`verbose`]; see [`verbose_log!`](crate::verbose_log).
pub fn verbosef(args: fmt::Arguments<'_>) {
    printf_at(Level::Verbose, args);
}

/// Formatted variant of [`debug`]; see [`debug_log!`](crate::debug_log).
pub fn debugf(args: fmt::Arguments<'_>) {
    printf_at(Level::Debug, args);
}

/// Formatted variant of [`spam`]; see [`spam_log!`](crate::spam_log).
pub fn spamf(args: fmt::Arguments<'_>) {
    printf_at(Level::Spam, args);
}
