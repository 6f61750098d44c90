//! crates/klio-logger/src/mutable.rs
//! Logger whose configuration can be changed in place.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LoggerConfig;
use crate::level::{Level, Mode};
use crate::logger::{Logger, join_values};
use crate::output::Output;

/// Shared logger with in-place setters.
///
/// A [`MutableLogger`] offers the read and print surface of [`Logger`] plus
/// `set_*` methods that change the instance itself. Anyone holding a
/// reference sees the change on their next call. The configuration and its
/// cached header are updated together under a lock, so a print never pairs a
/// new level with an old header.
///
/// The `with_*` methods do not touch the instance; they return an immutable
/// [`Logger`] derived from the current configuration.
///
/// # Examples
///
/// ```
/// use klio_logger::{Level, MutableLogger, Output};
///
/// let logger = MutableLogger::new(Output::new(Vec::new()));
/// let shared = &logger;
///
/// logger.set_level(Level::Debug);
/// assert_eq!(shared.level(), Level::Debug);
///
/// let snapshot = shared.with_tags(["frozen"]);
/// logger.set_level(Level::Spam);
/// assert_eq!(snapshot.level(), Level::Debug);
/// ```
#[derive(Debug)]
pub struct MutableLogger {
    inner: RwLock<Logger>,
}

impl MutableLogger {
    /// Creates a mutable logger at the default level and mode with no tags.
    #[must_use]
    pub fn new(output: Output) -> Self {
        Self::from_logger(Logger::new(output))
    }

    /// Wraps an existing logger's configuration.
    #[must_use]
    pub fn from_logger(logger: Logger) -> Self {
        Self {
            inner: RwLock::new(logger),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Logger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Logger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Immutable copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> Logger {
        self.read().clone()
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.read().level()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.read().mode()
    }

    /// Copy of the current tags.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.read().tags()
    }

    /// Handle to the current sink.
    #[must_use]
    pub fn output(&self) -> Output {
        self.read().output()
    }

    /// Copy of the current header.
    #[must_use]
    pub fn line_prefix(&self) -> String {
        self.read().line_prefix().to_owned()
    }

    /// Current level, tags, and mode.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        self.read().config()
    }

    /// Immutable logger like this one but writing at `level`.
    #[must_use]
    pub fn with_level(&self, level: Level) -> Logger {
        self.read().with_level(level)
    }

    /// Immutable logger like this one but using `mode`.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Logger {
        self.read().with_mode(mode)
    }

    /// Immutable logger like this one but tagged with `tags`.
    #[must_use]
    pub fn with_tags<I, S>(&self, tags: I) -> Logger
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read().with_tags(tags)
    }

    /// Immutable logger like this one but writing to `output`.
    #[must_use]
    pub fn with_output(&self, output: Output) -> Logger {
        self.read().with_output(output)
    }

    /// Changes the level of this instance.
    pub fn set_level(&self, level: Level) {
        self.write_lock().set_level(level);
    }

    /// Changes the mode of this instance.
    pub fn set_mode(&self, mode: Mode) {
        self.write_lock().set_mode(mode);
    }

    /// Replaces the tags of this instance.
    pub fn set_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.write_lock().set_tags(tags);
    }

    /// Points this instance at a different sink.
    pub fn set_output(&self, output: Output) {
        self.write_lock().set_output(output);
    }

    /// Replaces level, tags, and mode in one step.
    pub fn configure(&self, config: LoggerConfig) {
        self.write_lock().apply(config);
    }

    /// Writes `message` as one decorated line.
    pub fn print<T>(&self, message: T) -> &Self
    where
        T: Display,
    {
        // Formatting may call back into this logger, so it runs unlocked.
        let text = message.to_string();
        self.read().emit(text.as_bytes());
        self
    }

    /// Writes every value, separated by single spaces, as one decorated line.
    pub fn print_all<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let text = join_values(values);
        self.read().emit(text.as_bytes());
        self
    }

    /// Writes pre-formatted arguments as one decorated line.
    pub fn printf(&self, args: fmt::Arguments<'_>) -> &Self {
        self.print(args)
    }
}

impl Write for &MutableLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self.read()).write(buf)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let text = fmt::format(args);
        self.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.read().output().flush()
    }
}

impl Write for MutableLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (&*self).write_fmt(args)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}
