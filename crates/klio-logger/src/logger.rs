//! crates/klio-logger/src/logger.rs
//! Immutable logger values and the single line-emission routine.

use std::fmt::{self, Display};
use std::io;

use crate::config::LoggerConfig;
use crate::header::{compose_line, encode_header};
use crate::level::{Level, Mode};
use crate::output::Output;

mod write;

pub use write::{MAX_LINE_LEN, ScanError};

/// Logger whose configuration never changes once built.
///
/// Every `with_*` method returns a new logger and leaves the receiver as it
/// was. The encoded header is cached and recomputed whenever level, tags, or
/// mode change, so it always matches the configuration it is stored with.
///
/// Writing never fails from the caller's point of view: [`print`](Self::print)
/// and friends drop sink errors and return the logger for chaining. A logger
/// also implements [`io::Write`], decorating every line written through it.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use klio_logger::{Level, Logger, Output};
///
/// let buffer = Arc::new(Mutex::new(Vec::new()));
/// let base = Logger::new(Output::from_shared(Arc::clone(&buffer)));
///
/// base.with_level(Level::Warn).with_tags(["build", "x"]).print("done");
///
/// let written = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
/// assert_eq!(
///     written,
///     "\x1b_klio_log_level \"warn\"\x1b\\\x1b_klio_tags [\"build\",\"x\"]\x1b\\\
///      \x1b_klio_mode \"line\"\x1b\\done\x1b_klio_reset\x1b\\\n"
/// );
/// assert_eq!(base.level(), Level::Info);
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    output: Output,
    level: Level,
    tags: Vec<String>,
    mode: Mode,
    line_prefix: String,
}

impl Logger {
    /// Creates a logger at the default level and mode with no tags.
    #[must_use]
    pub fn new(output: Output) -> Self {
        Self::from_config(output, LoggerConfig::default())
    }

    /// Creates a logger from an explicit configuration.
    #[must_use]
    pub fn from_config(output: Output, config: LoggerConfig) -> Self {
        let LoggerConfig { level, tags, mode } = config;
        let line_prefix = encode_header(level, tags.as_slice(), mode);
        Self {
            output,
            level,
            tags,
            mode,
            line_prefix,
        }
    }

    /// Returns a copy of this logger writing at `level`.
    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        let mut derived = self.clone();
        derived.set_level(level);
        derived
    }

    /// Returns a copy of this logger using `mode`.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        let mut derived = self.clone();
        derived.set_mode(mode);
        derived
    }

    /// Returns a copy of this logger with its tags replaced by `tags`.
    ///
    /// Tags are kept in the order given, duplicates included.
    #[must_use]
    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut derived = self.clone();
        derived.set_tags(tags);
        derived
    }

    /// Returns a copy of this logger writing to `output`.
    ///
    /// The header is reused as is.
    #[must_use]
    pub fn with_output(&self, output: Output) -> Self {
        let mut derived = self.clone();
        derived.set_output(output);
        derived
    }

    /// Level written into every line.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Rendering mode written into every line.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Copy of the tags written into every line.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    /// Handle to the sink this logger writes to.
    #[must_use]
    pub fn output(&self) -> Output {
        self.output.clone()
    }

    /// The cached header prepended to every line.
    #[must_use]
    pub fn line_prefix(&self) -> &str {
        &self.line_prefix
    }

    /// Level, tags, and mode as a detached configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.level,
            tags: self.tags.clone(),
            mode: self.mode,
        }
    }

    /// Writes `message` as one decorated line.
    pub fn print<T>(&self, message: T) -> &Self
    where
        T: Display,
    {
        self.emit(message.to_string().as_bytes());
        self
    }

    /// Writes every value, separated by single spaces, as one decorated line.
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use klio_logger::{Logger, Output};
    ///
    /// let buffer = Arc::new(Mutex::new(Vec::new()));
    /// Logger::new(Output::from_shared(Arc::clone(&buffer))).print_all(["copied", "3", "files"]);
    ///
    /// let written = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    /// assert!(written.contains("\x1b\\copied 3 files\x1b_klio_reset"));
    /// ```
    pub fn print_all<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.emit(join_values(values).as_bytes());
        self
    }

    /// Writes pre-formatted arguments as one decorated line.
    ///
    /// Pair with [`format_args!`] for positional formatting:
    /// `logger.printf(format_args!("{} of {}", done, total))`.
    pub fn printf(&self, args: fmt::Arguments<'_>) -> &Self {
        self.print(args)
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
        self.refresh_prefix();
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.refresh_prefix();
    }

    pub(crate) fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.refresh_prefix();
    }

    pub(crate) fn set_output(&mut self, output: Output) {
        self.output = output;
    }

    pub(crate) fn apply(&mut self, config: LoggerConfig) {
        self.level = config.level;
        self.tags = config.tags;
        self.mode = config.mode;
        self.refresh_prefix();
    }

    fn refresh_prefix(&mut self) {
        self.line_prefix = encode_header(self.level, self.tags.as_slice(), self.mode);
    }

    /// Every emission path ends here: one composed line, one sink call.
    pub(crate) fn emit(&self, content: &[u8]) {
        let line = compose_line(&self.line_prefix, content);
        if let Err(error) = self.output.write_line(&line) {
            report_dropped_line(&error);
        }
    }
}

/// Renders `values` separated by single spaces.
pub(crate) fn join_values<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut message = String::new();
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            message.push(' ');
        }
        message.push_str(&value.to_string());
    }
    message
}

#[cfg(feature = "tracing")]
fn report_dropped_line(error: &io::Error) {
    tracing::debug!(
        target: "klio_logger::output",
        %error,
        "dropped log line after sink write failed"
    );
}

#[cfg(not(feature = "tracing"))]
const fn report_dropped_line(_error: &io::Error) {}
