//! crates/klio-logger/src/level.rs
//! Severity levels and rendering modes carried in the line header.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity attached to every line a logger writes.
///
/// Levels are metadata for the consumer. The logger never compares them and
/// never drops a line because of its level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Errors causing a command to exit immediately.
    Fatal,
    /// Errors which cause a command to fail, but not immediately.
    Error,
    /// Unexpected situations and minor errors that do not fail a command.
    Warn,
    /// Generally useful information.
    #[default]
    Info,
    /// More granular but still useful information.
    Verbose,
    /// Information helpful for command developers.
    Debug,
    /// Everything else.
    Spam,
}

impl Level {
    /// Level used when nothing else is configured or parsing fails.
    pub const DEFAULT: Self = Self::Info;

    /// All levels from most to least severe.
    ///
    /// # Examples
    ///
    /// ```
    /// use klio_logger::Level;
    ///
    /// let names: Vec<&str> = Level::ALL.into_iter().map(Level::as_str).collect();
    /// assert_eq!(names, ["fatal", "error", "warn", "info", "verbose", "debug", "spam"]);
    /// ```
    pub const ALL: [Self; 7] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Verbose,
        Self::Debug,
        Self::Spam,
    ];

    /// Returns the lowercase name written into the `_klio_log_level` segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Spam => "spam",
        }
    }

    /// Looks up a level by name, ignoring ASCII case.
    ///
    /// Unknown names degrade to [`Level::DEFAULT`]; the flag reports whether
    /// the lookup matched so callers can warn about it if they care.
    ///
    /// # Examples
    ///
    /// ```
    /// use klio_logger::Level;
    ///
    /// assert_eq!(Level::parse("WARN"), (Level::Warn, true));
    /// assert_eq!(Level::parse("loud"), (Level::Info, false));
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> (Self, bool) {
        Self::lookup(name).map_or((Self::DEFAULT, false), |level| (level, true))
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] through [`FromStr`] fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level: {name:?}")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::lookup(input).ok_or_else(|| ParseLevelError {
            name: input.to_owned(),
        })
    }
}

/// Case-insensitive level lookup that never fails.
///
/// Equivalent to [`Level::parse`]: returns the matched level and `true`, or
/// [`Level::DEFAULT`] and `false` for unrecognised names.
#[must_use]
pub fn parse_level(name: &str) -> (Level, bool) {
    Level::parse(name)
}

/// Rendering hint for the consumer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Decorate the line according to the consumer's formatting.
    #[default]
    Line,
    /// Leave the line undecorated. The header is still emitted.
    Raw,
}

impl Mode {
    /// Mode used when nothing else is configured.
    pub const DEFAULT: Self = Self::Line;

    /// Both modes, default first.
    pub const ALL: [Self; 2] = [Self::Line, Self::Raw];

    /// Returns the lowercase name written into the `_klio_mode` segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Mode`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log mode: {name:?}")]
pub struct ParseModeError {
    name: String,
}

impl ParseModeError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| ParseModeError {
                name: input.to_owned(),
            })
    }
}
