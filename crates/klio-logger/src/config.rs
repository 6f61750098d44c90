//! crates/klio-logger/src/config.rs
//! Plain configuration bundle for building and reconfiguring loggers.

use crate::header::encode_header;
use crate::level::{Level, Mode};

/// Everything that shapes a logger's header, detached from any sink.
///
/// With the `serde` feature the bundle can be read from configuration files.
/// Missing fields take their defaults, and levels and modes use their
/// lowercase names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Severity written into every line.
    pub level: Level,
    /// Tags written into every line, in order.
    pub tags: Vec<String>,
    /// Rendering hint for the consumer.
    pub mode: Mode,
}

impl LoggerConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub fn new<I, S>(level: Level, tags: I, mode: Mode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level,
            tags: tags.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Encodes the header a logger with this configuration would emit.
    #[must_use]
    pub fn header(&self) -> String {
        encode_header(self.level, self.tags.as_slice(), self.mode)
    }
}
