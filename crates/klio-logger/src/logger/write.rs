//! crates/klio-logger/src/logger/write.rs
//! `io::Write` adapter that decorates each line of raw output.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use super::Logger;

/// Size of the line buffer used by the `io::Write` adapter.
///
/// A line, including any trailing `\r`, must be shorter than this so that it
/// and its terminator fit the buffer together.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Failure while splitting raw output into lines.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanError {
    /// A single line did not fit within [`MAX_LINE_LEN`].
    #[error("log line of {length} bytes does not fit the {limit} byte line buffer")]
    LineTooLong {
        /// Length of the offending line, carriage return included.
        length: usize,
        /// The limit in force.
        limit: usize,
    },
}

impl From<ScanError> for io::Error {
    fn from(error: ScanError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

/// Splits `buf` on `\n`, dropping one trailing `\r` from each line.
///
/// A final line without a terminator is still returned. Every line is checked
/// against [`MAX_LINE_LEN`] before any is returned; the check counts the
/// carriage return.
pub(crate) fn split_lines(buf: &[u8]) -> Result<Vec<&[u8]>, ScanError> {
    let mut lines = Vec::new();
    let mut rest = buf;

    while !rest.is_empty() {
        let (line, tail) = match memchr::memchr(b'\n', rest) {
            Some(end) => (&rest[..end], &rest[end + 1..]),
            None => (rest, &rest[rest.len()..]),
        };
        if line.len() >= MAX_LINE_LEN {
            return Err(ScanError::LineTooLong {
                length: line.len(),
                limit: MAX_LINE_LEN,
            });
        }
        lines.push(line.strip_suffix(b"\r").unwrap_or(line));
        rest = tail;
    }

    Ok(lines)
}

impl Write for &Logger {
    /// Emits each line of `buf` as its own decorated line.
    ///
    /// Lines are not carried over between calls: a line split across two
    /// writes comes out as two lines. On a [`ScanError`] nothing is emitted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in split_lines(buf)? {
            self.emit(line);
        }
        Ok(buf.len())
    }

    // Formats the whole message first so `write!` yields whole lines.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let text = fmt::format(args);
        self.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl Write for Logger {
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
