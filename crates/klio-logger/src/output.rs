//! crates/klio-logger/src/output.rs
//! Shared handle to the byte sink a logger writes to.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a writable sink.
///
/// Loggers never own their sink outright: every clone of an [`Output`] (and
/// so every logger derived from another) refers to the same writer. The
/// writer sits behind a mutex and each log line is handed to it in a single
/// [`write_all`](Write::write_all) call, so lines from different threads never
/// interleave.
///
/// # Examples
///
/// Keep a handle to the buffer to inspect what was written:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use klio_logger::{Logger, Output};
///
/// let buffer = Arc::new(Mutex::new(Vec::new()));
/// let logger = Logger::new(Output::from_shared(Arc::clone(&buffer)));
/// logger.print("hello");
///
/// let written = buffer.lock().unwrap();
/// assert!(written.ends_with(b"hello\x1b_klio_reset\x1b\\\n"));
/// ```
#[derive(Clone)]
pub struct Output {
    writer: Arc<Mutex<dyn Write + Send>>,
}

impl Output {
    /// Wraps `writer` in a new shared handle.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_shared(Arc::new(Mutex::new(writer)))
    }

    /// Uses a writer the caller already shares.
    ///
    /// The caller keeps its own `Arc` and can lock it later to inspect or
    /// recover the writer.
    #[must_use]
    pub fn from_shared<W>(writer: Arc<Mutex<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self { writer }
    }

    /// Handle to the process's standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Handle to the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Reports whether both handles refer to the same writer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.writer), Arc::as_ptr(&other.writer))
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    pub(crate) fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }

    // A writer that panicked mid-line is still usable for the next one.
    fn lock(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &Arc::as_ptr(&self.writer).cast::<()>())
            .finish()
    }
}
