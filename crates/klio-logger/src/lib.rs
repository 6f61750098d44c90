#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/klio-logger/src/lib.rs
//!
//! # Overview
//!
//! `klio-logger` writes log lines decorated with the control sequences read
//! by [Klio](https://github.com/g2a-com/klio). Each line carries its severity
//! level, a list of tags, and a rendering mode in an out-of-band header; the
//! message itself is written unchanged. Klio strips or interprets the header
//! when presenting output.
//!
//! # Design
//!
//! - [`Logger`] is an immutable value: output sink, [`Level`], tags, and
//!   [`Mode`], plus the header they encode to. `with_*` methods derive new
//!   loggers and never modify the receiver.
//! - [`MutableLogger`] holds the same configuration behind in-place setters.
//!   Two shared instances exist: [`standard_logger`] (stdout, `info`) and
//!   [`error_logger`] (stderr, `error`).
//! - [`fatal`], [`info`], [`debug`] and the other level-named functions, with
//!   their `*f` and `*_log!` formatted variants, write one line through the
//!   standard logger at that level.
//! - Sinks are any [`std::io::Write`] wrapped in an [`Output`] handle.
//!
//! # Wire format
//!
//! Every line is written to the sink in a single call as
//!
//! ```text
//! ESC_klio_log_level "<level>"ESC\ESC_klio_tags [<tags>]ESC\ESC_klio_mode "<mode>"ESC\<content>ESC_klio_resetESC\<LF>
//! ```
//!
//! where `ESC` is `0x1B` and `ESC\` terminates each segment. Level, tags, and
//! mode are minified JSON.
//!
//! # Invariants
//!
//! - The header depends only on level, tags, and mode, and is recomputed
//!   whenever one of them changes.
//! - Tags keep the order they were given in; no tags encode as `[]`.
//! - Levels are metadata only. Nothing is filtered, and `fatal` does not exit.
//!
//! # Errors
//!
//! Printing never reports sink errors; a failed write drops the line. With
//! the `tracing` feature the drop is reported as a `debug` event on the
//! `klio_logger::output` target. Writing through the [`std::io::Write`]
//! adapter fails with [`ScanError`] (as [`std::io::ErrorKind::InvalidData`])
//! when a line exceeds [`MAX_LINE_LEN`].
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use std::sync::{Arc, Mutex};
//! use klio_logger::{Level, Logger, Mode, Output};
//!
//! let buffer = Arc::new(Mutex::new(Vec::new()));
//! let logger = Logger::new(Output::from_shared(Arc::clone(&buffer)))
//!     .with_level(Level::Debug)
//!     .with_tags(["fetch"]);
//!
//! logger.print("resolving dependencies");
//! logger.with_mode(Mode::Raw).printf(format_args!("{}% done", 40));
//!
//! // Anything written through the adapter is decorated line by line.
//! let mut child_output = logger.with_tags(["fetch", "git"]);
//! child_output.write_all(b"Cloning into 'repo'...\nremote: done.\n").unwrap();
//!
//! let text = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
//! assert_eq!(text.lines().count(), 4);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Level`], [`Mode`], and
//!   [`LoggerConfig`].
//! - `tracing`: the `KlioLayer` tracing-subscriber bridge and diagnostics for
//!   dropped lines.

mod config;
mod global;
mod header;
mod level;
mod logger;
mod macros;
mod mutable;
mod output;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use global::{
    debug, debugf, error, error_logger, errorf, fatal, fatalf, info, infof, spam, spamf,
    standard_logger, verbose, verbosef, warn, warnf,
};
pub use header::{RESET_SEQUENCE, encode_header};
pub use level::{Level, Mode, ParseLevelError, ParseModeError, parse_level};
pub use logger::{Logger, MAX_LINE_LEN, ScanError};
pub use mutable::MutableLogger;
pub use output::Output;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{KlioLayer, init_tracing, init_tracing_with_filter};
