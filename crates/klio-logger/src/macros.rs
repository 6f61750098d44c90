//! crates/klio-logger/src/macros.rs
//! `format!`-style wrappers around the level-named functions.
//!
//! Each macro formats its arguments with [`format_args!`] and writes one line
//! at its level through the standard logger.

/// Write a formatted line at `fatal` level.
///
/// # Example
/// ```no_run
/// klio_logger::fatal_log!("cannot open {}", "config.yaml");
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)*) => {
        $crate::fatalf(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `error` level.
///
/// # Example
/// ```no_run
/// klio_logger::error_log!("step {} failed", 3);
/// ```
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::errorf(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `warn` level.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::warnf(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `info` level.
///
/// # Example
/// ```no_run
/// let count = 12;
/// klio_logger::info_log!("built {count} targets");
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::infof(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `verbose` level.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        $crate::verbosef(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `debug` level.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debugf(::std::format_args!($($arg)*))
    };
}

/// Write a formatted line at `spam` level.
#[macro_export]
macro_rules! spam_log {
    ($($arg:tt)*) => {
        $crate::spamf(::std::format_args!($($arg)*))
    };
}
