//! Integration tests for the process-wide loggers and level functions.
//!
//! The standard and error loggers are shared by every test in this binary, so
//! each test holds `global_lock` and restores the configuration it changed.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use klio_logger::{
    Level, LoggerConfig, Mode, Output, debug, debug_log, debugf, error, error_log, error_logger,
    errorf, fatal, fatal_log, fatalf, info, info_log, infof, spam, spam_log, spamf,
    standard_logger, verbose, verbose_log, verbosef, warn, warn_log, warnf,
};

fn global_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Points the standard logger at a buffer for the duration of a test.
struct Redirect {
    buffer: Arc<Mutex<Vec<u8>>>,
    previous: Output,
    _guard: MutexGuard<'static, ()>,
}

impl Redirect {
    fn standard() -> Self {
        let guard = global_lock();
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let previous = standard_logger().output();
        standard_logger().set_output(Output::from_shared(Arc::clone(&buffer)));
        standard_logger().configure(LoggerConfig::default());
        Self {
            buffer,
            previous,
            _guard: guard,
        }
    }

    fn lines(&self) -> Vec<String> {
        let bytes = self.buffer.lock().expect("lock").clone();
        String::from_utf8(bytes)
            .expect("utf-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Drop for Redirect {
    fn drop(&mut self) {
        standard_logger().configure(LoggerConfig::default());
        standard_logger().set_output(self.previous.clone());
    }
}

fn level_of(line: &str) -> &str {
    let start = line.find('"').expect("level value") + 1;
    let end = start + line[start..].find('"').expect("closing quote");
    &line[start..end]
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Verifies both accessors hand out the same instance every time.
#[test]
fn accessors_return_the_same_instance() {
    let _guard = global_lock();
    assert!(std::ptr::eq(standard_logger(), standard_logger()));
    assert!(std::ptr::eq(error_logger(), error_logger()));
    assert!(!std::ptr::eq(standard_logger(), error_logger()));
}

/// Verifies the standard and error loggers write to separate sinks.
#[test]
fn global_loggers_use_separate_outputs() {
    let _guard = global_lock();
    assert!(!error_logger().output().ptr_eq(&standard_logger().output()));
}

/// Verifies the error logger starts at error level.
#[test]
fn error_logger_defaults_to_error_level() {
    let _guard = global_lock();
    assert_eq!(error_logger().level(), Level::Error);
    assert_eq!(error_logger().mode(), Mode::Line);
    assert!(error_logger().tags().is_empty());
}

/// Verifies setters are seen through references taken before and after.
#[test]
fn set_level_is_shared_between_references() {
    let _redirect = Redirect::standard();
    let before = standard_logger();

    before.set_level(Level::Verbose);
    let after = standard_logger();

    assert_eq!(before.level(), Level::Verbose);
    assert_eq!(after.level(), Level::Verbose);
}

/// Verifies mutating the error logger leaves the standard logger alone.
#[test]
fn error_logger_is_independent() {
    let _redirect = Redirect::standard();

    error_logger().set_tags(["stderr-only"]);

    assert!(standard_logger().tags().is_empty());
    assert_eq!(error_logger().tags(), ["stderr-only"]);
    error_logger().set_tags(Vec::<String>::new());
}

// ============================================================================
// Level Function Tests
// ============================================================================

/// Verifies each plain function writes one line at its level.
#[test]
fn plain_functions_write_at_their_level() {
    let redirect = Redirect::standard();

    fatal("f");
    error("e");
    warn("w");
    info("i");
    verbose("v");
    debug("d");
    spam("s");

    let lines = redirect.lines();
    let levels: Vec<&str> = lines.iter().map(|line| level_of(line)).collect();
    assert_eq!(
        levels,
        ["fatal", "error", "warn", "info", "verbose", "debug", "spam"]
    );
}

/// Verifies each formatted function formats before writing.
#[test]
fn formatted_functions_write_at_their_level() {
    let redirect = Redirect::standard();

    fatalf(format_args!("{}", 1));
    errorf(format_args!("{}", 2));
    warnf(format_args!("{}", 3));
    infof(format_args!("{}", 4));
    verbosef(format_args!("{}", 5));
    debugf(format_args!("{}", 6));
    spamf(format_args!("{}", 7));

    let lines = redirect.lines();
    assert_eq!(lines.len(), 7);
    for (index, (line, level)) in lines.iter().zip(Level::ALL).enumerate() {
        assert_eq!(level_of(line), level.as_str());
        assert!(line.contains(&format!("\x1b\\{}\x1b_klio_reset", index + 1)));
    }
}

/// Verifies the macros route through the same functions.
#[test]
fn macros_write_formatted_lines() {
    let redirect = Redirect::standard();
    let target = "api";

    fatal_log!("{target} down");
    error_log!("{} errors", 2);
    warn_log!("retrying");
    info_log!("ready");
    verbose_log!("cache hit");
    debug_log!("state={:?}", Some(1));
    spam_log!("tick");

    let lines = redirect.lines();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains("api down"));
    assert!(lines[1].contains("2 errors"));
    assert!(lines[5].contains("state=Some(1)"));
}

/// Verifies level functions keep the standard logger's tags and mode.
#[test]
fn level_functions_use_current_tags_and_mode() {
    let redirect = Redirect::standard();
    standard_logger().set_tags(["deploy"]);
    standard_logger().set_mode(Mode::Raw);

    warn("careful");

    let lines = redirect.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\x1b_klio_tags [\"deploy\"]\x1b\\"));
    assert!(lines[0].contains("\x1b_klio_mode \"raw\"\x1b\\"));
    assert_eq!(standard_logger().level(), Level::Info);
}

/// Verifies a fatal line is only metadata and the test keeps running.
#[test]
fn fatal_does_not_terminate() {
    let redirect = Redirect::standard();
    fatal("still here");
    info("after fatal");
    assert_eq!(redirect.lines().len(), 2);
}
