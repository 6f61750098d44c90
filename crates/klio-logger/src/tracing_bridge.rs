//! crates/klio-logger/src/tracing_bridge.rs
//! Bridge between the tracing crate and Klio-decorated output.
//!
//! [`KlioLayer`] is a tracing-subscriber layer that renders every event as a
//! Klio line through a [`Logger`]. Programs can keep using the standard
//! tracing macros while the output stays readable by Klio.
//!
//! # Mapping
//!
//! - `ERROR`, `WARN`, `INFO`, `DEBUG` map to the Klio level of the same name;
//!   `TRACE` maps to `spam`.
//! - The event target is appended to the logger's tags.
//! - Fields other than `message` follow the message as `name=value` pairs.
//! - Events from this crate's own targets are skipped so a failing sink
//!   cannot feed back into itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use klio_logger::{init_tracing, Logger, Output};
//!
//! init_tracing(Logger::new(Output::stdout())).expect("no other subscriber");
//!
//! tracing::info!(target: "build", files = 3, "compiled");
//! ```

use std::fmt;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::Level;
use crate::logger::Logger;

const INTERNAL_TARGET: &str = "klio_logger";

/// Tracing layer that writes events as Klio lines.
#[derive(Clone, Debug)]
pub struct KlioLayer {
    logger: Logger,
}

impl KlioLayer {
    /// Creates a layer writing through `logger`.
    ///
    /// The logger's tags and mode apply to every event; its level is replaced
    /// per event.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a Klio level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Spam,
        }
    }

    fn is_internal(target: &str) -> bool {
        target == INTERNAL_TARGET
            || target
                .strip_prefix(INTERNAL_TARGET)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl<S> Layer<S> for KlioLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if Self::is_internal(target) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut tags = self.logger.tags();
        tags.push(target.to_owned());

        self.logger
            .with_level(Self::map_level(metadata.level()))
            .with_tags(tags)
            .print(visitor.finish());
    }
}

/// Collects the message and remaining fields of an event.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl EventVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let mut line = self.message;
        for field in self.fields {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&field);
        }
        line
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Install [`KlioLayer`] as the global tracing subscriber.
///
/// Fails if another global subscriber is already set.
pub fn init_tracing(logger: Logger) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(KlioLayer::new(logger))
        .try_init()
}

/// Install [`KlioLayer`] behind an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use klio_logger::{init_tracing_with_filter, Logger, Output};
/// use tracing_subscriber::filter::LevelFilter;
///
/// init_tracing_with_filter(Logger::new(Output::stderr()), LevelFilter::DEBUG)?;
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(KlioLayer::new(logger))
        .try_init()
}
