//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and a tierlog [`Logger`].
//!
//! [`TierLayer`] receives `tracing` events and re-emits them through a logger
//! so code instrumented with `tracing::info!` and friends lands in the same
//! stream and file sinks as direct logger calls.
//!
//! | tracing | tierlog rank |
//! |---------|--------------|
//! | ERROR   | 40 ERROR     |
//! | WARN    | 30 WARNING   |
//! | INFO    | 20 INFO      |
//! | DEBUG   | 10 DEBUG     |
//! | TRACE   | 1 FILEONLY   |
//!
//! Events targeted at `tierlog` or a `tierlog::` path are the workspace's own
//! instrumentation and are skipped; forwarding them would recurse whenever a
//! sink reports a failure.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new("app"));
//! logger.add_stream_handler(20u8);
//! init_tracing(Arc::clone(&logger))?;
//! tracing::warn!(attempt = 3, "retrying upload");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use levels::Level;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::Logger;

const OWN_TARGET: &str = "tierlog";

/// A tracing layer forwarding events into a [`Logger`].
#[derive(Debug)]
pub struct TierLayer {
    logger: Arc<Logger>,
}

impl TierLayer {
    /// Creates a layer emitting through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a tierlog rank.
    const fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARNING,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::TRACE => Level::FILE_ONLY,
        }
    }

    fn is_own_target(target: &str) -> bool {
        target
            .strip_prefix(OWN_TARGET)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }
}

impl<S> Layer<S> for TierLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if Self::is_own_target(metadata.target()) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger
            .log(Self::level_for(metadata.level()), &visitor.finish());
    }
}

/// Collects the `message` field followed by `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a global subscriber forwarding tracing events into `logger`.
pub fn init_tracing(logger: Arc<Logger>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TierLayer::new(logger))
        .try_init()
}
