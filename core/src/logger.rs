//! Named, leveled logger capability.
//!
//! # Design
//! Components depend on `Arc<dyn Logger>` and never on a concrete sink, so tests
//! can swap in a recording implementation. `TracingLogger` is the production
//! adapter: it forwards to `tracing`, tagging each message with its level and
//! the name of the component that owns it.

use std::fmt;

/// Extra values attached to a log call.
pub type Extra<'a> = &'a [&'a dyn fmt::Debug];

/// A named logger with four levels.
pub trait Logger: Send + Sync {
    /// Name of the component this logger belongs to.
    fn name(&self) -> &str;

    fn error(&self, msg: &str, extra: Extra<'_>);

    fn warn(&self, msg: &str, extra: Extra<'_>);

    fn info(&self, msg: &str, extra: Extra<'_>);

    fn debug(&self, msg: &str, extra: Extra<'_>);
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Logger").field(&self.name()).finish()
    }
}

/// A type that can own a named logger.
pub trait Component {
    const NAME: &'static str;
}

/// Registry key for the logger owned by `owner`.
pub fn logger_token(owner: &str) -> String {
    format!("{owner}Logger")
}

/// `Logger` backed by `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn format_extra(extra: Extra<'_>) -> Option<String> {
    if extra.is_empty() {
        None
    } else {
        Some(format!("{extra:?}"))
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn error(&self, msg: &str, extra: Extra<'_>) {
        let extra = format_extra(extra);
        tracing::error!(context = %self.name, extra = extra.as_deref(), "[ERROR] - {msg}");
    }

    fn warn(&self, msg: &str, extra: Extra<'_>) {
        let extra = format_extra(extra);
        tracing::warn!(context = %self.name, extra = extra.as_deref(), "[WARN] - {msg}");
    }

    fn info(&self, msg: &str, extra: Extra<'_>) {
        let extra = format_extra(extra);
        tracing::info!(context = %self.name, extra = extra.as_deref(), "[INFO] - {msg}");
    }

    fn debug(&self, msg: &str, extra: Extra<'_>) {
        let extra = format_extra(extra);
        tracing::debug!(context = %self.name, extra = extra.as_deref(), "[DEBUG] - {msg}");
    }
}
