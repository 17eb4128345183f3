//! The query logger.
//!
//! [`QueryLogger`] turns a [`QueryEvent`] into one log line and hands it to a
//! sink. It does not subscribe to anything itself: whatever delivers query
//! completion events calls [`QueryLogger::log`] or [`QueryLogger::handle`].
//!
//! A colored line looks like
//!
//! ```text
//! <line color>[Repo] QUERY OK source="posts" db=1.2ms UPDATE "posts" SET "title" = <blue>'Hi'<line color> WHERE "id" = <blue>1<line color> ↳ app/posts.rs:12<reset>
//! ```

use querylog_console::{Color, RESET, inline_params, inline_params_plain};
use querylog_core::{Result, Value};

use crate::config::LoggerConfig;
use crate::event::QueryEvent;
use crate::sink::{LogSink, TracingSink};
use crate::stacktrace;

/// Formats query events and delivers them to a sink.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use querylog::{ColorMode, LoggerConfig, MemorySink, QueryEvent, QueryLogger};
/// use querylog_core::Dialect;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = QueryLogger::new(
///     LoggerConfig::new().with_color_mode(ColorMode::Never),
///     Arc::clone(&sink),
/// );
///
/// let event = QueryEvent::new("SELECT * FROM users WHERE id = $1", Dialect::Postgres)
///     .bind(7)
///     .duration_secs(0.0012)
///     .source("users");
/// logger.log(&event).unwrap();
///
/// assert_eq!(
///     sink.lines(),
///     vec![r#"QUERY OK source="users" db=1.2ms SELECT * FROM users WHERE id = 7"#]
/// );
/// ```
#[derive(Debug)]
pub struct QueryLogger<S: LogSink = TracingSink> {
    config: LoggerConfig,
    sink: S,
}

impl QueryLogger<TracingSink> {
    /// Logger emitting through `tracing` at the configured level.
    pub fn tracing(config: LoggerConfig) -> Self {
        let sink = TracingSink::new(config.level());
        Self { config, sink }
    }
}

impl Default for QueryLogger<TracingSink> {
    fn default() -> Self {
        Self::tracing(LoggerConfig::default())
    }
}

impl<S: LogSink> QueryLogger<S> {
    /// Create a logger writing to `sink`.
    pub fn new(config: LoggerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    /// The active configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The sink lines are delivered to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the logger and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Start an event in the configured default dialect.
    pub fn event(&self, statement: impl Into<String>) -> QueryEvent {
        QueryEvent::new(statement, self.config.dialect())
    }

    /// Whether an event would produce a line.
    pub fn should_log(&self, event: &QueryEvent) -> bool {
        !event.metadata.suppress_logging
            && !self
                .config
                .is_ignored_source(event.metadata.source.as_deref())
            && !self.config.is_suppressed(&event.statement)
    }

    /// Build the log line for an event without delivering it.
    ///
    /// Returns `Ok(None)` when the event is suppressed. Fails with
    /// [`ParamCountMismatch`](querylog_core::Error::ParamCountMismatch) when a
    /// placeholder refers to a parameter that was not bound.
    pub fn format(&self, event: &QueryEvent) -> Result<Option<String>> {
        if !self.should_log(event) {
            tracing::trace!(
                target: "querylog::logger",
                source = event.metadata.source.as_deref().unwrap_or(""),
                "query event suppressed"
            );
            return Ok(None);
        }

        let color = self.config.thresholds().classify(event.duration);
        let colored = self.config.color_mode().enabled();
        let statement = if colored {
            inline_params(&event.statement, &event.params, color, event.dialect)?
        } else {
            inline_params_plain(&event.statement, &event.params, event.dialect)?
        };

        Ok(Some(self.assemble(event, color, colored, &statement)))
    }

    fn assemble(&self, event: &QueryEvent, color: Color, colored: bool, statement: &str) -> String {
        let mut line = String::with_capacity(statement.len() + 64);
        if colored {
            line.push_str(color.escape());
        }
        if let Some(repo) = self.config.repo_name() {
            line.push('[');
            line.push_str(repo);
            line.push_str("] ");
        }
        line.push_str("QUERY OK");
        if let Some(source) = &event.metadata.source {
            line.push_str(&format!(" source=\"{}\"", source));
        }
        line.push_str(" db=");
        line.push_str(&format_duration(event.duration));
        line.push(' ');
        line.push_str(statement);

        if let Some(frames) = &event.metadata.stacktrace {
            let kept = stacktrace::condense(
                frames,
                self.config.stacktrace_prefixes(),
                self.config.stacktrace_depth(),
            );
            line.push_str(&stacktrace::suffix(&kept));
        }
        if colored {
            line.push_str(RESET);
        }
        line
    }

    /// Format an event and deliver it to the sink.
    ///
    /// Errors are returned to the caller after being reported through
    /// `tracing`; nothing is written for a failed event.
    pub fn log(&self, event: &QueryEvent) -> Result<()> {
        match self.format(event) {
            Ok(Some(line)) => {
                self.sink.write(&line);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    target: "querylog::logger",
                    error = %e,
                    dialect = %event.dialect,
                    params = event.params.len(),
                    "could not format query log line"
                );
                Err(e)
            }
        }
    }

    /// Log an event, discarding any error.
    ///
    /// Intended for event callbacks where a logging problem must never reach
    /// the database operation being described.
    pub fn handle(&self, event: &QueryEvent) {
        let _ = self.log(event);
    }

    /// Log a statement with its parameters and elapsed seconds in the default dialect.
    pub fn log_statement(&self, statement: &str, params: &[Value], duration: f64) -> Result<()> {
        let event = self
            .event(statement)
            .params(params.iter().cloned())
            .duration_secs(duration);
        self.log(&event)
    }
}

/// Format elapsed seconds for a log line: `1.2ms` below one second, `1.25s` above.
pub fn format_duration(secs: f64) -> String {
    if secs >= 1.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.1}ms", secs.max(0.0) * 1000.0)
    }
}
