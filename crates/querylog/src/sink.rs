//! Destinations for formatted log lines.
//!
//! A sink receives each finished line and is solely responsible for getting
//! it somewhere. Delivery problems stay inside the sink: [`LogSink::write`]
//! has nothing to return, so a broken sink can never fail the query that
//! produced the line.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Receives formatted query log lines.
pub trait LogSink: Send + Sync {
    /// Deliver one line. Must not panic on delivery failure.
    fn write(&self, line: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, line: &str) {
        (**self).write(line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, line: &str) {
        (**self).write(line);
    }
}

/// Level at which [`TracingSink`] emits lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
}

/// Emits lines as `tracing` events under the `querylog` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    /// Create a sink emitting at the given level.
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level lines are emitted at.
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl LogSink for TracingSink {
    fn write(&self, line: &str) {
        match self.level {
            LogLevel::Trace => tracing::trace!(target: "querylog", "{}", line),
            LogLevel::Debug => tracing::debug!(target: "querylog", "{}", line),
            LogLevel::Info => tracing::info!(target: "querylog", "{}", line),
            LogLevel::Warn => tracing::warn!(target: "querylog", "{}", line),
        }
    }
}

/// Writes each line, newline terminated, to any `io::Write`.
///
/// Write errors are reported through `tracing` and otherwise dropped.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<std::io::Stderr> {
    /// Sink writing to standard error.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            tracing::warn!(target: "querylog::sink", error = %e, "failed to write query log line");
        }
    }
}

/// Keeps every line in memory. Useful in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn write(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
