//! Query completion events.
//!
//! A [`QueryEvent`] is what the database layer hands over once a statement
//! has finished: the raw text, its bound parameters, how long it took and a
//! little metadata. How the event reaches the logger is up to the caller.

use std::time::Duration;

use querylog_core::{Dialect, Result, Value};

/// Free-form metadata attached to a query event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMetadata {
    /// Table or model the query was issued for.
    pub source: Option<String>,
    /// Call stack at the time the query was issued, innermost frame first.
    pub stacktrace: Option<Vec<String>>,
    /// Skip logging this event entirely.
    pub suppress_logging: bool,
}

/// A completed database operation.
///
/// # Example
///
/// ```rust
/// use querylog::QueryEvent;
/// use querylog_core::{Dialect, Value};
///
/// let event = QueryEvent::new("SELECT * FROM users WHERE id = $1", Dialect::Postgres)
///     .bind(42)
///     .duration_secs(0.003)
///     .source("users");
///
/// assert_eq!(event.params, vec![Value::Int(42)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEvent {
    /// Statement text with placeholders.
    pub statement: String,
    /// Bound parameters in order.
    pub params: Vec<Value>,
    /// Placeholder convention of the statement.
    pub dialect: Dialect,
    /// Elapsed time in seconds.
    pub duration: f64,
    /// Additional metadata.
    pub metadata: QueryMetadata,
}

impl QueryEvent {
    /// Create an event with no parameters and zero duration.
    pub fn new(statement: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            statement: statement.into(),
            params: Vec::new(),
            dialect,
            duration: 0.0,
            metadata: QueryMetadata::default(),
        }
    }

    /// Create an event from a dialect identifier such as `"postgres"` or `"mssql"`.
    pub fn with_adapter(statement: impl Into<String>, adapter: &str) -> Result<Self> {
        Ok(Self::new(statement, adapter.parse()?))
    }

    /// Append one bound parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Replace all bound parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = Value>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    /// Set the elapsed time in fractional seconds.
    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    /// Set the elapsed time.
    pub fn duration(mut self, elapsed: Duration) -> Self {
        self.duration = elapsed.as_secs_f64();
        self
    }

    /// Set the source tag.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.metadata.source = Some(source.into());
        self
    }

    /// Attach a stack trace, innermost frame first.
    pub fn stacktrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.stacktrace = Some(frames.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the event as not to be logged.
    pub fn suppress(mut self, suppress: bool) -> Self {
        self.metadata.suppress_logging = suppress;
        self
    }
}
