//! Readable, colorized SQL query logs for development.
//!
//! `querylog` takes a finished database operation (statement text, bound
//! parameters, elapsed time) and produces one log line with every
//! placeholder replaced by a colored literal, so the logged statement can be
//! read (or copied into a SQL console) as is.
//!
//! # Crates
//!
//! - `querylog-core`: [`Value`], [`Dialect`], literal rendering and
//!   placeholder scanning.
//! - `querylog-console`: colors, [`inline_params`], duration thresholds.
//! - `querylog` (this crate): [`QueryEvent`], [`LoggerConfig`], sinks and
//!   the [`QueryLogger`] that ties them together.
//!
//! # Example
//!
//! ```rust
//! use querylog::prelude::*;
//!
//! let logger = QueryLogger::tracing(LoggerConfig::new().with_repo_name("Repo"));
//!
//! let event = QueryEvent::new("SELECT * FROM posts WHERE id = $1", Dialect::Postgres)
//!     .bind(1)
//!     .duration_secs(0.004)
//!     .source("posts");
//! logger.handle(&event);
//! ```

pub mod config;
pub mod event;
pub mod logger;
pub mod sink;
pub mod stacktrace;

pub use config::LoggerConfig;
pub use event::{QueryEvent, QueryMetadata};
pub use logger::{QueryLogger, format_duration};
pub use sink::{LogLevel, LogSink, MemorySink, TracingSink, WriterSink};

pub use querylog_console::{
    Color, ColorMode, Threshold, Thresholds, annotate, classify, inline_params,
    inline_params_plain,
};
pub use querylog_core::{Dialect, Error, Result, Value, render, scan};

/// Common imports.
pub mod prelude {
    pub use crate::{
        Color, ColorMode, Dialect, Error, LogSink, LoggerConfig, MemorySink, QueryEvent,
        QueryLogger, Result, Thresholds, TracingSink, Value, WriterSink,
    };
}
