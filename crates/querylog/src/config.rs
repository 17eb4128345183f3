//! Logger configuration.
//!
//! Configuration can be built in code with the `with_*` methods or loaded
//! from JSON:
//!
//! ```rust
//! use querylog::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "thresholds": [
//!         { "limit": 0.01, "color": "yellow" },
//!         { "limit": 0.5, "color": "red" }
//!     ],
//!     "color_mode": "never",
//!     "suppress": ["(?i)password"],
//!     "stacktrace": { "prefixes": ["src/"], "depth": 2 }
//! }"#).unwrap();
//!
//! assert_eq!(config.stacktrace_depth(), 2);
//! ```

use querylog_console::{Color, ColorMode, Threshold, Thresholds};
use querylog_core::{Dialect, Error, Result};
use regex::Regex;
use serde::Deserialize;

use crate::sink::LogLevel;

/// Settings that shape every log line a [`QueryLogger`](crate::QueryLogger) writes.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    thresholds: Thresholds,
    color_mode: ColorMode,
    suppress: Vec<Regex>,
    ignore_sources: Vec<String>,
    stacktrace_prefixes: Vec<String>,
    stacktrace_depth: usize,
    repo_name: Option<String>,
    level: LogLevel,
    dialect: Dialect,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            color_mode: ColorMode::default(),
            suppress: Vec::new(),
            ignore_sources: Vec::new(),
            stacktrace_prefixes: Vec::new(),
            stacktrace_depth: 1,
            repo_name: None,
            level: LogLevel::default(),
            dialect: Dialect::default(),
        }
    }
}

/// Serialized form, validated by [`LoggerConfig::from_json`].
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    thresholds: Option<Vec<Threshold>>,
    fast_color: Color,
    color_mode: ColorMode,
    suppress: Vec<String>,
    ignore_sources: Vec<String>,
    stacktrace: RawStacktrace,
    repo_name: Option<String>,
    level: LogLevel,
    dialect: Dialect,
}

impl Default for RawConfig {
    fn default() -> Self {
        let defaults = LoggerConfig::default();
        Self {
            thresholds: None,
            fast_color: defaults.thresholds.fast_color(),
            color_mode: defaults.color_mode,
            suppress: Vec::new(),
            ignore_sources: Vec::new(),
            stacktrace: RawStacktrace::default(),
            repo_name: None,
            level: defaults.level,
            dialect: defaults.dialect,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStacktrace {
    prefixes: Vec<String>,
    depth: usize,
}

impl Default for RawStacktrace {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            depth: 1,
        }
    }
}

impl LoggerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Every field is optional; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let thresholds = match raw.thresholds {
            Some(steps) => Thresholds::new(steps, raw.fast_color)?,
            None => Thresholds::default().with_fast_color(raw.fast_color),
        };
        let suppress = raw
            .suppress
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            thresholds,
            color_mode: raw.color_mode,
            suppress,
            ignore_sources: raw.ignore_sources,
            stacktrace_prefixes: raw.stacktrace.prefixes,
            stacktrace_depth: raw.stacktrace.depth,
            repo_name: raw.repo_name,
            level: raw.level,
            dialect: raw.dialect,
        })
    }

    /// Set the duration thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the color used for queries below every threshold.
    pub fn with_fast_color(mut self, color: Color) -> Self {
        self.thresholds = self.thresholds.with_fast_color(color);
        self
    }

    /// Set whether lines carry ANSI escapes.
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Skip statements matching `pattern`.
    ///
    /// Use this to keep statements touching sensitive columns out of logs.
    pub fn suppress_matching(mut self, pattern: &str) -> Result<Self> {
        self.suppress.push(Regex::new(pattern)?);
        Ok(self)
    }

    /// Skip events whose source tag equals `source`.
    pub fn ignore_source(mut self, source: impl Into<String>) -> Self {
        self.ignore_sources.push(source.into());
        self
    }

    /// Only show stack frames starting with `prefix`. May be called repeatedly.
    pub fn with_stacktrace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.stacktrace_prefixes.push(prefix.into());
        self
    }

    /// Maximum number of stack frames shown per line. Zero hides stack traces.
    pub fn with_stacktrace_depth(mut self, depth: usize) -> Self {
        self.stacktrace_depth = depth;
        self
    }

    /// Prefix every line with a repository label.
    pub fn with_repo_name(mut self, name: impl Into<String>) -> Self {
        self.repo_name = Some(name.into());
        self
    }

    /// Level used by the tracing sink.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Dialect assumed by [`QueryLogger::event`](crate::QueryLogger::event).
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Parse and set the default dialect from an identifier.
    pub fn with_adapter(self, adapter: &str) -> Result<Self> {
        Ok(self.with_dialect(adapter.parse()?))
    }

    /// Duration thresholds.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Suppression patterns.
    pub fn suppress_patterns(&self) -> &[Regex] {
        &self.suppress
    }

    /// Ignored source tags.
    pub fn ignore_sources(&self) -> &[String] {
        &self.ignore_sources
    }

    /// Stack frame prefixes.
    pub fn stacktrace_prefixes(&self) -> &[String] {
        &self.stacktrace_prefixes
    }

    /// Maximum stack frames per line.
    pub fn stacktrace_depth(&self) -> usize {
        self.stacktrace_depth
    }

    /// Repository label.
    pub fn repo_name(&self) -> Option<&str> {
        self.repo_name.as_deref()
    }

    /// Tracing level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Default dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether a statement is excluded by a suppression pattern.
    pub fn is_suppressed(&self, statement: &str) -> bool {
        self.suppress.iter().any(|re| re.is_match(statement))
    }

    /// Whether a source tag is ignored.
    pub fn is_ignored_source(&self, source: Option<&str>) -> bool {
        source.is_some_and(|s| self.ignore_sources.iter().any(|i| i == s))
    }
}

impl TryFrom<&str> for LoggerConfig {
    type Error = Error;

    fn try_from(json: &str) -> Result<Self> {
        Self::from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.thresholds(), &Thresholds::default());
        assert_eq!(config.color_mode(), ColorMode::Always);
        assert_eq!(config.stacktrace_depth(), 1);
        assert_eq!(config.level(), LogLevel::Debug);
        assert_eq!(config.dialect(), Dialect::Postgres);
        assert!(config.repo_name().is_none());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config.thresholds(), &Thresholds::default());
        assert_eq!(config.stacktrace_depth(), 1);
    }

    #[test]
    fn test_full_json() {
        let config = LoggerConfig::from_json(
            r#"{
                "thresholds": [{"limit": 0.2, "color": "magenta"}],
                "fast_color": "green",
                "color_mode": "never",
                "suppress": ["users\\.password"],
                "ignore_sources": ["schema_migrations"],
                "stacktrace": {"prefixes": ["app/"], "depth": 3},
                "repo_name": "Repo",
                "level": "info",
                "dialect": "mssql"
            }"#,
        )
        .unwrap();

        assert_eq!(config.thresholds().classify(0.3), Color::Magenta);
        assert_eq!(config.thresholds().classify(0.1), Color::Green);
        assert_eq!(config.color_mode(), ColorMode::Never);
        assert!(config.is_suppressed("UPDATE users SET users.password = $1"));
        assert!(config.is_ignored_source(Some("schema_migrations")));
        assert!(!config.is_ignored_source(None));
        assert_eq!(config.stacktrace_prefixes(), ["app/".to_string()]);
        assert_eq!(config.stacktrace_depth(), 3);
        assert_eq!(config.repo_name(), Some("Repo"));
        assert_eq!(config.level(), LogLevel::Info);
        assert_eq!(config.dialect(), Dialect::Tds);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            LoggerConfig::from_json(r#"{"dialect": "oracle"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json(r#"{"suppress": ["("]}"#),
            Err(Error::Regex(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json(
                r#"{"thresholds": [{"limit": 0.5, "color": "red"}, {"limit": 0.1, "color": "yellow"}]}"#
            ),
            Err(Error::InvalidConfig(_))
        ));
        assert!(LoggerConfig::from_json(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let config = LoggerConfig::new()
            .with_fast_color(Color::Default)
            .with_color_mode(ColorMode::Never)
            .suppress_matching("(?i)secret")
            .unwrap()
            .ignore_source("sessions")
            .with_stacktrace_prefix("src/")
            .with_stacktrace_depth(0)
            .with_repo_name("Primary")
            .with_adapter("mysql")
            .unwrap();

        assert_eq!(config.thresholds().fast_color(), Color::Default);
        assert!(config.is_suppressed("select SECRET from vault"));
        assert!(config.is_ignored_source(Some("sessions")));
        assert_eq!(config.stacktrace_depth(), 0);
        assert_eq!(config.dialect(), Dialect::MySql);
        assert!(LoggerConfig::new().with_adapter("db2").is_err());
    }
}
