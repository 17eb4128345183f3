//! Error types for querylog.

use std::error::Error as StdError;
use std::fmt;

/// The error type shared by every querylog crate.
#[derive(Debug)]
pub enum Error {
    /// A dialect identifier that does not name a supported dialect.
    UnsupportedDialect(String),
    /// A placeholder references a parameter that was not bound.
    ParamCountMismatch {
        /// Zero-based parameter index the placeholder refers to.
        index: usize,
        /// Number of bound parameters supplied.
        params: usize,
    },
    /// A configuration value failed validation.
    InvalidConfig(String),
    /// A color name that is not one of the known terminal colors.
    UnknownColor(String),
    /// JSON configuration could not be parsed.
    Json(serde_json::Error),
    /// A suppression pattern is not a valid regular expression.
    Regex(regex::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// Whether this error indicates misuse by the caller rather than bad configuration.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Error::ParamCountMismatch { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedDialect(tag) => write!(f, "unsupported dialect: {}", tag),
            Error::ParamCountMismatch { index, params } => write!(
                f,
                "parameter count mismatch: placeholder refers to parameter {} but {} were bound",
                index + 1,
                params
            ),
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Error::UnknownColor(name) => write!(f, "unknown color: {}", name),
            Error::Json(err) => write!(f, "json error: {}", err),
            Error::Regex(err) => write!(f, "regex error: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Regex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Regex(err)
    }
}

/// Result type alias for querylog operations.
pub type Result<T> = std::result::Result<T, Error>;
