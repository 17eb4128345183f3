//! Terminal colors and parameter annotation.
//!
//! # Example
//!
//! ```rust
//! use querylog_console::{Color, annotate};
//!
//! let literal = annotate("'alice'", Color::Yellow);
//! assert_eq!(literal, "\x1b[34m'alice'\x1b[33m");
//! ```

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

use querylog_core::Error;
use serde::{Deserialize, Serialize};

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Accent color for inlined parameter literals.
pub const PARAM_COLOR: Color = Color::Blue;

/// Foreground colors a log line or literal can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    #[default]
    Cyan,
    White,
    /// Bright black, rendered as gray by most terminals.
    Gray,
    /// The terminal's default foreground.
    Default,
}

impl Color {
    /// Every color, in escape code order.
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::Default,
    ];

    /// Get the ANSI escape sequence that switches to this color.
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Gray => "\x1b[90m",
            Self::Default => "\x1b[39m",
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "grey" | "bright_black" => Ok(Color::Gray),
            _ => Color::ALL
                .into_iter()
                .find(|c| c.as_str() == name)
                .ok_or_else(|| Error::UnknownColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.as_str().to_string()
    }
}

/// Whether output carries ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stderr is a terminal and `NO_COLOR` is unset.
    Auto,
    /// Always emit escapes.
    #[default]
    Always,
    /// Never emit escapes; plain text for agents and CI logs.
    Never,
}

impl ColorMode {
    /// Resolve the mode to a yes/no decision for the current process.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }
}

/// Wrap a rendered literal in the parameter accent color.
///
/// The literal is followed by the escape for `restore`, so text written
/// after it continues in the surrounding line's color.
#[must_use]
pub fn annotate(literal: &str, restore: Color) -> String {
    let accent = PARAM_COLOR.escape();
    let restore = restore.escape();
    let mut out = String::with_capacity(accent.len() + literal.len() + restore.len());
    out.push_str(accent);
    out.push_str(literal);
    out.push_str(restore);
    out
}
