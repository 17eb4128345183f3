//! SQL dialect descriptors.
//!
//! Each supported database wire convention is described by a static
//! [`DialectSpec`]. The scanner and renderer read the descriptor instead of
//! branching on the dialect themselves, so a new dialect is one more
//! descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How placeholders in a statement map to bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// Marker followed by a 1-based parameter number (`$1`, `@1`).
    Numbered,
    /// Bare marker; the k-th marker binds the k-th parameter (`?`).
    Sequential,
}

/// Spelling of boolean literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolStyle {
    /// `TRUE` / `FALSE`
    Keyword,
    /// `1` / `0`
    Bit,
}

/// Spelling of hex-encoded binary literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryStyle {
    /// `'\xdeadbeef'`
    EscapedString,
    /// `0xdeadbeef`
    ZeroX,
    /// `x'deadbeef'`
    XQuoted,
}

/// Spelling of array literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    /// `ARRAY[1, 2]`
    Constructor,
    /// `(1, 2)`
    Parenthesized,
}

/// Static description of one dialect's conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectSpec {
    /// Human-readable dialect name.
    pub name: &'static str,
    /// Placeholder marker character.
    pub marker: char,
    /// How markers map to parameters.
    pub numbering: Numbering,
    /// Boolean literal spelling.
    pub bool_style: BoolStyle,
    /// Binary literal spelling.
    pub binary_style: BinaryStyle,
    /// Array literal spelling.
    pub array_style: ArrayStyle,
    /// Whether quoted identifiers are compared case-sensitively.
    pub case_sensitive_identifiers: bool,
}

static POSTGRES: DialectSpec = DialectSpec {
    name: "postgres",
    marker: '$',
    numbering: Numbering::Numbered,
    bool_style: BoolStyle::Keyword,
    binary_style: BinaryStyle::EscapedString,
    array_style: ArrayStyle::Constructor,
    case_sensitive_identifiers: true,
};

static TDS: DialectSpec = DialectSpec {
    name: "tds",
    marker: '@',
    numbering: Numbering::Numbered,
    bool_style: BoolStyle::Bit,
    binary_style: BinaryStyle::ZeroX,
    array_style: ArrayStyle::Parenthesized,
    case_sensitive_identifiers: false,
};

static MYSQL: DialectSpec = DialectSpec {
    name: "mysql",
    marker: '?',
    numbering: Numbering::Sequential,
    bool_style: BoolStyle::Keyword,
    binary_style: BinaryStyle::XQuoted,
    array_style: ArrayStyle::Parenthesized,
    case_sensitive_identifiers: false,
};

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// PostgreSQL style `$N` placeholders.
    #[default]
    Postgres,
    /// SQL Server (TDS) style `@N` placeholders.
    Tds,
    /// MySQL style `?` placeholders.
    MySql,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::Tds, Dialect::MySql];

    /// The static descriptor for this dialect.
    pub fn spec(self) -> &'static DialectSpec {
        match self {
            Dialect::Postgres => &POSTGRES,
            Dialect::Tds => &TDS,
            Dialect::MySql => &MYSQL,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Placeholder marker character.
    pub fn marker(self) -> char {
        self.spec().marker
    }

    /// Whether placeholders carry explicit parameter numbers.
    pub fn is_numbered(self) -> bool {
        matches!(self.spec().numbering, Numbering::Numbered)
    }

    /// Generate the placeholder for a 1-based parameter index.
    pub fn placeholder(self, index: usize) -> String {
        match self.spec().numbering {
            Numbering::Numbered => format!("{}{}", self.marker(), index),
            Numbering::Sequential => self.marker().to_string(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "tds" | "mssql" | "sqlserver" => Ok(Dialect::Tds),
            "mysql" | "mariadb" | "sqlite" | "sqlite3" => Ok(Dialect::MySql),
            _ => Err(Error::UnsupportedDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dialect> for String {
    fn from(d: Dialect) -> Self {
        d.name().to_string()
    }
}
