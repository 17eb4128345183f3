//! Core types for querylog.
//!
//! `querylog-core` is the **foundation layer** of the workspace. It knows how
//! bound parameters look and how each database spells them, but nothing
//! about terminals or log sinks.
//!
//! # Role In The Architecture
//!
//! - **Data model**: [`Value`] is the closed set of parameter types handed
//!   over by the model layer.
//! - **Dialects**: [`Dialect`] and its static [`DialectSpec`] describe the
//!   placeholder grammar and literal spelling of each supported database.
//! - **Rendering**: [`render`] turns one value into literal text.
//! - **Scanning**: [`scan`] finds placeholder occurrences in a statement.
//!
//! `querylog-console` builds parameter inlining and coloring on top of this
//! crate; the `querylog` facade adds events, configuration, and sinks.

pub mod dialect;
pub mod error;
pub mod render;
pub mod scan;
pub mod value;

pub use dialect::{ArrayStyle, BinaryStyle, BoolStyle, Dialect, DialectSpec, Numbering};
pub use error::{Error, Result};
pub use render::{quote_text, render};
pub use scan::{PlaceholderOccurrence, required_params, scan};
pub use value::Value;
