//! Terminal-facing pieces of querylog.
//!
//! - [`Color`] and [`annotate`]: ANSI colors and the parameter accent.
//! - [`inline_params`]: rebuild a statement with colorized literals.
//! - [`Thresholds`]: pick a line color from query duration.
//!
//! Everything here is a pure function of its inputs and safe to call from
//! any number of threads.

pub mod color;
pub mod inline;
pub mod severity;

pub use color::{Color, ColorMode, PARAM_COLOR, RESET, annotate};
pub use inline::{inline_params, inline_params_plain};
pub use severity::{Threshold, Thresholds, classify};
