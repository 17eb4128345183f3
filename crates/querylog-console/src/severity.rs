//! Duration severity.
//!
//! Maps how long a query took to the color its log line is drawn in, so slow
//! queries stand out.

use querylog_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One severity step: durations at or above `limit` seconds use `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Lower bound in seconds, inclusive.
    pub limit: f64,
    /// Color for durations that reach this limit.
    pub color: Color,
}

impl Threshold {
    /// Create a threshold.
    pub const fn new(limit: f64, color: Color) -> Self {
        Self { limit, color }
    }
}

/// Ascending list of severity thresholds plus the color for fast queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    steps: Vec<Threshold>,
    fast: Color,
}

impl Default for Thresholds {
    /// 50ms turns yellow, 100ms turns red, anything faster is cyan.
    fn default() -> Self {
        Self {
            steps: vec![
                Threshold::new(0.05, Color::Yellow),
                Threshold::new(0.1, Color::Red),
            ],
            fast: Color::Cyan,
        }
    }
}

impl Thresholds {
    /// Build a threshold list.
    ///
    /// Limits must be finite, non-negative, and strictly ascending.
    pub fn new(steps: Vec<Threshold>, fast: Color) -> Result<Self> {
        for step in &steps {
            if !step.limit.is_finite() || step.limit < 0.0 {
                return Err(Error::invalid_config(format!(
                    "threshold limit must be a non-negative number of seconds, got {}",
                    step.limit
                )));
            }
        }
        if let Some(pair) = steps.windows(2).find(|w| w[0].limit >= w[1].limit) {
            return Err(Error::invalid_config(format!(
                "thresholds must be strictly ascending: {} is not below {}",
                pair[0].limit, pair[1].limit
            )));
        }
        Ok(Self { steps, fast })
    }

    /// Build from `(limit, color)` pairs.
    pub fn from_pairs(pairs: &[(f64, Color)], fast: Color) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(limit, color)| Threshold::new(limit, color))
                .collect(),
            fast,
        )
    }

    /// Replace the fast color.
    #[must_use]
    pub fn with_fast_color(mut self, fast: Color) -> Self {
        self.fast = fast;
        self
    }

    /// The configured steps, ascending.
    pub fn steps(&self) -> &[Threshold] {
        &self.steps
    }

    /// Color used below every limit.
    pub fn fast_color(&self) -> Color {
        self.fast
    }

    /// Pick the color for a duration in seconds.
    ///
    /// Returns the color of the highest limit the duration reaches, or the
    /// fast color when it reaches none. A NaN duration counts as fast.
    pub fn classify(&self, duration: f64) -> Color {
        classify(duration, &self.steps, self.fast)
    }
}

/// Pick the color for `duration` from an ascending threshold list.
pub fn classify(duration: f64, thresholds: &[Threshold], fast: Color) -> Color {
    thresholds
        .iter()
        .take_while(|t| duration >= t.limit)
        .last()
        .map_or(fast, |t| t.color)
}
