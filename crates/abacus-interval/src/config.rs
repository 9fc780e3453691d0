use serde::{Deserialize, Serialize};

use crate::error::{IntervalError, IntervalResult};

/// Fraction of the narrower width the overlap must strictly exceed.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// How interval edges are checked before merging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// No checks. Malformed spans flow through the overlap arithmetic.
    #[default]
    Off,
    /// Reject `left > right` and non-finite edges.
    Strict,
}

/// Treatment of intervals with `left == right`.
///
/// A zero-width interval has a non-positive overlap with any well-formed
/// span, so under `Allow` it never absorbs or is absorbed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWidthPolicy {
    #[default]
    Allow,
    Reject,
}

/// Configuration for an [`IntervalMerger`](crate::IntervalMerger).
///
/// The default reproduces the plain merge: threshold `0.5`, no validation,
/// zero-width spans allowed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Overlap ratio threshold, in `[0, 1)`.
    pub threshold: f64,
    /// Edge validation mode.
    pub validation: Validation,
    /// Zero-width interval policy.
    pub zero_width: ZeroWidthPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            validation: Validation::Off,
            zero_width: ZeroWidthPolicy::Allow,
        }
    }
}

impl MergeConfig {
    /// Strict validation with zero-width spans rejected.
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            zero_width: ZeroWidthPolicy::Reject,
            ..Default::default()
        }
    }

    /// Override the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check that the threshold is finite and in `[0, 1)`.
    pub fn validate(&self) -> IntervalResult<()> {
        if self.threshold.is_finite() && (0.0..1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(IntervalError::InvalidThreshold(self.threshold))
        }
    }
}
